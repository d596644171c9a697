//! Shared UI components
//!
//! Contains:
//! - `bar_chart` - Canvas program for the horizontal priority bar chart

pub mod bar_chart;
