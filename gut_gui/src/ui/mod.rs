//! UI module for the GUT Matrix GUI
//!
//! # Panel Structure
//! - `toolbar` - Title, Export CSV, Reset All, locale and theme toggles
//! - `editor_panel` - Left panel: G/U/T sliders per action, catalog order
//! - `ranking_panel` - Right panel: ranked table and bar chart
//! - `status_bar` - Bottom status messages
//!
//! # Shared Components
//! - `shared/bar_chart` - Canvas drawing for the horizontal priority chart

pub mod toolbar;
pub mod editor_panel;
pub mod ranking_panel;
pub mod status_bar;

pub mod shared;
