//! # gut_core - GUT Prioritization Engine
//!
//! `gut_core` ranks candidate actions with the GUT method: every action gets
//! a Gravity, Urgency and Trend score from 1 to 5, its priority is the
//! product of the three, and actions are ranked from highest to lowest
//! priority and classified into High / Medium / Low tiers.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: ranking is a pure function of the current scores
//! - **Keyed by id**: every edit targets an [`ActionId`], never a row position
//! - **Always in range**: a [`Score`] cannot hold a value outside 1..=5
//! - **Rich Errors**: structured error types at the I/O edges
//!
//! ## Quick Start
//!
//! ```rust
//! use gut_core::{ActionId, GutSettings, Tier, Worksheet};
//!
//! let mut sheet = Worksheet::from_seed();
//! sheet.set_scores(ActionId(12), 5, 5, 5)?;
//!
//! let snapshot = sheet.snapshot(&GutSettings::default())?;
//! assert_eq!(snapshot.rows[0].tier, Tier::High);
//! assert!(snapshot.export.starts_with(b"id,label"));
//! # Ok::<(), gut_core::GutError>(())
//! ```
//!
//! ## Modules
//!
//! - [`action`] - Action, scores, priority
//! - [`catalog`] - The seeded list of 12 actions
//! - [`worksheet`] - Session editor model keyed by action id
//! - [`ranking`] - Priority ordering and tier classification
//! - [`chart`] - Bar chart description
//! - [`export`] - CSV export and re-import
//! - [`snapshot`] - One full recompute pass
//! - [`settings`] - Locale, export file name, chart title
//! - [`file_io`] - Atomic file writes
//! - [`errors`] - Structured error types

pub mod action;
pub mod catalog;
pub mod chart;
pub mod errors;
pub mod export;
pub mod file_io;
pub mod ranking;
pub mod settings;
pub mod snapshot;
pub mod worksheet;

// Re-export commonly used types at crate root for convenience
pub use action::{Action, ActionId, Criterion, GutScores, Priority, Score};
pub use chart::{ChartSpec, NamedColor, Palette};
pub use errors::{GutError, GutResult};
pub use ranking::{rank, RankedAction, Tier};
pub use settings::{load_settings, GutSettings, Locale, EXPORT_FILE_NAME};
pub use snapshot::{recompute, Snapshot};
pub use worksheet::Worksheet;
