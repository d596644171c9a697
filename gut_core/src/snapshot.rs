//! # Recompute
//!
//! One full pass of the pipeline: rank → classify → chart → export. Every
//! front end calls [`recompute`] after each edit and renders only what it
//! returns; nothing is cached between passes.

use serde::Serialize;

use crate::action::Action;
use crate::chart::ChartSpec;
use crate::errors::GutResult;
use crate::export::to_csv;
use crate::ranking::{rank, RankedAction};
use crate::settings::GutSettings;

/// Output of one recompute pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Ranked and classified rows, highest priority first
    pub rows: Vec<RankedAction>,
    pub chart: ChartSpec,
    /// CSV bytes of `rows`
    #[serde(skip)]
    pub export: Vec<u8>,
}

/// Recompute the ranked table, chart and export from the current scores.
pub fn recompute(actions: &[Action], settings: &GutSettings) -> GutResult<Snapshot> {
    let rows = rank(actions);
    let chart = ChartSpec::from_rows(&rows, settings);
    let export = to_csv(&rows, settings.locale)?;

    tracing::debug!(
        actions = rows.len(),
        top = ?rows.first().map(|r| r.id),
        export_bytes = export.len(),
        "recomputed ranking"
    );

    Ok(Snapshot { rows, chart, export })
}
