//! # Worksheet
//!
//! The session's editable copy of the catalog. Each editor control is bound
//! to one `(ActionId, Criterion)` pair, so an edit always lands on the
//! intended action no matter where that action currently sits in the ranked
//! view.
//!
//! The worksheet keeps catalog order; ranking happens on demand in
//! [`Worksheet::snapshot`].
//!
//! ## Example
//!
//! ```rust
//! use gut_core::action::{ActionId, Criterion};
//! use gut_core::settings::GutSettings;
//! use gut_core::worksheet::Worksheet;
//!
//! let mut sheet = Worksheet::from_seed();
//! sheet.set_scores(ActionId(12), 5, 5, 5)?;
//!
//! let snapshot = sheet.snapshot(&GutSettings::default())?;
//! assert_eq!(snapshot.rows[0].id, ActionId(12));
//! # Ok::<(), gut_core::errors::GutError>(())
//! ```

use std::collections::HashSet;

use crate::action::{Action, ActionId, Criterion, GutScores, Score};
use crate::catalog::{seed_catalog, seed_scores};
use crate::errors::{GutError, GutResult};
use crate::settings::GutSettings;
use crate::snapshot::{recompute, Snapshot};

/// Editable, in-memory table of actions for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worksheet {
    actions: Vec<Action>,
}

impl Worksheet {
    /// Start a session from the seed catalog.
    pub fn from_seed() -> Self {
        Worksheet {
            actions: seed_catalog(),
        }
    }

    /// Start a session from an explicit list of actions (kept in given order).
    ///
    /// Ids must be unique. Actions outside the seed catalog can be edited
    /// but have no seed scores, so `reset_action` reports them as unknown.
    pub fn new(actions: Vec<Action>) -> GutResult<Self> {
        let mut seen = HashSet::new();
        for action in &actions {
            if !seen.insert(action.id()) {
                return Err(GutError::invalid_input("id", action.id().to_string(), "Duplicate action id"));
            }
        }
        Ok(Worksheet { actions })
    }

    /// Actions in catalog order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn action(&self, id: ActionId) -> Option<&Action> {
        self.actions.iter().find(|a| a.id() == id)
    }

    fn action_mut(&mut self, id: ActionId) -> GutResult<&mut Action> {
        self.actions
            .iter_mut()
            .find(|a| a.id() == id)
            .ok_or_else(|| GutError::unknown_action(id.0))
    }

    /// Overwrite one score of one action.
    ///
    /// Values outside `[1, 5]` are clamped to the nearest end of the range.
    /// Returns the score actually stored.
    pub fn set_score(&mut self, id: ActionId, criterion: Criterion, value: i64) -> GutResult<Score> {
        let score = Score::clamped(value);
        if i64::from(score.value()) != value {
            tracing::warn!(id = %id, %criterion, value, clamped = score.value(), "score out of range, clamped");
        }

        let action = self.action_mut(id)?;
        action.scores.set(criterion, score);
        tracing::debug!(id = %id, %criterion, score = score.value(), "score updated");
        Ok(score)
    }

    /// Overwrite all three scores of one action (each clamped).
    pub fn set_scores(&mut self, id: ActionId, gravity: i64, urgency: i64, trend: i64) -> GutResult<GutScores> {
        // Look the id up first so an unknown id leaves the sheet untouched
        self.action_mut(id)?;
        self.set_score(id, Criterion::Gravity, gravity)?;
        self.set_score(id, Criterion::Urgency, urgency)?;
        self.set_score(id, Criterion::Trend, trend)?;
        Ok(self.action_mut(id)?.scores)
    }

    /// Restore one action's seed scores.
    pub fn reset_action(&mut self, id: ActionId) -> GutResult<()> {
        let seed = seed_scores(id).ok_or_else(|| GutError::unknown_action(id.0))?;
        self.action_mut(id)?.scores = seed;
        Ok(())
    }

    /// Restore every action's seed scores.
    pub fn reset(&mut self) {
        for action in &mut self.actions {
            if let Some(seed) = seed_scores(action.id()) {
                action.scores = seed;
            }
        }
        tracing::debug!("worksheet reset to seed scores");
    }

    /// Whether an action's scores differ from its seed scores.
    pub fn is_action_modified(&self, id: ActionId) -> bool {
        match (self.action(id), seed_scores(id)) {
            (Some(action), Some(seed)) => action.scores != seed,
            _ => false,
        }
    }

    /// Whether any action differs from the seed catalog.
    pub fn is_modified(&self) -> bool {
        self.actions.iter().any(|a| self.is_action_modified(a.id()))
    }

    /// Rank, classify, build the chart and the export for the current scores.
    pub fn snapshot(&self, settings: &GutSettings) -> GutResult<Snapshot> {
        recompute(&self.actions, settings)
    }
}

impl Default for Worksheet {
    fn default() -> Self {
        Worksheet::from_seed()
    }
}
