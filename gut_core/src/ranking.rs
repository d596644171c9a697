//! # Ranking and Tiers
//!
//! Computes the priority of every action, orders the actions from highest to
//! lowest priority and classifies each one into a [`Tier`].
//!
//! Ties keep the order the actions had in the input (catalog order), because
//! the sort is stable.
//!
//! ## Example
//!
//! ```rust
//! use gut_core::catalog::seed_catalog;
//! use gut_core::ranking::{rank, Tier};
//!
//! let rows = rank(&seed_catalog());
//! assert_eq!(rows.len(), 12);
//! assert_eq!(rows[0].priority.value(), 100);
//! assert_eq!(rows[0].tier, Tier::High);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionId, Criterion, GutScores, Priority, Score};

/// Lowest priority classified as [`Tier::High`]
pub const HIGH_THRESHOLD: u8 = 80;

/// Lowest priority classified as [`Tier::Medium`]
pub const MEDIUM_THRESHOLD: u8 = 50;

/// Severity tier of a priority score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    /// All tiers from most to least severe
    pub const ALL: [Tier; 3] = [Tier::High, Tier::Medium, Tier::Low];

    /// Classify a priority: `>= 80` High, `>= 50` Medium, otherwise Low.
    pub fn for_priority(priority: Priority) -> Tier {
        let value = priority.value();
        if value >= HIGH_THRESHOLD {
            Tier::High
        } else if value >= MEDIUM_THRESHOLD {
            Tier::Medium
        } else {
            Tier::Low
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tier::High => "High",
            Tier::Medium => "Medium",
            Tier::Low => "Low",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the ranked table, in export column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedAction {
    pub id: ActionId,
    pub label: String,
    pub gravity: Score,
    pub urgency: Score,
    pub trend: Score,
    pub priority: Priority,
    pub tier: Tier,
}

impl RankedAction {
    /// Derive priority and tier from an action's current scores.
    pub fn from_action(action: &Action) -> Self {
        Self::from_parts(action.id(), action.label(), action.scores)
    }

    pub fn from_parts(id: ActionId, label: impl Into<String>, scores: GutScores) -> Self {
        let priority = scores.priority();
        RankedAction {
            id,
            label: label.into(),
            gravity: scores.get(Criterion::Gravity),
            urgency: scores.get(Criterion::Urgency),
            trend: scores.get(Criterion::Trend),
            priority,
            tier: Tier::for_priority(priority),
        }
    }

    pub fn scores(&self) -> GutScores {
        GutScores::new(self.gravity, self.urgency, self.trend)
    }
}

/// Rank actions by descending priority.
///
/// `sort_by` is stable, so actions with equal priority stay in input order.
pub fn rank(actions: &[Action]) -> Vec<RankedAction> {
    let mut rows: Vec<RankedAction> = actions.iter().map(RankedAction::from_action).collect();
    rows.sort_by(|a, b| b.priority.cmp(&a.priority));
    rows
}

/// 0-based position of an action in a ranked table.
pub fn position_of(rows: &[RankedAction], id: ActionId) -> Option<usize> {
    rows.iter().position(|row| row.id == id)
}

/// Number of rows per tier, in [`Tier::ALL`] order.
pub fn tier_counts(rows: &[RankedAction]) -> [(Tier, usize); 3] {
    Tier::ALL.map(|tier| (tier, rows.iter().filter(|row| row.tier == tier).count()))
}
