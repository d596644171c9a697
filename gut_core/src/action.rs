//! # Actions and GUT Scores
//!
//! An [`Action`] is one candidate initiative in the matrix. It carries an
//! immutable id and label plus three editable [`Score`]s: Gravity, Urgency
//! and Trend. The [`Priority`] is never stored; it is always derived from the
//! current scores.
//!
//! ## Example
//!
//! ```rust
//! use gut_core::action::{Action, ActionId, GutScores, Score};
//!
//! let action = Action::new(ActionId(6), "Digital platform", GutScores::from_values(4, 5, 5));
//! assert_eq!(action.priority().value(), 100);
//!
//! // Out-of-range input is clamped, never stored as-is
//! assert_eq!(Score::clamped(9).value(), 5);
//! assert_eq!(Score::clamped(-3).value(), 1);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{GutError, GutResult};

// ============================================================================
// Identity
// ============================================================================

/// Stable identity of an action, 1-based in the seed catalog.
///
/// Every editor control and every ranked row is keyed by this id, never by
/// the row's position in the current sorted view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionId(pub u32);

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ActionId {
    type Err = GutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u32>() {
            Ok(id) if id > 0 => Ok(ActionId(id)),
            _ => Err(GutError::invalid_input("id", s, "Action id must be a positive integer")),
        }
    }
}

// ============================================================================
// Criteria
// ============================================================================

/// The three GUT criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    /// G - how serious the problem is if nothing is done
    Gravity,
    /// U - how soon something has to be done
    Urgency,
    /// T - how fast the problem gets worse if left alone
    Trend,
}

impl Criterion {
    /// All criteria in G, U, T order
    pub const ALL: [Criterion; 3] = [Criterion::Gravity, Criterion::Urgency, Criterion::Trend];

    /// Single-letter code (G, U, T)
    pub fn code(&self) -> &'static str {
        match self {
            Criterion::Gravity => "G",
            Criterion::Urgency => "U",
            Criterion::Trend => "T",
        }
    }

    /// Lowercase field name as used in the export header
    pub fn field_name(&self) -> &'static str {
        match self {
            Criterion::Gravity => "gravity",
            Criterion::Urgency => "urgency",
            Criterion::Trend => "trend",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for Criterion {
    type Err = GutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "g" | "gravity" => Ok(Criterion::Gravity),
            "u" | "urgency" => Ok(Criterion::Urgency),
            "t" | "trend" => Ok(Criterion::Trend),
            _ => Err(GutError::invalid_input(
                "criterion",
                s,
                "Expected one of g, u, t (gravity, urgency, trend)",
            )),
        }
    }
}

// ============================================================================
// Scores
// ============================================================================

/// A single GUT score, always within `[Score::MIN, Score::MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Create a score, rejecting values outside `[1, 5]`.
    pub fn new(value: u8) -> GutResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Score(value))
        } else {
            Err(GutError::invalid_input(
                "score",
                value.to_string(),
                format!("Score must be between {} and {}", Self::MIN, Self::MAX),
            ))
        }
    }

    /// Create a score, clamping any integer into `[1, 5]`.
    ///
    /// This is how programmatic edits behave: like a slider that cannot be
    /// dragged past its ends.
    pub fn clamped(value: i64) -> Self {
        Score(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Score {
    type Error = GutError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Score::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product of the three scores, within `[1, 125]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Priority(pub(crate) u8);

impl Priority {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 125;

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The G, U, T triple of one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GutScores {
    pub gravity: Score,
    pub urgency: Score,
    pub trend: Score,
}

impl GutScores {
    pub fn new(gravity: Score, urgency: Score, trend: Score) -> Self {
        GutScores { gravity, urgency, trend }
    }

    /// Build from raw values, clamping each into range.
    pub fn from_values(gravity: i64, urgency: i64, trend: i64) -> Self {
        GutScores {
            gravity: Score::clamped(gravity),
            urgency: Score::clamped(urgency),
            trend: Score::clamped(trend),
        }
    }

    pub fn get(&self, criterion: Criterion) -> Score {
        match criterion {
            Criterion::Gravity => self.gravity,
            Criterion::Urgency => self.urgency,
            Criterion::Trend => self.trend,
        }
    }

    pub fn set(&mut self, criterion: Criterion, score: Score) {
        match criterion {
            Criterion::Gravity => self.gravity = score,
            Criterion::Urgency => self.urgency = score,
            Criterion::Trend => self.trend = score,
        }
    }

    /// Priority = G × U × T
    pub fn priority(&self) -> Priority {
        Priority(self.gravity.0 * self.urgency.0 * self.trend.0)
    }
}

// ============================================================================
// Action
// ============================================================================

/// One candidate initiative in the matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    id: ActionId,
    label: String,
    pub scores: GutScores,
}

impl Action {
    pub fn new(id: ActionId, label: impl Into<String>, scores: GutScores) -> Self {
        Action {
            id,
            label: label.into(),
            scores,
        }
    }

    pub fn id(&self) -> ActionId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn priority(&self) -> Priority {
        self.scores.priority()
    }
}
