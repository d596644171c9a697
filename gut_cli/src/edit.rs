//! `--set` edit parsing.
//!
//! Two forms are accepted, both keyed by action id:
//! - `ID=G,U,T` sets all three scores (`12=5,5,5`)
//! - `ID:CRITERION=V` sets one score (`12:u=5`, `3:trend=1`)

use std::str::FromStr;

use gut_core::{ActionId, Criterion, GutError, GutResult, Worksheet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreEdit {
    All {
        id: ActionId,
        gravity: i64,
        urgency: i64,
        trend: i64,
    },
    One {
        id: ActionId,
        criterion: Criterion,
        value: i64,
    },
}

impl ScoreEdit {
    pub fn apply(&self, sheet: &mut Worksheet) -> GutResult<()> {
        match *self {
            ScoreEdit::All { id, gravity, urgency, trend } => {
                sheet.set_scores(id, gravity, urgency, trend)?;
            }
            ScoreEdit::One { id, criterion, value } => {
                sheet.set_score(id, criterion, value)?;
            }
        }
        Ok(())
    }
}

fn parse_value(raw: &str, field: &str) -> GutResult<i64> {
    raw.trim()
        .parse()
        .map_err(|_| GutError::invalid_input(field, raw, "Score must be an integer"))
}

impl FromStr for ScoreEdit {
    type Err = GutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| GutError::invalid_input("set", s, "Expected ID=G,U,T or ID:CRITERION=V"))?;

        if let Some((id, criterion)) = key.split_once(':') {
            return Ok(ScoreEdit::One {
                id: id.parse()?,
                criterion: criterion.parse()?,
                value: parse_value(value, "value")?,
            });
        }

        let parts: Vec<&str> = value.split(',').collect();
        let [g, u, t] = parts.as_slice() else {
            return Err(GutError::invalid_input("set", s, "Expected three comma-separated scores"));
        };

        Ok(ScoreEdit::All {
            id: key.parse()?,
            gravity: parse_value(g, "gravity")?,
            urgency: parse_value(u, "urgency")?,
            trend: parse_value(t, "trend")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all() {
        assert_eq!(
            "12=5,5,5".parse::<ScoreEdit>().unwrap(),
            ScoreEdit::All { id: ActionId(12), gravity: 5, urgency: 5, trend: 5 }
        );
    }

    #[test]
    fn test_parse_one() {
        assert_eq!(
            "3:trend=1".parse::<ScoreEdit>().unwrap(),
            ScoreEdit::One { id: ActionId(3), criterion: Criterion::Trend, value: 1 }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!("12".parse::<ScoreEdit>().is_err());
        assert!("12=5,5".parse::<ScoreEdit>().is_err());
        assert!("x=5,5,5".parse::<ScoreEdit>().is_err());
        assert!("12:z=5".parse::<ScoreEdit>().is_err());
        assert!("12:g=high".parse::<ScoreEdit>().is_err());
    }

    #[test]
    fn test_apply_clamps() {
        let mut sheet = Worksheet::from_seed();
        "2:g=9".parse::<ScoreEdit>().unwrap().apply(&mut sheet).unwrap();
        assert_eq!(sheet.action(ActionId(2)).unwrap().scores.gravity.value(), 5);
        "2=0,0,0".parse::<ScoreEdit>().unwrap().apply(&mut sheet).unwrap();
        assert_eq!(sheet.action(ActionId(2)).unwrap().priority().value(), 1);
    }
}
