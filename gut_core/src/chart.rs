//! # Chart Layout
//!
//! A renderer-independent description of the horizontal bar chart: one bar
//! per ranked action, bar length = priority, bar color keyed by tier. The
//! GUI draws it on a canvas and the CLI prints it as text; neither does any
//! computation of its own.

use serde::Serialize;

use crate::action::{ActionId, Priority};
use crate::ranking::{RankedAction, Tier};
use crate::settings::GutSettings;

/// A named chart color with its sRGB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NamedColor {
    pub name: &'static str,
    pub rgb: [u8; 3],
}

impl NamedColor {
    pub const RED: NamedColor = NamedColor { name: "red", rgb: [255, 0, 0] };
    pub const ORANGE: NamedColor = NamedColor { name: "orange", rgb: [255, 165, 0] };
    pub const GREEN: NamedColor = NamedColor { name: "green", rgb: [0, 128, 0] };

    /// Channels scaled to `0.0..=1.0`
    pub fn rgb_f32(&self) -> [f32; 3] {
        self.rgb.map(|c| c as f32 / 255.0)
    }
}

/// Fixed tier palette: High = red, Medium = orange, Low = green.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub high: NamedColor,
    pub medium: NamedColor,
    pub low: NamedColor,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            high: NamedColor::RED,
            medium: NamedColor::ORANGE,
            low: NamedColor::GREEN,
        }
    }
}

impl Palette {
    pub fn color(&self, tier: Tier) -> NamedColor {
        match tier {
            Tier::High => self.high,
            Tier::Medium => self.medium,
            Tier::Low => self.low,
        }
    }
}

/// One bar of the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bar {
    pub id: ActionId,
    pub label: String,
    pub priority: Priority,
    pub tier: Tier,
    /// Tier label in the session's locale, shown in the legend
    pub tier_label: &'static str,
    pub color: NamedColor,
}

/// Horizontal bar chart: x = priority, y = label, color = tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_field: &'static str,
    pub y_field: &'static str,
    pub color_field: &'static str,
    /// Upper end of the x axis
    pub x_max: u8,
    pub palette: Palette,
    /// Bars in ranked order, highest priority first
    pub bars: Vec<Bar>,
}

impl ChartSpec {
    pub fn from_rows(rows: &[RankedAction], settings: &GutSettings) -> Self {
        let palette = Palette::default();
        let headers = settings.locale.column_headers();

        let bars = rows
            .iter()
            .map(|row| Bar {
                id: row.id,
                label: row.label.clone(),
                priority: row.priority,
                tier: row.tier,
                tier_label: settings.locale.tier_label(row.tier),
                color: palette.color(row.tier),
            })
            .collect();

        ChartSpec {
            title: settings.chart_title().to_string(),
            x_field: headers[5],
            y_field: headers[1],
            color_field: headers[6],
            x_max: Priority::MAX,
            palette,
            bars,
        }
    }

    /// Legend entries `(label, color)` for the tiers present in the chart.
    pub fn legend(&self) -> Vec<(&'static str, NamedColor)> {
        Tier::ALL
            .into_iter()
            .filter_map(|tier| {
                self.bars
                    .iter()
                    .find(|bar| bar.tier == tier)
                    .map(|bar| (bar.tier_label, bar.color))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_catalog;
    use crate::ranking::rank;
    use crate::settings::Locale;

    #[test]
    fn test_one_bar_per_row_in_rank_order() {
        let rows = rank(&seed_catalog());
        let chart = ChartSpec::from_rows(&rows, &GutSettings::default());

        assert_eq!(chart.bars.len(), rows.len());
        for (bar, row) in chart.bars.iter().zip(&rows) {
            assert_eq!(bar.id, row.id);
            assert_eq!(bar.priority, row.priority);
        }
    }

    #[test]
    fn test_colors_follow_tier() {
        let rows = rank(&seed_catalog());
        let chart = ChartSpec::from_rows(&rows, &GutSettings::default());

        for bar in &chart.bars {
            let expected = match bar.tier {
                Tier::High => "red",
                Tier::Medium => "orange",
                Tier::Low => "green",
            };
            assert_eq!(bar.color.name, expected);
        }
    }

    #[test]
    fn test_axis_fields_follow_locale() {
        let rows = rank(&seed_catalog());

        let en = ChartSpec::from_rows(&rows, &GutSettings::default());
        assert_eq!((en.x_field, en.y_field, en.color_field), ("priority", "label", "tier"));

        let pt = ChartSpec::from_rows(&rows, &GutSettings::default().with_locale(Locale::Portuguese));
        assert_eq!((pt.x_field, pt.y_field, pt.color_field), ("Prioridade", "Ação Proposta", "Nível"));
        assert_eq!(pt.title, "Ranking de Prioridades (GUT)");
        assert_eq!(pt.bars[0].tier_label, "Alta");
    }

    #[test]
    fn test_legend_lists_present_tiers() {
        let rows = rank(&seed_catalog());
        let chart = ChartSpec::from_rows(&rows, &GutSettings::default());
        let names: Vec<_> = chart.legend().iter().map(|(label, _)| *label).collect();
        assert_eq!(names, vec!["High", "Medium", "Low"]);
    }

    #[test]
    fn test_rgb_scaling() {
        assert_eq!(NamedColor::RED.rgb_f32(), [1.0, 0.0, 0.0]);
    }
}
