use serde::Serialize;

use gut_core::ranking::tier_counts;
use gut_core::{ChartSpec, Locale, RankedAction};

/// Width of the longest bar in the text chart
const BAR_WIDTH: usize = 40;

/// Longest label printed before truncation
const LABEL_WIDTH: usize = 48;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Truncate to `max` characters, marking the cut with `…`.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

/// Render an aligned text table. Widths are counted in characters so
/// accented labels line up.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let format_row = |cells: Vec<String>| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| pad(cell, widths.get(i).copied().unwrap_or(0)))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&format_row(headers.iter().map(|h| h.to_string()).collect()));
    out.push('\n');
    out.push_str(&widths.iter().map(|&w| "-".repeat(w)).collect::<Vec<_>>().join("  "));
    out.push('\n');
    for row in rows {
        out.push_str(&format_row(row.clone()));
        out.push('\n');
    }
    out
}

/// The ranked table in the locale's column headers.
pub fn render_ranking(rows: &[RankedAction], locale: Locale) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                row.id.to_string(),
                truncate(&row.label, LABEL_WIDTH),
                row.gravity.to_string(),
                row.urgency.to_string(),
                row.trend.to_string(),
                row.priority.to_string(),
                locale.tier_label(row.tier).to_string(),
            ]
        })
        .collect();
    render_table(&locale.column_headers(), &cells)
}

/// One-line count of rows per tier, e.g. `High: 9  Medium: 1  Low: 2`.
pub fn render_tier_summary(rows: &[RankedAction], locale: Locale) -> String {
    tier_counts(rows)
        .iter()
        .map(|(tier, count)| format!("{}: {}", locale.tier_label(*tier), count))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Horizontal text bar chart, one line per bar.
pub fn render_chart(chart: &ChartSpec) -> String {
    let labels: Vec<String> = chart
        .bars
        .iter()
        .map(|bar| format!("{:>3} {}", bar.id.to_string(), truncate(&bar.label, LABEL_WIDTH)))
        .collect();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut out = format!("{}\n\n", chart.title);
    for (bar, label) in chart.bars.iter().zip(&labels) {
        let len = (bar.priority.value() as usize * BAR_WIDTH).div_ceil(chart.x_max as usize);
        out.push_str(&format!(
            "{} │{} {} [{}]\n",
            pad(label, label_width),
            "█".repeat(len),
            bar.priority,
            bar.tier_label
        ));
    }

    let legend = chart
        .legend()
        .iter()
        .map(|(label, color)| format!("{} = {}", label, color.name))
        .collect::<Vec<_>>()
        .join(", ");
    out.push_str(&format!("\n{}: {}\n", chart.color_field, legend));
    out
}
