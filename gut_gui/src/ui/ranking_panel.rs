//! Ranking Panel (Right Side)
//!
//! Shows the ranked table followed by the horizontal bar chart. If the last
//! recompute failed, the error replaces both.

use iced::widget::{column, container, row, scrollable, text, Canvas, Column, Space};
use iced::{Element, Length};

use gut_core::Snapshot;

use super::shared::bar_chart::BarChart;
use crate::{App, Message};

/// Column widths for the ranked table: id, label, G, U, T, priority, tier
const COLUMN_WIDTHS: [f32; 7] = [28.0, 0.0, 24.0, 24.0, 24.0, 70.0, 60.0];

/// Render the ranking panel
pub fn view_ranking_panel(app: &App) -> Element<'_, Message> {
    let content: Column<'_, Message> = match (&app.error_message, &app.snapshot) {
        (Some(error), _) => column![
            text("Error").size(14),
            Space::new().height(8),
            text(error).size(12).color([0.8, 0.2, 0.2]),
        ],
        (None, Some(snapshot)) => view_snapshot(app, snapshot),
        (None, None) => column![text("No ranking").size(12)],
    };

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(55))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn cell<'a>(content: String, index: usize) -> iced::widget::Text<'a> {
    let width = match COLUMN_WIDTHS[index] {
        w if w > 0.0 => Length::Fixed(w),
        _ => Length::Fill,
    };
    text(content).size(10).width(width)
}

fn view_snapshot<'a>(app: &'a App, snapshot: &'a Snapshot) -> Column<'a, Message> {
    let locale = app.settings.locale;

    let header = locale
        .column_headers()
        .iter()
        .enumerate()
        .fold(row![].spacing(4), |r, (i, h)| r.push(cell(h.to_string(), i).size(11)));

    let mut table: Column<'_, Message> = column![header].spacing(3);
    for (row_data, bar) in snapshot.rows.iter().zip(&snapshot.chart.bars) {
        table = table.push(
            row![
                cell(row_data.id.to_string(), 0),
                cell(row_data.label.clone(), 1),
                cell(row_data.gravity.to_string(), 2),
                cell(row_data.urgency.to_string(), 3),
                cell(row_data.trend.to_string(), 4),
                cell(row_data.priority.to_string(), 5),
                cell(bar.tier_label.to_string(), 6).color(bar.color.rgb_f32()),
            ]
            .spacing(4),
        );
    }

    let chart_height = BarChart::height_for(snapshot.chart.bars.len());
    let chart: Element<'_, Message> = Canvas::new(BarChart::new(snapshot.chart.clone()))
        .width(Length::Fill)
        .height(Length::Fixed(chart_height))
        .into();

    column![
        text(snapshot.chart.title.clone()).size(14),
        Space::new().height(6),
        table,
        Space::new().height(12),
        chart,
    ]
    .spacing(2)
}
