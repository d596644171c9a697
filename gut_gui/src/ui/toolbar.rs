//! Toolbar component
//!
//! Contains Export CSV, Reset All and the locale and theme toggles.

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use gut_core::Locale;

use crate::Message;

/// Render the application header with the chart title
pub fn view_header(chart_title: &str) -> Element<'_, Message> {
    row![
        text("GUT Matrix").size(28),
        Space::new().width(Length::Fill),
        text(chart_title).size(14),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Render the toolbar. Export is disabled while there is no snapshot.
pub fn view_toolbar(locale: Locale, dark_mode: bool, can_export: bool) -> Element<'static, Message> {
    let export_button = button(text("Export CSV").size(11))
        .on_press_maybe(can_export.then_some(Message::ExportCsv))
        .padding(Padding::from([4, 8]))
        .style(button::primary);

    let edit_buttons = row![
        export_button,
        button(text("Reset All").size(11))
            .on_press(Message::ResetAll)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
    .spacing(4);

    let next_locale = match locale {
        Locale::English => Locale::Portuguese,
        Locale::Portuguese => Locale::English,
    };
    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };

    row![
        edit_buttons,
        Space::new().width(Length::Fill),
        button(text(format!("Language: {}", next_locale)).size(11))
            .on_press(Message::ToggleLocale)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
        button(text(theme_label).size(11))
            .on_press(Message::ToggleDarkMode)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
    .spacing(4)
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}
