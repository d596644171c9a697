//! Status Bar (Bottom)
//!
//! Displays:
//! - Modified indicator (*)
//! - Last export path and time
//! - Status messages

use std::path::PathBuf;

use chrono::{DateTime, Local};
use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(
    is_modified: bool,
    last_export: Option<&'a (PathBuf, DateTime<Local>)>,
    status: &'a str,
) -> Element<'a, Message> {
    let sheet_info = if is_modified { "Edited scores *" } else { "Seed scores" };

    let export_info = match last_export {
        Some((path, at)) => format!("  Last export: {} ({})", path.display(), at.format("%H:%M:%S")),
        None => String::new(),
    };

    row![
        text(sheet_info).size(10),
        text(export_info).size(10).color([0.3, 0.5, 0.3]),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
