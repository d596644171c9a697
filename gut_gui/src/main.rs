//! # GUT Matrix GUI Application
//!
//! Desktop front end for the GUT priority matrix, built with Iced.
//!
//! Left: one row of G/U/T sliders per action, in catalog order.
//! Right: the ranked table and the horizontal bar chart.
//!
//! Every slider message carries the action id and criterion it belongs to,
//! so edits never depend on where an action currently sits in the ranking.
//! Each message triggers one full recompute.

mod ui;

use std::path::PathBuf;

use chrono::{DateTime, Local};
use iced::widget::{column, row, rule};
use iced::{Element, Length, Task, Theme};

use gut_core::export::{write_export, EXPORT_MIME};
use gut_core::settings::load_settings;
use gut_core::{ActionId, Criterion, GutSettings, Locale, Snapshot, Worksheet};

#[derive(Debug, Clone)]
pub enum Message {
    ScoreChanged(ActionId, Criterion, u8),
    ResetAction(ActionId),
    ResetAll,
    ExportCsv,
    ToggleLocale,
    ToggleDarkMode,
}

pub struct App {
    pub sheet: Worksheet,
    pub settings: GutSettings,
    pub snapshot: Option<Snapshot>,
    pub error_message: Option<String>,
    pub status: String,
    pub dark_mode: bool,
    pub last_export: Option<(PathBuf, DateTime<Local>)>,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let (settings, status) = match std::env::var_os("GUT_CONFIG").map(PathBuf::from) {
            Some(path) => match load_settings(&path) {
                Ok(settings) => (settings, format!("Settings loaded from {}", path.display())),
                Err(e) => {
                    tracing::warn!(error = %e, "falling back to default settings");
                    (GutSettings::default(), format!("Using default settings: {}", e))
                }
            },
            None => (GutSettings::default(), "Ready".to_string()),
        };

        (Self::with_settings(settings, status), Task::none())
    }

    fn with_settings(settings: GutSettings, status: String) -> Self {
        let mut app = App {
            sheet: Worksheet::from_seed(),
            settings,
            snapshot: None,
            error_message: None,
            status,
            dark_mode: false,
            last_export: None,
        };
        app.recompute();
        app
    }

    fn title(&self) -> String {
        let modified = if self.sheet.is_modified() { " *" } else { "" };
        format!("{}{}", self.settings.chart_title(), modified)
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Full recompute pass over the current worksheet.
    fn recompute(&mut self) {
        match self.sheet.snapshot(&self.settings) {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                self.error_message = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "recompute failed");
                self.snapshot = None;
                self.error_message = Some(e.to_string());
            }
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ScoreChanged(id, criterion, value) => {
                match self.sheet.set_score(id, criterion, value.into()) {
                    Ok(score) => self.status = format!("#{} {} = {}", id, criterion.code(), score),
                    Err(e) => self.status = e.to_string(),
                }
                self.recompute();
            }
            Message::ResetAction(id) => {
                match self.sheet.reset_action(id) {
                    Ok(()) => self.status = format!("#{} reset", id),
                    Err(e) => self.status = e.to_string(),
                }
                self.recompute();
            }
            Message::ResetAll => {
                self.sheet.reset();
                self.status = "All scores reset".to_string();
                self.recompute();
            }
            Message::ToggleLocale => {
                self.settings.locale = match self.settings.locale {
                    Locale::English => Locale::Portuguese,
                    Locale::Portuguese => Locale::English,
                };
                self.status = format!("Locale: {}", self.settings.locale);
                self.recompute();
            }
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
            }
            Message::ExportCsv => self.export_csv(),
        }
        Task::none()
    }

    fn export_csv(&mut self) {
        let Some(snapshot) = &self.snapshot else {
            self.status = "Nothing to export".to_string();
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .set_title("Export ranking")
            .set_file_name(&self.settings.export_file_name)
            .add_filter(format!("CSV ({})", EXPORT_MIME), &["csv"])
            .save_file()
        else {
            self.status = "Export cancelled".to_string();
            return;
        };

        match write_export(&path, &snapshot.export) {
            Ok(()) => {
                self.status = format!("Exported {} actions", snapshot.rows.len());
                self.last_export = Some((path, Local::now()));
            }
            Err(e) => {
                tracing::error!(error = %e, "export failed");
                self.status = format!("Export failed: {}", e);
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let header = ui::toolbar::view_header(self.settings.chart_title());
        let toolbar = ui::toolbar::view_toolbar(self.settings.locale, self.dark_mode, self.snapshot.is_some());

        let panels = row![
            ui::editor_panel::view_editor_panel(self),
            ui::ranking_panel::view_ranking_panel(self),
        ]
        .spacing(10)
        .height(Length::Fill);

        let status_bar = ui::status_bar::view_status_bar(
            self.sheet.is_modified(),
            self.last_export.as_ref(),
            &self.status,
        );

        column![
            header,
            toolbar,
            rule::horizontal(1),
            panels,
            rule::horizontal(1),
            status_bar,
        ]
        .spacing(6)
        .padding(10)
        .into()
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size((1400.0, 900.0))
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gut_core::ranking::position_of;
    use gut_core::Tier;

    fn app() -> App {
        App::with_settings(GutSettings::default(), String::new())
    }

    fn rows(app: &App) -> &[gut_core::RankedAction] {
        &app.snapshot.as_ref().unwrap().rows
    }

    #[test]
    fn test_initial_snapshot() {
        let app = app();
        assert_eq!(rows(&app).len(), 12);
        assert!(!app.sheet.is_modified());
        assert_eq!(app.title(), "GUT Priority Ranking");
    }

    #[test]
    fn test_slider_edit_recomputes() {
        let mut app = app();
        for criterion in Criterion::ALL {
            let _ = app.update(Message::ScoreChanged(ActionId(12), criterion, 5));
        }

        let rows = rows(&app);
        assert_eq!(rows[0].id, ActionId(12));
        assert_eq!(rows[0].tier, Tier::High);
        assert!(position_of(rows, ActionId(12)) < position_of(rows, ActionId(6)));
        assert!(app.title().ends_with(" *"));
    }

    #[test]
    fn test_edit_after_reorder_targets_same_action() {
        let mut app = app();
        let _ = app.update(Message::ScoreChanged(ActionId(12), Criterion::Gravity, 5));
        let _ = app.update(Message::ScoreChanged(ActionId(12), Criterion::Urgency, 5));
        let _ = app.update(Message::ScoreChanged(ActionId(12), Criterion::Trend, 5));
        // Action 1 now ranks second; editing 12 again must not touch it
        let _ = app.update(Message::ScoreChanged(ActionId(12), Criterion::Trend, 1));

        assert_eq!(app.sheet.action(ActionId(12)).unwrap().priority().value(), 25);
        assert!(!app.sheet.is_action_modified(ActionId(1)));
    }

    #[test]
    fn test_reset_messages() {
        let mut app = app();
        let _ = app.update(Message::ScoreChanged(ActionId(4), Criterion::Gravity, 1));
        let _ = app.update(Message::ResetAction(ActionId(4)));
        assert!(!app.sheet.is_modified());

        let _ = app.update(Message::ScoreChanged(ActionId(5), Criterion::Trend, 1));
        let _ = app.update(Message::ResetAll);
        assert!(!app.sheet.is_modified());
        assert_eq!(app.status, "All scores reset");
    }

    #[test]
    fn test_toggle_locale_relabels_chart() {
        let mut app = app();
        let _ = app.update(Message::ToggleLocale);
        let snapshot = app.snapshot.as_ref().unwrap();
        assert_eq!(snapshot.chart.title, "Ranking de Prioridades (GUT)");
        assert!(snapshot.export.starts_with("Nº".as_bytes()));
    }
}
