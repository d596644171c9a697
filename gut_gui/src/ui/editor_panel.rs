//! Editor Panel (Left Side)
//!
//! One block per action in catalog order: label, then a 1-5 slider for
//! each criterion. Slider messages carry the action id, never a row index.

use iced::widget::{button, column, container, row, rule, scrollable, slider, text, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use gut_core::{Action, Criterion, Score};

use crate::{App, Message};

/// Render the score editor panel
pub fn view_editor_panel(app: &App) -> Element<'_, Message> {
    let mut panel: Column<'_, Message> = column![text("Scores").size(14)].spacing(6);

    for action in app.sheet.actions() {
        let modified = app.sheet.is_action_modified(action.id());
        panel = panel.push(view_action(action, modified));
        panel = panel.push(rule::horizontal(1));
    }

    container(scrollable(panel.padding(8)))
        .width(Length::FillPortion(45))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_action(action: &Action, modified: bool) -> Element<'_, Message> {
    let id = action.id();
    let marker = if modified { " *" } else { "" };

    let header = row![
        text(format!("{}. {}{}", id, action.label(), marker)).size(11).width(Length::Fill),
        text(format!("= {}", action.priority())).size(11),
        button(text("Reset").size(10))
            .on_press_maybe(modified.then_some(Message::ResetAction(id)))
            .padding(Padding::from([2, 6]))
            .style(button::text),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    let mut sliders: Column<'_, Message> = column![].spacing(2);
    for criterion in Criterion::ALL {
        let score = action.scores.get(criterion);
        sliders = sliders.push(
            row![
                text(criterion.code()).size(10).width(Length::Fixed(14.0)),
                slider(Score::MIN..=Score::MAX, score.value(), move |v| {
                    Message::ScoreChanged(id, criterion, v)
                })
                .step(1u8),
                Space::new().width(6),
                text(score.to_string()).size(10).width(Length::Fixed(10.0)),
            ]
            .align_y(Alignment::Center),
        );
    }

    column![header, sliders].spacing(4).into()
}
