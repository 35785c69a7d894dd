//! Submission acknowledgment dialog component

use iced::mouse::Interaction;
use iced::widget::{Space, button, column, container, mouse_area, opaque, row, text};
use iced::{Alignment, Element, Fill, Font, font};

use crate::app::{Message, Submission};
use crate::i18n::{Key, Locale};
use crate::ui::theme;

/// Build the acknowledgment dialog for the last submission
pub fn view(
    submission: Option<&Submission>,
    animation_progress: f32,
    locale: Locale,
) -> Element<'static, Message> {
    if animation_progress < 0.01 {
        return Space::new().height(0).into();
    }

    let opacity = animation_progress;

    let title = text(locale.get(Key::AckTitle))
        .size(18)
        .font(Font {
            weight: font::Weight::Bold,
            ..Default::default()
        })
        .style(move |iced_theme| text::Style {
            color: Some(faded(theme::text_primary(iced_theme), opacity)),
        });

    let (rating_line, feedback_line) = match submission {
        Some(submission) => (
            format!(
                "{}: {:.0}%",
                locale.get(Key::AckRating),
                submission.rating * 100.0
            ),
            if submission.feedback.trim().is_empty() {
                locale.get(Key::AckNoFeedback).to_string()
            } else {
                format!("{}: {}", locale.get(Key::AckFeedback), submission.feedback)
            },
        ),
        None => (String::new(), String::new()),
    };

    let secondary = move |iced_theme: &iced::Theme| text::Style {
        color: Some(faded(theme::text_secondary(iced_theme), opacity)),
    };
    let details = column![
        text(rating_line).size(14).style(secondary),
        text(feedback_line).size(14).style(secondary),
    ]
    .spacing(6);

    let close_btn = button(text(locale.get(Key::AckClose)).size(14))
        .padding([10, 24])
        .style(theme::dialog_button)
        .on_press(Message::DismissAcknowledgment);

    let dialog_content = column![
        title,
        Space::new().height(12),
        details,
        Space::new().height(20),
        row![Space::new().width(Fill), close_btn].align_y(Alignment::Center),
    ]
    .width(340)
    .padding(24);

    let dialog_box = container(dialog_content)
        .style(move |iced_theme| theme::dialog_box(iced_theme, opacity));

    // Presses inside the box must not reach the backdrop
    let dialog_box = mouse_area(dialog_box).on_press(Message::Noop);

    let backdrop_content = container(dialog_box)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(move |_theme| theme::dialog_backdrop(opacity));

    // Clicking the backdrop dismisses the dialog
    let event_blocker = mouse_area(backdrop_content)
        .interaction(Interaction::Idle)
        .on_press(Message::DismissAcknowledgment);

    opaque(event_blocker).into()
}

fn faded(color: iced::Color, opacity: f32) -> iced::Color {
    iced::Color {
        a: color.a * opacity,
        ..color
    }
}
