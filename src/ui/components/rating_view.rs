//! Rating screen component
//!
//! Title, animated face, sentiment label, drag track, slider, the optional
//! feedback field and the submit button, stacked over the band background.

use iced::widget::{Space, button, column, container, mouse_area, scrollable, text, text_editor};
use iced::{Alignment, Element, Fill, Font, font};

use crate::app::Message;
use crate::features::rating::RatingWidget;
use crate::i18n::{Key, Locale};
use crate::ui::animation::RatingTransitions;
use crate::ui::primitives::{FaceCanvas, drag_track, view_face};
use crate::ui::{theme, widgets};

/// Horizontal inset of the interactive controls
const CONTROL_PADDING: u16 = 20;
/// Height of the feedback field
const FEEDBACK_HEIGHT: f32 = 100.0;

/// Build the rating screen
pub fn view<'a>(
    rating: &'a RatingWidget<'static, Message>,
    feedback: &'a text_editor::Content,
    transitions: &RatingTransitions,
    locale: Locale,
) -> Element<'a, Message> {
    let config = rating.config();
    let value = rating.value();
    // Face and handle ease toward the rating, the slider tracks it exactly
    let displayed = transitions.value();

    let title = text(config.title_text.as_str())
        .size(34)
        .color(theme::INK)
        .font(Font {
            weight: font::Weight::Bold,
            ..Default::default()
        })
        .width(Fill)
        .center();

    let face = view_face(FaceCanvas::new(displayed, config.lid_policy));

    let sentiment = text(locale.sentiment(rating.band().sentiment))
        .size(28)
        .color(theme::INK)
        .font(Font {
            weight: font::Weight::Bold,
            ..Default::default()
        })
        .width(Fill)
        .center();

    let track = container(
        drag_track(displayed, |position, track_width| Message::TrackDragged {
            position,
            track_width,
        })
        .width(Fill),
    )
    .padding([0, CONTROL_PADDING]);

    let slider = container(widgets::rating_slider::view(value, Message::SliderChanged))
        .padding([0, CONTROL_PADDING]);

    let mut content = column![
        title,
        face,
        sentiment,
        Space::new().height(10),
        track,
        Space::new().height(16),
        slider,
        Space::new().height(24),
    ]
    .align_x(Alignment::Center);

    if rating.feedback_enabled() {
        content = content
            .push(feedback_field(rating, feedback, locale))
            .push(Space::new().height(24));
    }

    let submit = button(
        text(locale.get(Key::Submit))
            .size(16)
            .width(Fill)
            .height(Fill)
            .center(),
    )
    .width(100)
    .height(40)
    .style(theme::submit_button)
    .on_press(Message::Submit);

    content = content.push(submit).push(Space::new().height(32));

    // Presses that reach the background take focus from the feedback field
    let screen = mouse_area(
        container(scrollable(content.padding([24, 0])))
            .width(Fill)
            .height(Fill)
            .style({
                let color = transitions.color();
                move |_theme| theme::band_background(color)
            }),
    )
    .on_press(Message::BlurFeedback);

    screen.into()
}

/// White multi-line field; the placeholder hides while it has focus
fn feedback_field<'a>(
    rating: &'a RatingWidget<'static, Message>,
    feedback: &'a text_editor::Content,
    locale: Locale,
) -> Element<'a, Message> {
    let mut editor = text_editor(feedback)
        .on_action(Message::FeedbackAction)
        .height(FEEDBACK_HEIGHT)
        .padding(10)
        .size(16)
        .style(|iced_theme, status| {
            let base = text_editor::default(iced_theme, status);
            text_editor::Style {
                background: iced::Background::Color(theme::FIELD_BACKGROUND),
                border: iced::Border {
                    radius: 10.0.into(),
                    width: 0.0,
                    color: iced::Color::TRANSPARENT,
                },
                placeholder: theme::PLACEHOLDER,
                value: theme::INK,
                ..base
            }
        });

    if rating.placeholder_visible() {
        editor = editor.placeholder(locale.get(Key::FeedbackPlaceholder));
    }

    container(container(editor).style(theme::feedback_field))
        .width(Fill)
        .padding([0, CONTROL_PADDING])
        .into()
}
