//! Rating slider widget
//!
//! The plain slider bound to the rating. It clamps natively and reports
//! values straight in `[0, 1]`, without going through the drag track
//! mapping.

use iced::widget::slider;
use iced::{Color, Element, Length};

use crate::ui::theme;

/// Build the rating slider
///
/// # Arguments
/// * `value` - Current rating (0.0 to 1.0)
/// * `on_change` - Message for a new rating
pub fn view<'a, Message: Clone + 'a>(
    value: f32,
    on_change: impl Fn(f32) -> Message + 'a,
) -> Element<'a, Message> {
    slider(0.0..=1.0, value.clamp(0.0, 1.0), on_change)
        .width(Length::Fill)
        .height(16)
        .step(0.001)
        .shift_step(0.05)
        .style(|_iced_theme, status| {
            let handle_radius = match status {
                slider::Status::Hovered | slider::Status::Dragged => 8.0,
                _ => 6.0,
            };
            slider::Style {
                rail: slider::Rail {
                    backgrounds: (
                        iced::Background::Color(theme::INK),
                        iced::Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.25)),
                    ),
                    width: 4.0,
                    border: iced::Border {
                        radius: 2.0.into(),
                        width: 0.0,
                        color: Color::TRANSPARENT,
                    },
                },
                handle: slider::Handle {
                    shape: slider::HandleShape::Circle {
                        radius: handle_radius,
                    },
                    background: iced::Background::Color(theme::INK),
                    border_width: 0.0,
                    border_color: Color::TRANSPARENT,
                },
            }
        })
        .into()
}
