//! Theme system for the rating screen
//! Band backgrounds, black ink for the face and chrome, and light/dark
//! surfaces for the acknowledgment dialog

use iced::color;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use crate::features::rating::BandColor;

// ============================================================================
// Color Palette
// ============================================================================

/// Check if theme is dark mode
pub fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

// Dark mode colors
mod dark {
    use super::*;
    pub const SURFACE: Color = color!(0x1f1f24);
    pub const BORDER: Color = color!(0x333333);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
    pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);
}

// Light mode colors
mod light {
    use super::*;
    pub const SURFACE: Color = color!(0xf5f5fa);
    pub const BORDER: Color = color!(0xdddddd);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
    pub const TEXT_SECONDARY: Color = color!(0x555555);
}

/// Ink for the face, headings and the drag handle
pub const INK: Color = Color::BLACK;

/// Feedback field background
pub const FIELD_BACKGROUND: Color = Color::WHITE;

/// Placeholder text in the feedback field
pub const PLACEHOLDER: Color = color!(0x8e8e93);

// Band backgrounds
pub const BAND_RED: Color = color!(0xff3b30);
pub const BAND_ORANGE: Color = color!(0xff9500);
pub const BAND_YELLOW: Color = color!(0xffcc00);
pub const BAND_GREEN: Color = color!(0x34c759);

/// Background color for a sentiment band
pub fn band_color(band: BandColor) -> Color {
    match band {
        BandColor::Red => BAND_RED,
        BandColor::Orange => BAND_ORANGE,
        BandColor::Yellow => BAND_YELLOW,
        BandColor::Green => BAND_GREEN,
    }
}

/// Linear blend between two colors, `t` in `[0, 1]`
pub fn mix(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let s = 1.0 - t;
    Color::from_rgba(
        from.r * s + to.r * t,
        from.g * s + to.g * t,
        from.b * s + to.b * t,
        from.a * s + to.a * t,
    )
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Hover background color
pub fn hover_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.12)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.08)
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Full-screen band background
pub fn band_background(color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(INK),
        ..Default::default()
    }
}

/// White rounded box around the feedback field
pub fn feedback_field(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(FIELD_BACKGROUND)),
        text_color: Some(INK),
        border: Border {
            radius: 10.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Acknowledgment dialog box, faded by `opacity`
pub fn dialog_box(theme: &Theme, opacity: f32) -> container::Style {
    let surface = surface(theme);
    let border = border_color(theme);
    container::Style {
        background: Some(Background::Color(Color { a: opacity, ..surface })),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: Color { a: opacity, ..border },
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3 * opacity),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind the dialog
pub fn dialog_backdrop(opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            0.0,
            0.0,
            0.0,
            0.5 * opacity,
        ))),
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Black submit button with white text
pub fn submit_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(INK)),
        text_color: Color::WHITE,
        border: Border {
            radius: 5.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(color!(0x2a2a2a))),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(color!(0x444444))),
            ..base
        },
        _ => base,
    }
}

/// Dialog confirm button
pub fn dialog_button(theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered => hover_bg(theme),
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: text_primary(theme),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    }
}
