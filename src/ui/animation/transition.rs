//! Rating transitions using iced_anim
//!
//! The rating value itself changes instantly; these animations only ease
//! what is drawn toward it. A new target always starts from whatever is
//! currently on screen, so a fresh update supersedes an in-flight one.

use std::time::{Duration, Instant};

use iced::Color;
use iced_anim::Animated;
use iced_anim::transition::Easing;

use crate::ui::theme;

/// Dialog fade duration (200ms for snappy feel)
const FADE_DURATION: Duration = Duration::from_millis(200);

/// Create rating easing with the configured duration
fn rating_easing(duration: Duration) -> Easing {
    Easing::EASE_IN_OUT.with_duration(duration)
}

/// Eased rating value and band background for the rating screen
#[derive(Debug)]
pub struct RatingTransitions {
    duration: Duration,
    /// Displayed rating, chasing `target`
    value: Animated<f32>,
    target: f32,
    /// Background blend from `from_color` (0.0) to `to_color` (1.0)
    blend: Animated<f32>,
    from_color: Color,
    to_color: Color,
}

impl RatingTransitions {
    /// Start at rest on `value` with background `color`
    pub fn new(value: f32, color: Color, duration: Duration) -> Self {
        Self {
            duration,
            value: Animated::transition(value, rating_easing(duration)),
            target: value,
            blend: Animated::transition(1.0, rating_easing(duration)),
            from_color: color,
            to_color: color,
        }
    }

    /// Ease the displayed rating toward `value`
    pub fn retarget_value(&mut self, value: f32) {
        if self.target != value {
            self.target = value;
            self.value.update(value.into());
        }
    }

    /// Fade the background toward `color` if it is not already heading there
    pub fn retarget_color(&mut self, color: Color) {
        if self.to_color == color {
            return;
        }

        self.from_color = self.color();
        self.to_color = color;
        self.blend = Animated::transition(0.0, rating_easing(self.duration));
        self.blend.update(1.0.into());
    }

    /// Rating to draw this frame
    pub fn value(&self) -> f32 {
        *self.value.value()
    }

    /// Rating the display is heading toward
    pub fn target_value(&self) -> f32 {
        self.target
    }

    /// Background to draw this frame
    pub fn color(&self) -> Color {
        theme::mix(self.from_color, self.to_color, *self.blend.value())
    }

    /// Background the display is heading toward
    pub fn target_color(&self) -> Color {
        self.to_color
    }

    /// Check if any animation is currently in progress
    pub fn is_animating(&self) -> bool {
        self.value.is_animating() || self.blend.is_animating()
    }

    /// Tick the animations forward in time
    /// Must be called on each animation frame to update values
    pub fn tick(&mut self, now: Instant) {
        self.value.tick(now);
        self.blend.tick(now);
    }
}

/// Single fade animation state (for dialogs)
#[derive(Debug)]
pub struct FadeAnimation {
    animation: Animated<f32>,
}

/// Create fade easing with custom duration
fn fade_easing() -> Easing {
    Easing::EASE.with_duration(FADE_DURATION)
}

impl Default for FadeAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl FadeAnimation {
    /// Create a new fade animation at rest (hidden)
    pub fn new() -> Self {
        Self {
            animation: Animated::transition(0.0, fade_easing()),
        }
    }

    /// Fade in
    pub fn start(&mut self) {
        self.animation.update(1.0.into());
    }

    /// Fade out
    pub fn stop(&mut self) {
        self.animation.update(0.0.into());
    }

    /// Get progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        *self.animation.value()
    }

    /// Check if animation is in progress
    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Tick the animation forward in time
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transitions() -> RatingTransitions {
        RatingTransitions::new(0.0, theme::BAND_RED, Duration::from_millis(350))
    }

    #[test]
    fn starts_at_rest() {
        let t = transitions();
        assert_eq!(t.value(), 0.0);
        assert_eq!(t.target_value(), 0.0);
        assert_eq!(t.color(), theme::BAND_RED);
        assert_eq!(t.target_color(), theme::BAND_RED);
        assert!(!t.is_animating());
    }

    #[test]
    fn retarget_value_sets_new_target() {
        let mut t = transitions();
        t.retarget_value(0.8);
        assert_eq!(t.target_value(), 0.8);
        // Display never jumps past the target
        assert!(t.value() >= 0.0 && t.value() <= 0.8);
    }

    #[test]
    fn newer_target_supersedes_older() {
        let mut t = transitions();
        t.retarget_value(0.8);
        t.retarget_value(0.3);
        assert_eq!(t.target_value(), 0.3);
    }

    #[test]
    fn color_change_blends_from_current() {
        let mut t = transitions();
        t.retarget_color(theme::BAND_GREEN);
        assert_eq!(t.target_color(), theme::BAND_GREEN);

        // The drawn color stays between the old and the new band
        let (from, to, now) = (theme::BAND_RED, theme::BAND_GREEN, t.color());
        for (a, b, c) in [(from.r, to.r, now.r), (from.g, to.g, now.g), (from.b, to.b, now.b)] {
            assert!(c >= a.min(b) - 1e-6 && c <= a.max(b) + 1e-6);
        }
    }

    #[test]
    fn same_color_does_not_restart() {
        let mut t = transitions();
        t.retarget_color(theme::BAND_RED);
        assert!(!t.is_animating());
        assert_eq!(t.color(), theme::BAND_RED);
    }

    #[test]
    fn fade_progress_range() {
        let mut fade = FadeAnimation::new();
        assert_eq!(fade.progress(), 0.0);
        fade.start();
        assert!(fade.is_animating() || fade.progress() > 0.0);
        assert!((0.0..=1.0).contains(&fade.progress()));
    }
}
