//! Face composition
//!
//! Lays out two eyes and a mouth for a rating value inside an expression
//! area of fixed height. Each eye is a fixed open lid, a second lid turned
//! half a circle and lifted one frame height so the two enclose the eye,
//! and a round pupil. The mouth drops closer to the eyes as the rating
//! rises.

use serde::{Deserialize, Serialize};

use super::clamp_unit;
use super::curve::{ArcCurve, Point};

/// Height of the area the face is drawn in
pub const EXPRESSION_HEIGHT: f32 = 320.0;
/// Side of the square frame each eye is drawn in
pub const EYE_FRAME: f32 = 100.0;
/// Horizontal gap between the two eye frames
pub const EYE_SPACING: f32 = 20.0;
/// Distance from the top of the area to the eye frames (lid height 50 + 30)
pub const EYES_TOP: f32 = 80.0;
/// Gap between the eyes and the mouth at a rating of 0; shrinks to 0 at 1
pub const MOUTH_DROP: f32 = 80.0;
pub const PUPIL_DIAMETER: f32 = 15.0;
/// Pupil centre sits this far above the eye frame's centre
pub const PUPIL_LIFT: f32 = 20.0;
pub const STROKE_WIDTH: f32 = 3.0;

/// How the moving lid's closure follows the rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LidPolicy {
    /// Closure equals the rating: eyes squeeze shut at 0
    #[default]
    TiedToRating,
    /// Both lids always fully open
    Open,
}

impl LidPolicy {
    pub fn closure(&self, value: f32) -> Option<f32> {
        match self {
            LidPolicy::TiedToRating => Some(clamp_unit(value)),
            LidPolicy::Open => None,
        }
    }
}

/// One eye, in the face's drawing space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eye {
    /// Always fully open; drawn as computed
    pub upper_lid: ArcCurve,
    /// Follows the closure; turned half a circle and lifted one frame
    pub lower_lid: ArcCurve,
    pub pupil_center: Point,
    pub pupil_radius: f32,
}

impl Eye {
    /// Build an eye whose frame's top-left corner is at `origin`
    pub fn new(origin: Point, closure: Option<f32>) -> Self {
        let frame_center = Point::new(EYE_FRAME / 2.0, EYE_FRAME / 2.0);

        let upper_lid = ArcCurve::lid(EYE_FRAME, None).translated(origin.x, origin.y);
        let lower_lid = ArcCurve::lid(EYE_FRAME, closure)
            .rotated_half_turn(frame_center)
            .translated(origin.x, origin.y - EYE_FRAME);

        Self {
            upper_lid,
            lower_lid,
            pupil_center: Point::new(
                origin.x + frame_center.x,
                origin.y + frame_center.y - PUPIL_LIFT,
            ),
            pupil_radius: PUPIL_DIAMETER / 2.0,
        }
    }
}

/// Complete face for one rating value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    pub eyes: [Eye; 2],
    pub mouth: ArcCurve,
}

impl Face {
    /// Compose the face for an area of the given width
    pub fn compose(width: f32, value: f32, lid_policy: LidPolicy) -> Self {
        let value = clamp_unit(value);
        let closure = lid_policy.closure(value);

        let eyes_width = EYE_FRAME * 2.0 + EYE_SPACING;
        let left = (width - eyes_width) / 2.0;
        let right = left + EYE_FRAME + EYE_SPACING;

        let mouth_baseline = EYES_TOP + EYE_FRAME + (1.0 - value) * MOUTH_DROP;

        Self {
            eyes: [
                Eye::new(Point::new(left, EYES_TOP), closure),
                Eye::new(Point::new(right, EYES_TOP), closure),
            ],
            mouth: ArcCurve::mouth(width, value).translated(0.0, mouth_baseline),
        }
    }

    /// Vertical position of the mouth's corners
    #[cfg(test)]
    pub fn mouth_baseline(&self) -> f32 {
        self.mouth.start.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frown_at_zero() {
        let face = Face::compose(400.0, 0.0, LidPolicy::TiedToRating);
        assert_eq!(face.mouth.offset(), -100.0);
        assert_eq!(face.mouth_baseline(), 260.0);
        for eye in &face.eyes {
            // Tied lid closes flat onto the baseline
            assert_eq!(eye.lower_lid.offset(), 0.0);
            assert_eq!(eye.upper_lid.offset(), 55.0);
        }
    }

    #[test]
    fn flat_mouth_at_half() {
        let face = Face::compose(400.0, 0.5, LidPolicy::TiedToRating);
        assert_eq!(face.mouth.offset(), 0.0);
        assert_eq!(face.mouth_baseline(), 220.0);
    }

    #[test]
    fn smile_at_one() {
        let face = Face::compose(400.0, 1.0, LidPolicy::TiedToRating);
        assert_eq!(face.mouth.offset(), 100.0);
        assert_eq!(face.mouth_baseline(), 180.0);
        // Smile stays inside the expression area
        assert!(face.mouth.midpoint().y <= EXPRESSION_HEIGHT);
        for eye in &face.eyes {
            assert_eq!(eye.lower_lid.offset(), -55.0);
        }
    }

    #[test]
    fn open_policy_ignores_rating() {
        let face = Face::compose(400.0, 0.0, LidPolicy::Open);
        for eye in &face.eyes {
            assert_eq!(eye.lower_lid.offset(), -55.0);
        }
    }

    #[test]
    fn eyes_are_centered_and_spaced() {
        let face = Face::compose(400.0, 0.7, LidPolicy::TiedToRating);
        let [left, right] = face.eyes;
        assert_eq!(left.upper_lid.start, Point::new(90.0, EYES_TOP));
        assert_eq!(left.upper_lid.end(), Point::new(190.0, EYES_TOP));
        assert_eq!(right.upper_lid.start, Point::new(210.0, EYES_TOP));
        assert_eq!(left.pupil_center, Point::new(140.0, EYES_TOP + 30.0));
        assert_eq!(right.pupil_center, Point::new(260.0, EYES_TOP + 30.0));
        assert_eq!(left.pupil_radius, 7.5);
    }

    #[test]
    fn both_lids_share_the_baseline() {
        let face = Face::compose(400.0, 0.3, LidPolicy::TiedToRating);
        for eye in &face.eyes {
            assert_eq!(eye.lower_lid.start.y, EYES_TOP);
            assert_eq!(eye.lower_lid.end().y, EYES_TOP);
            // Lower lid is traced from the opposite side
            assert_eq!(eye.lower_lid.start.x, eye.upper_lid.end().x);
            assert_eq!(eye.lower_lid.end().x, eye.upper_lid.start.x);
        }
    }

    #[test]
    fn out_of_range_value_is_clamped() {
        assert_eq!(
            Face::compose(400.0, -0.5, LidPolicy::TiedToRating),
            Face::compose(400.0, 0.0, LidPolicy::TiedToRating)
        );
        assert_eq!(
            Face::compose(400.0, 1.5, LidPolicy::TiedToRating),
            Face::compose(400.0, 1.0, LidPolicy::TiedToRating)
        );
    }

    mod property_mouth_rises {
        use super::*;

        #[test]
        fn mouth_moves_up_and_curls_as_rating_rises() {
            let mut last_baseline = f32::INFINITY;
            let mut last_offset = f32::NEG_INFINITY;
            for i in 0..=50 {
                let face = Face::compose(360.0, i as f32 / 50.0, LidPolicy::TiedToRating);
                assert!(face.mouth_baseline() < last_baseline || i == 0);
                assert!(face.mouth.offset() > last_offset);
                last_baseline = face.mouth_baseline();
                last_offset = face.mouth.offset();
            }
        }
    }
}
