//! Symmetric cubic arcs
//!
//! Every stroke of the face is the same shape: two cubic Bézier segments
//! running from `(W/2 - R, 0)` through `(W/2, k)` to `(W/2 + R, 0)`, with
//! all tangent handles held at `0.967 * R` from the centre. Only the
//! half-width `R` and the midpoint offset `k` change. The y axis grows
//! downward, so a positive `k` bows the arc down (a smile for the mouth).

use super::clamp_unit;

/// Horizontal distance of the tangent handles from the centre, relative to the half-width
pub const CONTROL_RATIO: f32 = 0.967;

/// Mouth half-width
pub const MOUTH_HALF_WIDTH: f32 = 150.0;
/// Largest mouth offset; the rating sweeps `[-100, 100]`
pub const MOUTH_MAX_OFFSET: f32 = 100.0;

/// Eye lid half-width
pub const LID_HALF_WIDTH: f32 = 50.0;
/// Offset of a fully open lid
pub const LID_MAX_OFFSET: f32 = 55.0;

/// A point in the drawing space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Rotate by 180° around `center`
    pub fn rotate_half_turn(self, center: Point) -> Self {
        Self::new(2.0 * center.x - self.x, 2.0 * center.y - self.y)
    }
}

/// One cubic segment, starting wherever the previous one ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub control_a: Point,
    pub control_b: Point,
    pub to: Point,
}

impl CubicSegment {
    fn map(self, f: impl Fn(Point) -> Point) -> Self {
        Self {
            control_a: f(self.control_a),
            control_b: f(self.control_b),
            to: f(self.to),
        }
    }
}

/// A symmetric two-segment cubic arc
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcCurve {
    pub start: Point,
    pub segments: [CubicSegment; 2],
}

impl ArcCurve {
    /// Build the arc inside a rectangle of the given width
    ///
    /// # Arguments
    /// * `width` - Width of the enclosing rectangle; the arc is centred in it
    /// * `half_width` - Half the distance between the two end points
    /// * `offset` - Vertical displacement of the midpoint from the baseline
    pub fn new(width: f32, half_width: f32, offset: f32) -> Self {
        let center = width / 2.0;
        let handle = half_width * CONTROL_RATIO;

        Self {
            start: Point::new(center - half_width, 0.0),
            segments: [
                CubicSegment {
                    control_a: Point::new(center - handle, 0.0),
                    control_b: Point::new(center - handle, offset),
                    to: Point::new(center, offset),
                },
                CubicSegment {
                    control_a: Point::new(center + handle, offset),
                    control_b: Point::new(center + handle, 0.0),
                    to: Point::new(center + half_width, 0.0),
                },
            ],
        }
    }

    /// Mouth for rating `t`: frown at 0, flat at 0.5, full smile at 1
    pub fn mouth(width: f32, t: f32) -> Self {
        Self::new(width, MOUTH_HALF_WIDTH, mouth_offset(t))
    }

    /// Eye lid for closure `s`: flat at 0, fully open at 1; `None` is fully open
    pub fn lid(width: f32, closure: Option<f32>) -> Self {
        Self::new(width, LID_HALF_WIDTH, lid_offset(closure))
    }

    /// Midpoint displacement from the baseline
    #[cfg(test)]
    pub fn offset(&self) -> f32 {
        self.segments[0].to.y - self.start.y
    }

    #[cfg(test)]
    pub fn midpoint(&self) -> Point {
        self.segments[0].to
    }

    #[cfg(test)]
    pub fn end(&self) -> Point {
        self.segments[1].to
    }

    pub fn translated(self, dx: f32, dy: f32) -> Self {
        self.map(|p| p.translate(dx, dy))
    }

    /// Rotate the whole arc by 180° around `center`
    pub fn rotated_half_turn(self, center: Point) -> Self {
        self.map(|p| p.rotate_half_turn(center))
    }

    fn map(self, f: impl Fn(Point) -> Point + Copy) -> Self {
        Self {
            start: f(self.start),
            segments: [self.segments[0].map(f), self.segments[1].map(f)],
        }
    }
}

/// Mouth offset `k = 200t - 100`, with `t` clamped to `[0, 1]`
pub fn mouth_offset(t: f32) -> f32 {
    2.0 * MOUTH_MAX_OFFSET * clamp_unit(t) - MOUTH_MAX_OFFSET
}

/// Lid offset `k = 55s`, with `s` clamped to `[0, 1]`
pub fn lid_offset(closure: Option<f32>) -> f32 {
    LID_MAX_OFFSET * closure.map(clamp_unit).unwrap_or(1.0)
}
