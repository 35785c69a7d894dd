//! Drag track to rating value
//!
//! The track reserves room for its handle: the handle's travel is the track
//! width minus a fixed reserve, starting a fixed distance in from the
//! leading edge.

use serde::{Deserialize, Serialize};

use super::clamp_unit;

/// Distance from the leading edge where the handle's travel starts
pub const HANDLE_LEADING: f32 = 30.0;
/// Total width the track keeps out of the handle's travel
pub const HANDLE_RESERVED: f32 = 90.0;

/// What to do with drag positions that fall outside the handle's travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrackPolicy {
    /// Pin to the nearest end
    #[default]
    Clamp,
    /// Ignore the position and keep the current value
    Reject,
}

/// Geometry of a rendered drag track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    pub width: f32,
    pub leading: f32,
    pub reserved: f32,
}

impl TrackGeometry {
    /// Track with the standard handle reserve
    ///
    /// The reserve is lopsided: travel starts 30 in from the leading edge
    /// and ends 60 short of the trailing one, leaving room for the handle
    /// drawn at the travel offset. Under [`TrackPolicy::Reject`] a position
    /// past `width - 60` is therefore ignored.
    pub fn new(width: f32) -> Self {
        Self {
            width,
            leading: HANDLE_LEADING,
            reserved: HANDLE_RESERVED,
        }
    }

    /// Track with the same margin on both ends
    #[cfg(test)]
    pub fn symmetric(width: f32, margin: f32) -> Self {
        Self {
            width,
            leading: margin,
            reserved: margin * 2.0,
        }
    }

    /// Length of the handle's travel, never negative
    pub fn travel(&self) -> f32 {
        (self.width - self.reserved).max(0.0)
    }

    /// Horizontal offset of the handle for a rating value
    pub fn handle_offset(&self, value: f32) -> f32 {
        clamp_unit(value) * self.travel()
    }
}

/// Converts pointer positions along a track into rating values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GestureMapper {
    policy: TrackPolicy,
}

impl GestureMapper {
    pub fn new(policy: TrackPolicy) -> Self {
        Self { policy }
    }

    /// Map a position in the track's local space to a rating value
    ///
    /// Returns `None` when the position should not update the rating: the
    /// track has no travel, the position is not finite, or it lies outside
    /// the travel under [`TrackPolicy::Reject`].
    pub fn map(&self, position: f32, track: TrackGeometry) -> Option<f32> {
        let travel = track.travel();
        if travel <= 0.0 || !position.is_finite() {
            return None;
        }

        let raw = (position - track.leading) / travel;
        match self.policy {
            TrackPolicy::Clamp => Some(raw.clamp(0.0, 1.0)),
            TrackPolicy::Reject => (0.0..=1.0).contains(&raw).then_some(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_track_maps_travel() {
        let mapper = GestureMapper::default();
        let track = TrackGeometry::new(390.0);
        assert_eq!(track.travel(), 300.0);
        assert_eq!(mapper.map(30.0, track), Some(0.0));
        assert_eq!(mapper.map(180.0, track), Some(0.5));
        assert_eq!(mapper.map(330.0, track), Some(1.0));
    }

    #[test]
    fn clamp_policy_pins_outside_positions() {
        let mapper = GestureMapper::new(TrackPolicy::Clamp);
        let track = TrackGeometry::new(390.0);
        assert_eq!(mapper.map(-50.0, track), Some(0.0));
        assert_eq!(mapper.map(10.0, track), Some(0.0));
        assert_eq!(mapper.map(389.0, track), Some(1.0));
    }

    #[test]
    fn reject_policy_ignores_outside_positions() {
        let mapper = GestureMapper::new(TrackPolicy::Reject);
        let track = TrackGeometry::new(390.0);
        assert_eq!(mapper.map(10.0, track), None);
        assert_eq!(mapper.map(389.0, track), None);
        assert_eq!(mapper.map(180.0, track), Some(0.5));
    }

    #[test]
    fn standard_track_ends_short_of_the_trailing_edge() {
        let mapper = GestureMapper::new(TrackPolicy::Reject);
        let track = TrackGeometry::new(390.0);
        assert_eq!(mapper.map(390.0 - 60.0, track), Some(1.0));
        assert_eq!(mapper.map(390.0 - 30.0, track), None);

        // Same span drawn by the handle
        assert_eq!(track.handle_offset(1.0) + track.leading, 390.0 - 60.0);
    }

    #[test]
    fn degenerate_tracks_never_update() {
        let mapper = GestureMapper::default();
        assert_eq!(mapper.map(10.0, TrackGeometry::new(90.0)), None);
        assert_eq!(mapper.map(10.0, TrackGeometry::new(40.0)), None);
        assert_eq!(mapper.map(f32::NAN, TrackGeometry::new(400.0)), None);
        assert_eq!(TrackGeometry::new(40.0).travel(), 0.0);
    }

    #[test]
    fn handle_offset_follows_value() {
        let track = TrackGeometry::new(390.0);
        assert_eq!(track.handle_offset(0.0), 0.0);
        assert_eq!(track.handle_offset(0.5), 150.0);
        assert_eq!(track.handle_offset(1.0), 300.0);
        assert_eq!(track.handle_offset(2.0), 300.0);
    }

    mod property_endpoints {
        use super::*;

        #[test]
        fn margins_map_to_the_ends() {
            for policy in [TrackPolicy::Clamp, TrackPolicy::Reject] {
                let mapper = GestureMapper::new(policy);
                for width in [200.0, 320.0, 414.0, 1024.0] {
                    for margin in [0.0, 15.0, 30.0, 45.0] {
                        let track = TrackGeometry::symmetric(width, margin);
                        assert_eq!(mapper.map(margin, track), Some(0.0));
                        assert_eq!(mapper.map(width - margin, track), Some(1.0));
                    }
                }
            }
        }

        #[test]
        fn mapped_values_stay_in_unit_range() {
            let mapper = GestureMapper::new(TrackPolicy::Clamp);
            let track = TrackGeometry::new(400.0);
            for p in -100..=500 {
                let v = mapper.map(p as f32, track).unwrap_or(-1.0);
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }
}
