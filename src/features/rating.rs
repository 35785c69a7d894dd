//! Satisfaction rating core
//!
//! Maps a single rating value in `[0, 1]` onto everything the rating screen
//! shows: the face geometry, the sentiment band and the drag track position.
//!
//! Structure:
//! - curve.rs: symmetric cubic arcs shared by the mouth and the eye lids
//! - band.rs: rating value to sentiment label and colour
//! - gesture.rs: pointer position on the drag track to rating value
//! - expression.rs: two eyes and a mouth composed for a given width
//! - widget.rs: the (value, text, focus) state machine and submit contract
//!
//! Nothing in here depends on the UI toolkit.

pub mod band;
pub mod curve;
pub mod expression;
pub mod gesture;
pub mod widget;

pub use band::{BandColor, BandTable, Sentiment};
pub use curve::{ArcCurve, Point};
pub use expression::{Face, LidPolicy};
pub use gesture::{TrackGeometry, TrackPolicy};
pub use widget::{RatingConfig, RatingEvent, RatingWidget};

/// Clamp a rating-like scalar into `[0, 1]`, mapping NaN to 0
pub fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
