//! Animation system for RatingFace
//!
//! Eased transitions built on `iced_anim`. State changes land instantly;
//! only what is drawn is spread over time.

mod transition;

pub use transition::{FadeAnimation, RatingTransitions};
