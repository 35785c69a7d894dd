//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI components that implement
//! iced's `Widget` trait or `canvas::Program` trait directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Primitives must not import from `crate::app`
//! - **Generic Message types**: Use type parameters for flexibility
//! - **Self-contained**: Each primitive handles its own layout and rendering
//!
//! # Contents
//!
//! - [`FaceCanvas`] - The rating face drawn with Canvas
//! - [`drag_track::DragTrack`] - Horizontal track with a draggable handle

pub mod drag_track;
pub mod face_canvas;

pub use drag_track::drag_track;
pub use face_canvas::{FaceCanvas, view_face};
