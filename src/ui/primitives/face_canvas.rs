//! Face canvas primitive
//!
//! Strokes the two eyes and the mouth for a rating value using iced's
//! Canvas. The face is recomposed from the rating on every draw, so the
//! drawing always matches the value it was built with.
//!
//! # Design
//!
//! This is a primitive component that implements `canvas::Program` trait.
//! It uses generic Message types and does not depend on application-specific types.

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke};
use iced::{Color, Element, Length, Renderer, Theme, mouse};

use crate::features::rating::expression::{EXPRESSION_HEIGHT, STROKE_WIDTH};
use crate::features::rating::{ArcCurve, Face, LidPolicy, Point};

/// Face canvas configuration
#[derive(Debug, Clone, Copy)]
pub struct FaceCanvas {
    /// Rating to draw (0.0 - 1.0)
    pub value: f32,
    pub lid_policy: LidPolicy,
    pub stroke_width: f32,
    pub ink: Color,
}

impl FaceCanvas {
    pub fn new(value: f32, lid_policy: LidPolicy) -> Self {
        Self {
            value,
            lid_policy,
            stroke_width: STROKE_WIDTH,
            ink: crate::ui::theme::INK,
        }
    }
}

fn to_iced(point: Point) -> iced::Point {
    iced::Point::new(point.x, point.y)
}

/// Trace an arc as a canvas path
fn arc_path(arc: &ArcCurve) -> Path {
    Path::new(|builder| {
        builder.move_to(to_iced(arc.start));
        for segment in &arc.segments {
            builder.bezier_curve_to(
                to_iced(segment.control_a),
                to_iced(segment.control_b),
                to_iced(segment.to),
            );
        }
    })
}

impl<Message> Program<Message> for FaceCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let face = Face::compose(bounds.width, self.value, self.lid_policy);

        let stroke = || {
            Stroke::default()
                .with_width(self.stroke_width)
                .with_color(self.ink)
        };

        for eye in &face.eyes {
            frame.stroke(&arc_path(&eye.upper_lid), stroke());
            frame.stroke(&arc_path(&eye.lower_lid), stroke());
            frame.fill(
                &Path::circle(to_iced(eye.pupil_center), eye.pupil_radius),
                self.ink,
            );
        }
        frame.stroke(&arc_path(&face.mouth), stroke());

        vec![frame.into_geometry()]
    }
}

/// Create a face canvas element spanning the available width
pub fn view_face<'a, Message: 'a>(face: FaceCanvas) -> Element<'a, Message> {
    Canvas::new(face)
        .width(Length::Fill)
        .height(EXPRESSION_HEIGHT)
        .into()
}
