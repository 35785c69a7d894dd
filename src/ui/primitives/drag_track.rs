//! Drag track primitive
//!
//! A thin rail with a rounded handle that the user drags horizontally.
//! The track only reports pointer positions in its own coordinate space
//! together with its rendered width; turning them into a rating is left to
//! the caller.

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::event::Event;
use iced::mouse;
use iced::{Background, Border, Color, Element, Length, Rectangle, Size, Theme};

use crate::features::rating::TrackGeometry;

/// Handle size
const HANDLE_WIDTH: f32 = 50.0;
const HANDLE_HEIGHT: f32 = 40.0;
const HANDLE_RADIUS: f32 = 10.0;
const RAIL_HEIGHT: f32 = 2.0;

/// A horizontal drag track
pub struct DragTrack<'a, Message> {
    value: f32,
    on_drag: Box<dyn Fn(f32, f32) -> Message + 'a>,
    width: Length,
    rail_color: Color,
    handle_color: Color,
    grip_color: Color,
}

impl<'a, Message> DragTrack<'a, Message> {
    /// Creates a new drag track
    ///
    /// `on_drag` receives the pointer's x position relative to the track's
    /// left edge and the track's width.
    pub fn new<F>(value: f32, on_drag: F) -> Self
    where
        F: Fn(f32, f32) -> Message + 'a,
    {
        Self {
            value,
            on_drag: Box::new(on_drag),
            width: Length::Fill,
            rail_color: crate::ui::theme::INK,
            handle_color: crate::ui::theme::INK,
            grip_color: Color::WHITE,
        }
    }

    /// Sets the width
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    fn publish(&self, cursor: mouse::Cursor, bounds: Rectangle, shell: &mut Shell<'_, Message>) {
        if let Some(position) = cursor.position() {
            shell.publish((self.on_drag)(position.x - bounds.x, bounds.width));
        }
    }
}

/// State for the drag track
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    is_dragging: bool,
}

impl<'a, Message, Renderer> Widget<Message, Theme, Renderer> for DragTrack<'a, Message>
where
    Renderer: renderer::Renderer,
    Message: Clone,
{
    fn tag(&self) -> widget::tree::Tag {
        widget::tree::Tag::of::<State>()
    }

    fn state(&self) -> widget::tree::State {
        widget::tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size::new(self.width, Length::Fixed(HANDLE_HEIGHT))
    }

    fn layout(
        &mut self,
        _tree: &mut widget::Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let height = Length::Fixed(HANDLE_HEIGHT);
        let limits = limits.width(self.width).height(height);
        let size = limits.resolve(self.width, height, Size::ZERO);
        layout::Node::new(size)
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if cursor.is_over(bounds) {
                    state.is_dragging = true;
                    self.publish(cursor, bounds, shell);
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if state.is_dragging {
                    state.is_dragging = false;
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if state.is_dragging {
                    self.publish(cursor, bounds, shell);
                    shell.capture_event();
                }
            }
            _ => {}
        }
    }

    fn draw(
        &self,
        _tree: &widget::Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();

        // Rail through the vertical centre
        let rail_bounds = Rectangle {
            x: bounds.x,
            y: bounds.y + (bounds.height - RAIL_HEIGHT) / 2.0,
            width: bounds.width,
            height: RAIL_HEIGHT,
        };
        renderer.fill_quad(
            renderer::Quad {
                bounds: rail_bounds,
                ..Default::default()
            },
            Background::Color(self.rail_color),
        );

        // Handle travels over the same span the drag mapping uses
        let offset = TrackGeometry::new(bounds.width).handle_offset(self.value);
        let handle_bounds = Rectangle {
            x: bounds.x + offset,
            y: bounds.y + (bounds.height - HANDLE_HEIGHT) / 2.0,
            width: HANDLE_WIDTH,
            height: HANDLE_HEIGHT,
        };
        renderer.fill_quad(
            renderer::Quad {
                bounds: handle_bounds,
                border: Border::default().rounded(HANDLE_RADIUS),
                ..Default::default()
            },
            Background::Color(self.handle_color),
        );

        // Grip line pointing along the track
        let grip_bounds = Rectangle {
            x: handle_bounds.x + HANDLE_WIDTH * 0.3,
            y: handle_bounds.center_y() - 1.0,
            width: HANDLE_WIDTH * 0.4,
            height: 2.0,
        };
        renderer.fill_quad(
            renderer::Quad {
                bounds: grip_bounds,
                border: Border::default().rounded(1.0),
                ..Default::default()
            },
            Background::Color(self.grip_color),
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();
        let bounds = layout.bounds();

        if state.is_dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message> From<DragTrack<'a, Message>> for Element<'a, Message, Theme>
where
    Message: Clone + 'a,
{
    fn from(track: DragTrack<'a, Message>) -> Self {
        Element::new(track)
    }
}

/// Creates a new drag track
pub fn drag_track<'a, Message>(
    value: f32,
    on_drag: impl Fn(f32, f32) -> Message + 'a,
) -> DragTrack<'a, Message> {
    DragTrack::new(value, on_drag)
}
