//! Rating widget state machine
//!
//! Owns the rating value, the feedback text and the feedback focus flag.
//! Every input is turned into a [`RatingEvent`] and applied synchronously;
//! the host re-renders from [`RatingWidget::state`] after each update.
//! Submitting hands the current value and text to the host callback and
//! leaves the state as it was.

use super::band::{BandTable, SentimentBand};
use super::clamp_unit;
use super::expression::LidPolicy;
use super::gesture::{GestureMapper, TrackGeometry, TrackPolicy};

/// Construction parameters
#[derive(Debug, Clone, PartialEq)]
pub struct RatingConfig {
    /// Heading shown above the face
    pub title_text: String,
    /// When false the feedback field is never offered and text stays empty
    pub enable_written_feedback: bool,
    /// Starting rating, clamped to `[0, 1]`
    pub initial_value: f32,
    pub band_table: BandTable,
    pub lid_policy: LidPolicy,
    pub track_policy: TrackPolicy,
}

impl RatingConfig {
    pub fn new(title_text: impl Into<String>) -> Self {
        Self {
            title_text: title_text.into(),
            enable_written_feedback: true,
            initial_value: 0.0,
            band_table: BandTable::default(),
            lid_policy: LidPolicy::default(),
            track_policy: TrackPolicy::default(),
        }
    }

    pub fn written_feedback(mut self, enabled: bool) -> Self {
        self.enable_written_feedback = enabled;
        self
    }

    pub fn initial_value(mut self, value: f32) -> Self {
        self.initial_value = value;
        self
    }

    pub fn band_table(mut self, table: BandTable) -> Self {
        self.band_table = table;
        self
    }

    pub fn lid_policy(mut self, policy: LidPolicy) -> Self {
        self.lid_policy = policy;
        self
    }

    pub fn track_policy(mut self, policy: TrackPolicy) -> Self {
        self.track_policy = policy;
        self
    }
}

/// The mutable (value, text, focus) triple
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RatingState {
    value: f32,
    text: String,
    focused: bool,
}

impl RatingState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

/// Inputs the widget reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum RatingEvent {
    /// Slider moved, or any direct value change
    SetValue(f32),
    /// Pointer dragged along the track, in the track's local space
    TrackDragged { position: f32, track_width: f32 },
    /// Feedback text replaced
    EditText(String),
    FocusText,
    BlurText,
    Submit,
}

/// Satisfaction rating widget
pub struct RatingWidget<'a, Message> {
    config: RatingConfig,
    state: RatingState,
    gesture: GestureMapper,
    on_submit: Box<dyn Fn(f32, String) -> Message + 'a>,
}

impl<'a, Message> RatingWidget<'a, Message> {
    /// Create a widget; `on_submit` turns a submission into a host message
    pub fn new<F>(config: RatingConfig, on_submit: F) -> Self
    where
        F: Fn(f32, String) -> Message + 'a,
    {
        let state = RatingState {
            value: clamp_unit(config.initial_value),
            text: String::new(),
            focused: false,
        };

        Self {
            gesture: GestureMapper::new(config.track_policy),
            config,
            state,
            on_submit: Box::new(on_submit),
        }
    }

    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    pub fn state(&self) -> &RatingState {
        &self.state
    }

    pub fn value(&self) -> f32 {
        self.state.value
    }

    pub fn feedback_enabled(&self) -> bool {
        self.config.enable_written_feedback
    }

    /// Band for the current value
    pub fn band(&self) -> SentimentBand {
        self.config.band_table.classify(self.state.value)
    }

    /// Placeholder shows while the field is empty and not being edited
    pub fn placeholder_visible(&self) -> bool {
        self.state.text().is_empty() && !self.state.is_focused()
    }

    /// Apply one event
    ///
    /// Returns the host message produced by the submit callback, which is
    /// invoked exactly once per [`RatingEvent::Submit`] and never otherwise.
    pub fn update(&mut self, event: RatingEvent) -> Option<Message> {
        match event {
            RatingEvent::SetValue(value) => {
                self.set_value(value);
                None
            }
            RatingEvent::TrackDragged {
                position,
                track_width,
            } => {
                match self.gesture.map(position, TrackGeometry::new(track_width)) {
                    Some(value) => self.set_value(value),
                    None => tracing::debug!(
                        "Ignoring drag at {:.1} on a {:.1}px track",
                        position,
                        track_width
                    ),
                }
                None
            }
            RatingEvent::EditText(text) => {
                if self.config.enable_written_feedback {
                    self.state.text = text;
                }
                None
            }
            RatingEvent::FocusText => {
                if self.config.enable_written_feedback {
                    self.state.focused = true;
                }
                None
            }
            RatingEvent::BlurText => {
                self.state.focused = false;
                None
            }
            RatingEvent::Submit => {
                tracing::info!(
                    "Submitting rating {:.3} with {} chars of feedback",
                    self.state.value,
                    self.state.text.chars().count()
                );
                Some((self.on_submit)(self.state.value, self.state.text.clone()))
            }
        }
    }

    /// Touching the rating always takes focus away from the feedback field
    fn set_value(&mut self, value: f32) {
        self.state.focused = false;
        let value = clamp_unit(value);
        if value != self.state.value {
            tracing::debug!("Rating {:.3} -> {:.3}", self.state.value, value);
            self.state.value = value;
        }
    }
}

impl<Message> std::fmt::Debug for RatingWidget<'_, Message> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RatingWidget")
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
