//! Application messages

use iced::widget::text_editor;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// No-op message for event interception (modal backdrop clicks)
    Noop,

    // ============ Rating ============
    /// Slider moved to a new rating
    SliderChanged(f32),
    /// Pointer dragged along the rating track (local x, track width)
    TrackDragged { position: f32, track_width: f32 },
    /// Feedback editor action (typing, clicking, selecting)
    FeedbackAction(text_editor::Action),
    /// Pressed somewhere outside the feedback editor
    BlurFeedback,
    /// Submit button pressed
    Submit,
    /// The rating widget handed over a submission
    Submitted { rating: f32, feedback: String },

    // ============ Dialog ============
    /// Close the post-submit acknowledgment
    DismissAcknowledgment,

    // ============ Window ============
    /// Window close requested
    RequestClose,
    /// Animation frame
    AnimationTick,
}
