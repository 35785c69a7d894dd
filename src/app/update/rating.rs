// src/app/update/rating.rs
//! Rating widget message handlers

use iced::Task;
use iced::widget::text_editor;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::rating::RatingEvent;
use crate::ui::theme;

impl App {
    /// Handle rating, feedback and submit messages
    pub fn handle_rating(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::SliderChanged(value) => {
                self.apply_rating_event(RatingEvent::SetValue(*value));
                Some(Task::none())
            }

            Message::TrackDragged {
                position,
                track_width,
            } => {
                self.apply_rating_event(RatingEvent::TrackDragged {
                    position: *position,
                    track_width: *track_width,
                });
                Some(Task::none())
            }

            Message::FeedbackAction(action) => {
                // Scrolling the field does not count as editing it
                if !matches!(action, text_editor::Action::Scroll { .. })
                    && !self.core.rating.state().is_focused()
                {
                    self.apply_rating_event(RatingEvent::FocusText);
                }

                if !self.core.rating.feedback_enabled() {
                    return Some(Task::none());
                }

                let is_edit = action.is_edit();
                self.ui.feedback.perform(action.clone());
                if is_edit {
                    let text = self.ui.feedback.text();
                    self.apply_rating_event(RatingEvent::EditText(text));
                }
                Some(Task::none())
            }

            Message::BlurFeedback => {
                self.apply_rating_event(RatingEvent::BlurText);
                Some(Task::none())
            }

            Message::Submit => Some(match self.core.rating.update(RatingEvent::Submit) {
                Some(submitted) => Task::done(submitted),
                None => Task::none(),
            }),

            _ => None,
        }
    }

    /// Feed an event to the widget and ease the display toward the result
    fn apply_rating_event(&mut self, event: RatingEvent) {
        // Only submit produces a host message
        let _ = self.core.rating.update(event);

        let value = self.core.rating.value();
        let band = self.core.rating.band();
        self.ui.transitions.retarget_value(value);
        self.ui.transitions.retarget_color(theme::band_color(band.color));
    }
}
