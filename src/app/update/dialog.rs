// src/app/update/dialog.rs
//! Acknowledgment dialog message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::{App, Submission};

impl App {
    /// Handle submission results and the acknowledgment dialog
    pub fn handle_dialog(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Submitted { rating, feedback } => {
                tracing::info!(
                    "Received rating {:.3} ({}), feedback: {:?}",
                    rating,
                    self.core.rating.band().label(),
                    feedback
                );
                self.core.last_submission = Some(Submission {
                    rating: *rating,
                    feedback: feedback.clone(),
                });
                self.ui.dialogs.ack_open = true;
                self.ui.dialogs.ack_animation.start();
                Some(Task::none())
            }

            Message::DismissAcknowledgment => {
                self.ui.dialogs.ack_open = false;
                self.ui.dialogs.ack_animation.stop();
                Some(Task::none())
            }

            Message::Noop => Some(Task::none()),

            _ => None,
        }
    }
}
