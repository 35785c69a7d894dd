// src/app/view.rs
//! Application view rendering

use iced::Element;
use iced::widget::stack;

use super::App;
use super::message::Message;
use crate::ui::components;

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let rating = components::rating_view::view(
            &self.core.rating,
            &self.ui.feedback,
            &self.ui.transitions,
            self.core.locale,
        );

        // Acknowledgment stays mounted while it fades out
        let ack_progress = self.ui.dialogs.ack_animation.progress();
        if !self.ui.dialogs.ack_open && ack_progress < 0.01 {
            return rating;
        }

        let ack = components::ack_dialog::view(
            self.core.last_submission.as_ref(),
            ack_progress,
            self.core.locale,
        );

        stack![rating, ack].into()
    }
}
