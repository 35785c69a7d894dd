// src/app/update/window.rs
//! Window and animation frame handlers

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::RequestClose => {
                tracing::info!("Close requested, exiting");
                Some(iced::exit())
            }

            Message::AnimationTick => {
                let now = Instant::now();
                self.ui.transitions.tick(now);
                self.ui.dialogs.ack_animation.tick(now);
                Some(Task::none())
            }

            _ => None,
        }
    }
}
