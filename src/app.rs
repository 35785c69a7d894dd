//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::i18n::{Key, Language, Locale};
pub use message::Message;
pub use state::{App, CoreState, Submission, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first to initialize locale correctly
        let settings = crate::features::Settings::load();
        let first_run = crate::features::Settings::file_path().is_some_and(|path| !path.exists());
        if first_run {
            // Write defaults once so the file can be edited by hand
            if let Err(e) = settings.save() {
                tracing::warn!("Failed to write default settings: {}", e);
            }
        }
        let locale = Locale::new(Language::from_code(&settings.display.language));

        // 2. Initialize sub-states
        let core = CoreState::new(settings, locale);
        let ui = UiState::new(&core);

        tracing::info!(
            "Rating widget ready: value {:.2}, band {:?}, written feedback {}",
            core.rating.value(),
            core.rating.band(),
            core.rating.feedback_enabled()
        );

        let app = Self { core, ui };

        // 3. Open main window
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: iced::Size::new(440.0, 860.0),
            min_size: Some(iced::Size::new(360.0, 640.0)),
            exit_on_close_request: false,
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "ratingface".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        (app, open_window.discard())
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        self.core.locale.get(Key::AppName).to_string()
    }

    /// Subscriptions for animations and window close
    pub fn subscription(&self) -> iced::Subscription<Message> {
        // 1. Window events
        let close_request_sub = iced::window::close_requests().map(|_id| Message::RequestClose);

        // 2. Animation subscription (~60fps while a transition runs)
        let animation_sub =
            if subscription_logic::needs_animation_subscription(
                self.ui.transitions.is_animating(),
                self.ui.dialogs.ack_animation.is_animating(),
            ) {
                iced::window::frames().map(|_| Message::AnimationTick)
            } else {
                iced::Subscription::none()
            };

        iced::Subscription::batch([close_request_sub, animation_sub])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_animation_subscription(transitions_running: bool, dialog_fading: bool) -> bool {
        transitions_running || dialog_fading
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    mod property_frames_only_while_animating {
        use super::*;

        #[test]
        fn idle_screen_requests_no_frames() {
            assert!(!needs_animation_subscription(false, false));
        }

        #[test]
        fn rating_transition_requests_frames() {
            assert!(needs_animation_subscription(true, false));
        }

        #[test]
        fn dialog_fade_requests_frames() {
            assert!(needs_animation_subscription(false, true));
        }

        #[test]
        fn both_running_request_frames() {
            assert!(needs_animation_subscription(true, true));
        }
    }
}
