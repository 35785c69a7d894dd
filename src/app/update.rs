//! Message update handlers - thin dispatcher delegating to submodules

mod dialog;
mod rating;
mod window;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_rating(&message) {
            return task;
        }
        if let Some(task) = self.handle_dialog(&message) {
            return task;
        }
        if let Some(task) = self.handle_window(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{CoreState, UiState};
    use crate::features::Settings;
    use crate::features::rating::{RatingEvent, Sentiment};
    use crate::i18n::{Language, Locale};
    use crate::ui::theme;
    use iced::widget::text_editor::{Action, Edit};

    fn app_with(settings: Settings) -> App {
        let core = CoreState::new(settings, Locale::new(Language::English));
        let ui = UiState::new(&core);
        App { core, ui }
    }

    fn app() -> App {
        app_with(Settings::default())
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            let _ = app.update(Message::FeedbackAction(Action::Edit(Edit::Insert(c))));
        }
    }

    /// Feedback the widget would hand over on submit
    fn submitted_feedback(app: &mut App) -> String {
        match app.core.rating.update(RatingEvent::Submit) {
            Some(Message::Submitted { feedback, .. }) => feedback,
            other => panic!("expected a submission, got {:?}", other),
        }
    }

    #[test]
    fn slider_sets_rating_and_retargets_display() {
        let mut app = app();
        let _ = app.update(Message::SliderChanged(0.9));

        assert_eq!(app.core.rating.value(), 0.9);
        assert_eq!(app.core.rating.band().sentiment, Some(Sentiment::Excellent));
        assert_eq!(app.ui.transitions.target_value(), 0.9);
        assert_eq!(app.ui.transitions.target_color(), theme::BAND_GREEN);
    }

    #[test]
    fn slider_out_of_range_is_clamped() {
        let mut app = app();
        let _ = app.update(Message::SliderChanged(1.7));
        assert_eq!(app.core.rating.value(), 1.0);
    }

    #[test]
    fn track_drag_maps_through_geometry() {
        let mut app = app();
        // Track of 490px travels over 400px starting at 30px
        let _ = app.update(Message::TrackDragged {
            position: 230.0,
            track_width: 490.0,
        });
        assert!((app.core.rating.value() - 0.5).abs() < 1e-6);
        assert_eq!(app.ui.transitions.target_color(), theme::BAND_YELLOW);
    }

    #[test]
    fn submission_opens_acknowledgment() {
        let mut app = app();
        let _ = app.update(Message::Submitted {
            rating: 0.75,
            feedback: "Great".to_string(),
        });

        assert!(app.ui.dialogs.ack_open);
        assert_eq!(
            app.core.last_submission,
            Some(crate::app::Submission {
                rating: 0.75,
                feedback: "Great".to_string(),
            })
        );
    }

    #[test]
    fn dismiss_closes_acknowledgment_but_keeps_rating() {
        let mut app = app();
        let _ = app.update(Message::SliderChanged(0.6));
        let _ = app.update(Message::Submitted {
            rating: 0.6,
            feedback: String::new(),
        });
        let _ = app.update(Message::DismissAcknowledgment);

        assert!(!app.ui.dialogs.ack_open);
        assert_eq!(app.core.rating.value(), 0.6);
    }

    #[test]
    fn slider_change_eases_the_drawn_rating() {
        let mut app = app();
        let _ = app.update(Message::SliderChanged(0.9));
        let _ = app.update(Message::AnimationTick);

        assert_eq!(app.core.rating.value(), 0.9);
        assert!(app.ui.transitions.is_animating());
        assert!(app.ui.transitions.value() < 0.9);
    }

    #[test]
    fn typing_focuses_and_mirrors_editor_text() {
        let mut app = app();
        type_text(&mut app, "Great app");
        let _ = app.update(Message::FeedbackAction(Action::Edit(Edit::Enter)));

        assert!(app.core.rating.state().is_focused());
        assert_eq!(app.ui.feedback.text(), "Great app\n");
        assert_eq!(app.core.rating.state().text(), app.ui.feedback.text());
    }

    #[test]
    fn submitted_feedback_is_editor_text_unmodified() {
        let mut app = app();
        type_text(&mut app, "Great app");
        let _ = app.update(Message::FeedbackAction(Action::Edit(Edit::Enter)));

        let editor = app.ui.feedback.text();
        assert_eq!(submitted_feedback(&mut app), editor);
        // Submitting leaves the text in place
        assert_eq!(app.core.rating.state().text(), editor);
    }

    #[test]
    fn click_focuses_and_blur_clears() {
        let mut app = app();
        assert!(app.core.rating.placeholder_visible());

        let _ = app.update(Message::FeedbackAction(Action::Click(iced::Point::ORIGIN)));
        assert!(app.core.rating.state().is_focused());
        assert!(!app.core.rating.placeholder_visible());

        let _ = app.update(Message::BlurFeedback);
        assert!(!app.core.rating.state().is_focused());
        assert!(app.core.rating.placeholder_visible());
    }

    #[test]
    fn scrolling_does_not_focus() {
        let mut app = app();
        let _ = app.update(Message::FeedbackAction(Action::Scroll { lines: 1 }));
        assert!(!app.core.rating.state().is_focused());
    }

    #[test]
    fn rating_change_blurs_feedback() {
        let mut app = app();
        type_text(&mut app, "ok");
        let _ = app.update(Message::SliderChanged(0.3));

        assert!(!app.core.rating.state().is_focused());
        assert_eq!(app.core.rating.state().text(), "ok");
    }

    #[test]
    fn disabled_feedback_ignores_editor_actions() {
        let mut settings = Settings::default();
        settings.rating.enable_written_feedback = false;
        let mut app = app_with(settings);

        let _ = app.update(Message::FeedbackAction(Action::Click(iced::Point::ORIGIN)));
        type_text(&mut app, "typed anyway");

        assert!(!app.core.rating.state().is_focused());
        assert_eq!(app.core.rating.state().text(), "");
        assert_eq!(submitted_feedback(&mut app), "");
    }
}
