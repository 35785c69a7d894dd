// src/app/state.rs
//! Application state definitions

use std::time::Duration;

use iced::widget::text_editor;

use crate::app::Message;
use crate::features::Settings;
use crate::features::rating::RatingWidget;
use crate::i18n::Locale;
use crate::ui::animation::{FadeAnimation, RatingTransitions};
use crate::ui::theme;

/// Main application state
pub struct App {
    /// Core state (Settings, locale, the rating widget)
    pub core: CoreState,
    /// UI state (editor buffer, transitions, dialogs)
    pub ui: UiState,
}

/// A submission received from the rating widget
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub rating: f32,
    pub feedback: String,
}

/// Core state
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
    /// The rating widget; submissions come back as [`Message::Submitted`]
    pub rating: RatingWidget<'static, Message>,
    /// Most recent submission, shown in the acknowledgment
    pub last_submission: Option<Submission>,
}

impl CoreState {
    /// Build the rating widget from the loaded settings
    pub fn new(settings: Settings, locale: Locale) -> Self {
        let rating = RatingWidget::new(settings.rating.to_config(), |rating, feedback| {
            Message::Submitted { rating, feedback }
        });

        Self {
            settings,
            locale,
            rating,
            last_submission: None,
        }
    }
}

/// UI state
pub struct UiState {
    /// Text buffer behind the feedback editor
    pub feedback: text_editor::Content,
    /// Eased rating and background
    pub transitions: RatingTransitions,
    pub dialogs: DialogState,
}

impl UiState {
    /// Start at rest on the widget's current rating
    pub fn new(core: &CoreState) -> Self {
        let duration = Duration::from_millis(core.settings.rating.transition_ms);
        let color = theme::band_color(core.rating.band().color);

        Self {
            feedback: text_editor::Content::new(),
            transitions: RatingTransitions::new(core.rating.value(), color, duration),
            dialogs: DialogState::default(),
        }
    }
}

/// Dialog state
#[derive(Debug, Default)]
pub struct DialogState {
    pub ack_open: bool,
    pub ack_animation: FadeAnimation,
}
