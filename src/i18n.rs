//! Internationalization (i18n) support for RatingFace
//! Supports multiple languages with easy extensibility
//!
//! Structure:
//! - i18n.rs: Core types (Language, Key, Locale) and translation lookup
//! - en.rs: English translations
//! - zh.rs: Chinese translations

mod en;
mod zh;

use std::collections::HashMap;

use crate::features::rating::Sentiment;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    /// Parse a language code, falling back to English
    pub fn from_code(code: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|lang| lang.code() == code)
            .unwrap_or_default()
    }

    /// All available languages
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Chinese]
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,

    // Rating
    FeedbackPlaceholder,
    Submit,
    SentimentBad,
    SentimentRegular,
    SentimentGood,
    SentimentExcellent,

    // Acknowledgment Dialog
    AckTitle,
    AckRating,
    AckFeedback,
    AckNoFeedback,
    AckClose,
}

impl Key {
    /// Every key, for coverage checks
    #[cfg(test)]
    pub fn all() -> &'static [Key] {
        &[
            Key::AppName,
            Key::FeedbackPlaceholder,
            Key::Submit,
            Key::SentimentBad,
            Key::SentimentRegular,
            Key::SentimentGood,
            Key::SentimentExcellent,
            Key::AckTitle,
            Key::AckRating,
            Key::AckFeedback,
            Key::AckNoFeedback,
            Key::AckClose,
        ]
    }

    /// Key of the displayed label for a sentiment
    pub fn for_sentiment(sentiment: Sentiment) -> Self {
        match sentiment {
            Sentiment::Bad => Key::SentimentBad,
            Sentiment::Regular => Key::SentimentRegular,
            Sentiment::Good => Key::SentimentGood,
            Sentiment::Excellent => Key::SentimentExcellent,
        }
    }
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::English => en::translations(),
        Language::Chinese => zh::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }

    /// Displayed label for an optional sentiment; unlabelled bands show nothing
    pub fn sentiment(&self, sentiment: Option<Sentiment>) -> &'static str {
        sentiment
            .map(|s| self.get(Key::for_sentiment(s)))
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_is_translated() {
        for lang in Language::all() {
            for key in Key::all() {
                assert_ne!(t(*lang, *key), "???", "{:?} missing in {:?}", key, lang);
            }
        }
    }

    #[test]
    fn english_sentiments_use_canonical_labels() {
        let locale = Locale::new(Language::English);
        for sentiment in [
            Sentiment::Bad,
            Sentiment::Regular,
            Sentiment::Good,
            Sentiment::Excellent,
        ] {
            assert_eq!(locale.sentiment(Some(sentiment)), sentiment.label());
        }
        assert_eq!(locale.sentiment(None), "");
    }

    #[test]
    fn language_codes_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), *lang);
        }
        assert_eq!(Language::from_code("fr"), Language::English);
    }
}
