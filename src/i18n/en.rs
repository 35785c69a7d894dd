//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "RatingFace");

    // Rating
    m.insert(Key::FeedbackPlaceholder, "Write feedback");
    m.insert(Key::Submit, "Submit");
    m.insert(Key::SentimentBad, "BAD");
    m.insert(Key::SentimentRegular, "REGULAR");
    m.insert(Key::SentimentGood, "GOOD");
    m.insert(Key::SentimentExcellent, "EXCELLENT");

    // Acknowledgment Dialog
    m.insert(Key::AckTitle, "Thank you!");
    m.insert(Key::AckRating, "Rating");
    m.insert(Key::AckFeedback, "Feedback");
    m.insert(Key::AckNoFeedback, "No written feedback");
    m.insert(Key::AckClose, "OK");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
