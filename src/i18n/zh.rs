//! Chinese translations (简体中文)

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "RatingFace");

    // Rating
    m.insert(Key::FeedbackPlaceholder, "写下您的反馈");
    m.insert(Key::Submit, "提交");
    m.insert(Key::SentimentBad, "很差");
    m.insert(Key::SentimentRegular, "一般");
    m.insert(Key::SentimentGood, "不错");
    m.insert(Key::SentimentExcellent, "非常好");

    // Acknowledgment Dialog
    m.insert(Key::AckTitle, "感谢您的评价！");
    m.insert(Key::AckRating, "评分");
    m.insert(Key::AckFeedback, "反馈");
    m.insert(Key::AckNoFeedback, "未填写文字反馈");
    m.insert(Key::AckClose, "好的");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
