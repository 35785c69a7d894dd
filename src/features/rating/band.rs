//! Sentiment bands
//!
//! Splits `[0, 1]` into a fixed number of half-open bands, each with a
//! label and a background colour. Every band includes its lower bound, so
//! a value sitting exactly on a boundary belongs to the higher band; the
//! last band also includes 1.0.

use serde::{Deserialize, Serialize};

use super::clamp_unit;

/// Which band table to classify with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BandTable {
    /// red `[0, 0.3)`, yellow `[0.3, 0.7)`, green `[0.7, 1]`, unlabelled
    ThreeBand,
    /// BAD `[0, 0.2)`, REGULAR `[0.2, 0.5)`, GOOD `[0.5, 0.8)`, EXCELLENT `[0.8, 1]`
    #[default]
    FourBand,
}

/// Background colour of a band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BandColor {
    Red,
    Orange,
    Yellow,
    Green,
}

/// Sentiment label of a band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Bad,
    Regular,
    Good,
    Excellent,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Bad => "BAD",
            Sentiment::Regular => "REGULAR",
            Sentiment::Good => "GOOD",
            Sentiment::Excellent => "EXCELLENT",
        }
    }
}

/// Result of classifying a rating value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SentimentBand {
    /// `None` for tables without labels
    pub sentiment: Option<Sentiment>,
    pub color: BandColor,
}

impl SentimentBand {
    const fn new(sentiment: Option<Sentiment>, color: BandColor) -> Self {
        Self { sentiment, color }
    }

    /// Canonical label, empty for unlabelled bands
    pub fn label(&self) -> &'static str {
        self.sentiment.map(|s| s.label()).unwrap_or("")
    }
}

impl BandTable {
    /// Lower bounds of every band after the first, ascending
    #[cfg(test)]
    pub fn boundaries(&self) -> &'static [f32] {
        match self {
            BandTable::ThreeBand => &[0.3, 0.7],
            BandTable::FourBand => &[0.2, 0.5, 0.8],
        }
    }

    /// Number of bands in this table
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.boundaries().len() + 1
    }

    /// Classify a rating value; out-of-range values are clamped first
    pub fn classify(&self, value: f32) -> SentimentBand {
        let v = clamp_unit(value);
        match self {
            BandTable::ThreeBand => {
                if v < 0.3 {
                    SentimentBand::new(None, BandColor::Red)
                } else if v < 0.7 {
                    SentimentBand::new(None, BandColor::Yellow)
                } else {
                    SentimentBand::new(None, BandColor::Green)
                }
            }
            BandTable::FourBand => {
                if v < 0.2 {
                    SentimentBand::new(Some(Sentiment::Bad), BandColor::Red)
                } else if v < 0.5 {
                    SentimentBand::new(Some(Sentiment::Regular), BandColor::Orange)
                } else if v < 0.8 {
                    SentimentBand::new(Some(Sentiment::Good), BandColor::Yellow)
                } else {
                    SentimentBand::new(Some(Sentiment::Excellent), BandColor::Green)
                }
            }
        }
    }
}
