use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    VeryBearish,
    Bearish,
    Neutral,
    Bullish,
    VeryBullish,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentLabel::VeryBearish => write!(f, "very_bearish"),
            SentimentLabel::Bearish => write!(f, "bearish"),
            SentimentLabel::Neutral => write!(f, "neutral"),
            SentimentLabel::Bullish => write!(f, "bullish"),
            SentimentLabel::VeryBullish => write!(f, "very_bullish"),
        }
    }
}

/// Sentiment classification attached to every scored token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    /// Signed score in [-1, 1], a linear rescale of the blended [0, 1] value.
    pub score: f64,
    /// Fixed constant. Not statistically calibrated.
    pub confidence: f64,
}
