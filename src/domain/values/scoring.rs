//! Token scoring engine.
//!
//! Pure functions: a candidate goes in, a composite score, a risk bucket and
//! a sentiment classification come out. No I/O, no shared state.
//!
//! The composite score is a weighted additive model on a base of 50:
//!
//! | Signal            | Condition              | Points |
//! |-------------------|------------------------|--------|
//! | 24h price change  | > 20% / > 10% / > 0%   | 30 / 20 / 10 |
//! | 24h volume        | > 1M / > 500k          | 20 / 15 |
//! | rug-pull risk     | < 0.2 / < 0.4          | 15 / 10 |
//! | novelty           | flagged new            | 10 |
//!
//! clamped to [0, 100]. Risk level is computed from the rug-pull probability
//! alone and is deliberately independent of the score.

use serde::Serialize;

use crate::domain::entities::candidate::Candidate;
use crate::domain::values::risk_level::RiskLevel;
use crate::domain::values::sentiment::{Sentiment, SentimentLabel};

const BASE_SCORE: i64 = 50;

/// Reported with every sentiment. A fixed value, not a derived statistic.
pub const SENTIMENT_CONFIDENCE: f64 = 0.75;

/// Volume above which the sentiment volume term reads as strong.
const SENTIMENT_VOLUME_THRESHOLD: f64 = 500_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TokenScore {
    pub score: u8,
    pub risk_level: RiskLevel,
    pub sentiment: Sentiment,
}

/// Score a candidate. Missing or non-finite numeric fields count as zero.
pub fn score(candidate: &Candidate) -> TokenScore {
    TokenScore {
        score: composite_score(
            candidate.change_24h(),
            candidate.volume(),
            candidate.rug_pull_risk(),
            candidate.metadata.is_new,
        ),
        risk_level: classify_risk(candidate.rug_pull_risk()),
        sentiment: sentiment(candidate.change_24h(), candidate.volume()),
    }
}

pub fn composite_score(change_24h: f64, volume_24h: f64, rug_pull_risk: f64, is_new: bool) -> u8 {
    let mut total = BASE_SCORE;

    total += if change_24h > 20.0 {
        30
    } else if change_24h > 10.0 {
        20
    } else if change_24h > 0.0 {
        10
    } else {
        0
    };

    total += if volume_24h > 1_000_000.0 {
        20
    } else if volume_24h > 500_000.0 {
        15
    } else {
        0
    };

    total += if rug_pull_risk < 0.2 {
        15
    } else if rug_pull_risk < 0.4 {
        10
    } else {
        0
    };

    if is_new {
        total += 10;
    }

    total.clamp(0, 100) as u8
}

pub fn classify_risk(rug_pull_risk: f64) -> RiskLevel {
    if rug_pull_risk > 0.4 {
        RiskLevel::High
    } else if rug_pull_risk > 0.2 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Average of a momentum term and a volume term, both in [0, 1].
pub fn blended_sentiment(change_24h: f64, volume_24h: f64) -> f64 {
    let momentum = ((change_24h + 20.0) / 40.0).clamp(0.0, 1.0);
    let volume = if volume_24h > SENTIMENT_VOLUME_THRESHOLD { 0.8 } else { 0.4 };
    (momentum + volume) / 2.0
}

/// Thresholds are strict: a value sitting exactly on a boundary falls into
/// the lower bucket.
pub fn classify_sentiment(blended: f64) -> SentimentLabel {
    if blended > 0.8 {
        SentimentLabel::VeryBullish
    } else if blended > 0.6 {
        SentimentLabel::Bullish
    } else if blended > 0.4 {
        SentimentLabel::Neutral
    } else if blended > 0.2 {
        SentimentLabel::Bearish
    } else {
        SentimentLabel::VeryBearish
    }
}

pub fn sentiment(change_24h: f64, volume_24h: f64) -> Sentiment {
    let blended = blended_sentiment(change_24h, volume_24h);
    Sentiment {
        label: classify_sentiment(blended),
        score: (blended * 2.0 - 1.0).clamp(-1.0, 1.0),
        confidence: SENTIMENT_CONFIDENCE,
    }
}
