use serde::{Deserialize, Serialize};

use crate::domain::entities::candidate::Candidate;
use crate::domain::values::risk_level::RiskLevel;
use crate::domain::values::sentiment::Sentiment;

/// A candidate enriched by one pipeline run. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredToken {
    #[serde(flatten)]
    pub candidate: Candidate,
    /// Composite quality score in [0, 100].
    pub score: u8,
    pub risk_level: RiskLevel,
    pub sentiment: Sentiment,
    pub age_hours: f64,
    pub verified: bool,
}
