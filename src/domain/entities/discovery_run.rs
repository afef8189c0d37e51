use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::scored_token::ScoredToken;
use crate::domain::values::criteria::DiscoveryCriteria;
use crate::domain::values::provenance::Provenance;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetadata {
    pub run_id: String,
    pub criteria: DiscoveryCriteria,
    pub last_updated: DateTime<Utc>,
    /// Post-filter, pre-truncation count. `total_found > tokens.len()` means
    /// more results are available at a larger limit.
    pub total_found: usize,
    pub duration_ms: u64,
    pub next_scan_in_secs: u64,
    pub provenance: Provenance,
}

/// Output of one discovery pipeline invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryRun {
    pub tokens: Vec<ScoredToken>,
    pub metadata: RunMetadata,
}

impl DiscoveryRun {
    pub fn provenance(&self) -> Provenance {
        self.metadata.provenance
    }

    pub fn has_more(&self) -> bool {
        self.metadata.total_found > self.tokens.len()
    }
}
