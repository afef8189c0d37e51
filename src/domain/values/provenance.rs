use serde::{Deserialize, Serialize};
use std::fmt;

/// Which code path produced a discovery run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Candidates came from the upstream source intact.
    Live,
    /// Upstream answered, but some candidates had missing numeric fields
    /// that were scored as zero.
    Degraded,
    /// Upstream failed, timed out or returned nothing; the canned set was served.
    Fallback,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Live => write!(f, "live"),
            Provenance::Degraded => write!(f, "degraded"),
            Provenance::Fallback => write!(f, "fallback"),
        }
    }
}
