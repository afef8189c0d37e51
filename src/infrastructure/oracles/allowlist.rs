use std::collections::HashSet;

use crate::domain::entities::candidate::Candidate;
use crate::domain::ports::verification_oracle::VerificationOracle;

/// Verification backed by a fixed set of addresses (case-insensitive).
/// An empty allowlist verifies nothing.
#[derive(Debug, Clone, Default)]
pub struct AllowlistOracle {
    verified: HashSet<String>,
}

impl AllowlistOracle {
    pub fn new<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            verified: addresses
                .into_iter()
                .map(|a| a.as_ref().trim().to_lowercase())
                .filter(|a| !a.is_empty())
                .collect(),
        }
    }
}

impl VerificationOracle for AllowlistOracle {
    fn is_verified(&self, candidate: &Candidate) -> bool {
        self.verified.contains(&candidate.address.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_case_insensitive_match() {
        let oracle = AllowlistOracle::new(["0xABC", " ", ""]);
        let c = Candidate::new("0xabc", "ABC", "Abc", "ethereum", Utc::now());
        assert!(oracle.is_verified(&c));
        let other = Candidate::new("0xdef", "DEF", "Def", "ethereum", Utc::now());
        assert!(!oracle.is_verified(&other));
    }

    #[test]
    fn test_empty_allowlist() {
        let oracle = AllowlistOracle::default();
        let c = Candidate::new("0xabc", "ABC", "Abc", "ethereum", Utc::now());
        assert!(!oracle.is_verified(&c));
    }
}
