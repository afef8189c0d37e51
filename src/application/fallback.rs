//! Canned result set served when the candidate source is unavailable.

use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::candidate::Candidate;

/// Well-known, long-lived tokens. Timestamps are offsets from `now` so the
/// derived age stays plausible.
pub fn fallback_candidates(now: DateTime<Utc>) -> Vec<Candidate> {
    vec![
        Candidate::new(
            "So11111111111111111111111111111111111111112",
            "SOL",
            "Wrapped SOL",
            "solana",
            now - Duration::days(365),
        )
        .with_market(142.0, 3.2, 2_100_000_000.0, 67_000_000_000.0)
        .with_flags(false, false, 0.01),
        Candidate::new(
            "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263",
            "BONK",
            "Bonk",
            "solana",
            now - Duration::days(300),
        )
        .with_market(0.000_022, 6.5, 180_000_000.0, 1_600_000_000.0)
        .with_flags(false, true, 0.05),
        Candidate::new(
            "JUPyiwrYJFskUPiHa7hkeR8VUtAeFoSYbKedZNsDvCN",
            "JUP",
            "Jupiter",
            "solana",
            now - Duration::days(400),
        )
        .with_market(0.95, -1.8, 90_000_000.0, 1_300_000_000.0)
        .with_flags(false, false, 0.04),
        Candidate::new(
            "0x6982508145454ce325ddbe47a25d4ec3d2311933",
            "PEPE",
            "Pepe",
            "ethereum",
            now - Duration::days(500),
        )
        .with_market(0.000_011, 11.4, 640_000_000.0, 4_800_000_000.0)
        .with_flags(false, true, 0.1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_set_is_complete_and_unique() {
        let set = fallback_candidates(Utc::now());
        assert!(!set.is_empty());
        assert!(set.iter().all(|c| !c.is_incomplete()));
        let mut addresses: Vec<_> = set.iter().map(|c| c.address.as_str()).collect();
        addresses.sort();
        addresses.dedup();
        assert_eq!(addresses.len(), set.len());
    }
}
