use crate::domain::entities::candidate::Candidate;

/// Answers whether a token has passed on-chain/off-chain verification.
/// Informational only: never feeds into score or risk.
pub trait VerificationOracle: Send + Sync {
    fn is_verified(&self, candidate: &Candidate) -> bool;
}
