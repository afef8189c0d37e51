use async_trait::async_trait;

use crate::domain::entities::candidate::Candidate;
use crate::domain::error::DomainError;
use crate::domain::values::category::Category;
use crate::domain::values::criteria::Timeframe;

/// Upstream supplier of raw candidates.
///
/// Implementations select by category provider-side. Returning an error or
/// an empty list are both valid; the discovery pipeline turns either into
/// a fallback run.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch(&self, category: Category, timeframe: Timeframe) -> Result<Vec<Candidate>, DomainError>;
}
