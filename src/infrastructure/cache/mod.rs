pub mod resolution_cache;
pub mod ttl_cache;

use crate::domain::entities::discovery_run::DiscoveryRun;
use crate::domain::values::criteria::CriteriaKey;

pub use resolution_cache::ResolutionCache;
pub use ttl_cache::TtlCache;

/// Complete discovery runs keyed by the full selection criteria.
pub type DiscoveryCache = TtlCache<CriteriaKey, DiscoveryRun>;
