pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod observability;

use crate::application::discover::DiscoverUseCase;
use crate::application::resolve_asset::ResolveAssetUseCase;
use crate::config::{ScopeConfig, SourceKind};
use crate::domain::entities::candidate::Candidate;
use crate::domain::entities::discovery_run::DiscoveryRun;
use crate::domain::entities::resolved_asset::{ResolvedAsset, TokenIdentity};
use crate::domain::error::DomainError;
use crate::domain::ports::candidate_source::CandidateSource;
use crate::domain::ports::source_probe::SourceProbe;
use crate::domain::ports::verification_oracle::VerificationOracle;
use crate::domain::values::asset_source::AssetSource;
use crate::domain::values::criteria::DiscoveryCriteria;
use crate::domain::values::scoring::{self, TokenScore};
use crate::infrastructure::asset_sources::{default_sources, FALLBACK_ASSET_URL};
use crate::infrastructure::cache::{DiscoveryCache, ResolutionCache};
use crate::infrastructure::oracles::AllowlistOracle;
use crate::infrastructure::probes::HttpProbe;
use crate::infrastructure::sources::{DexScreenerSource, MockCandidateSource};
use std::sync::Arc;

/// Collaborators a [`TokenScope`] is assembled from. Caches are passed in
/// rather than shared globally, so every instance (and every test) owns
/// its own.
pub struct Components {
    pub source: Arc<dyn CandidateSource>,
    pub probe: Arc<dyn SourceProbe>,
    pub oracle: Arc<dyn VerificationOracle>,
    pub asset_sources: Vec<AssetSource>,
    pub discovery_cache: Arc<DiscoveryCache>,
    pub resolution_cache: Arc<ResolutionCache>,
}

impl Components {
    /// Fresh caches and the default provider list around the given collaborators.
    pub fn new(
        config: &ScopeConfig,
        source: Arc<dyn CandidateSource>,
        probe: Arc<dyn SourceProbe>,
        oracle: Arc<dyn VerificationOracle>,
    ) -> Self {
        Self {
            source,
            probe,
            oracle,
            asset_sources: default_sources(),
            discovery_cache: Arc::new(DiscoveryCache::new(config.cache_ttl)),
            resolution_cache: Arc::new(ResolutionCache::new()),
        }
    }
}

pub struct TokenScope {
    discover_uc: DiscoverUseCase,
    resolve_uc: ResolveAssetUseCase,
    discovery_cache: Arc<DiscoveryCache>,
    resolution_cache: Arc<ResolutionCache>,
}

impl TokenScope {
    /// Build from `TOKENSCOPE_*` environment settings.
    pub fn new() -> Result<Self, DomainError> {
        let config = ScopeConfig::from_env()?;
        Ok(Self::from_config(&config))
    }

    pub fn from_config(config: &ScopeConfig) -> Self {
        let source: Arc<dyn CandidateSource> = match config.source {
            SourceKind::DexScreener => Arc::new(DexScreenerSource::new(config.fetch_timeout)),
            SourceKind::Mock => Arc::new(MockCandidateSource::new()),
        };
        let probe: Arc<dyn SourceProbe> = Arc::new(HttpProbe::new(config.probe_timeout));
        let oracle: Arc<dyn VerificationOracle> =
            Arc::new(AllowlistOracle::new(&config.verified_addresses));

        Self::with_components(config, Components::new(config, source, probe, oracle))
    }

    pub fn with_components(config: &ScopeConfig, components: Components) -> Self {
        let Components {
            source,
            probe,
            oracle,
            asset_sources,
            discovery_cache,
            resolution_cache,
        } = components;

        Self {
            discover_uc: DiscoverUseCase::new(
                source,
                oracle,
                discovery_cache.clone(),
                config.fetch_timeout,
                config.next_scan,
            ),
            resolve_uc: ResolveAssetUseCase::new(
                asset_sources,
                probe,
                resolution_cache.clone(),
                config.probe_timeout,
                FALLBACK_ASSET_URL,
            ),
            discovery_cache,
            resolution_cache,
        }
    }

    // Delegating methods
    pub async fn discover(&self, criteria: &DiscoveryCriteria) -> Result<DiscoveryRun, DomainError> {
        self.discover_uc.execute(criteria).await
    }

    pub async fn resolve(&self, identity: &TokenIdentity) -> ResolvedAsset {
        self.resolve_uc.execute(identity).await
    }

    pub fn score(&self, candidate: &Candidate) -> TokenScore {
        scoring::score(candidate)
    }

    pub fn clear_discovery_cache(&self) {
        self.discover_uc.clear_cache();
    }

    pub fn clear_resolution_cache(&self) {
        self.resolve_uc.clear_cache();
    }

    pub fn discovery_cache_len(&self) -> usize {
        self.discovery_cache.len()
    }

    pub fn resolution_cache_len(&self) -> usize {
        self.resolution_cache.len()
    }
}
