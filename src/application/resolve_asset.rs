use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::entities::resolved_asset::{ResolvedAsset, TokenIdentity, FALLBACK_SOURCE};
use crate::domain::ports::source_probe::{ProbeResponse, SourceProbe};
use crate::domain::values::asset_source::{in_probe_order, AssetSource};
use crate::infrastructure::cache::ResolutionCache;

/// Resolves a token's display asset by probing an ordered provider list.
///
/// The first accepted provider wins and is cached. When every provider
/// fails, a sentinel asset tagged [`FALLBACK_SOURCE`] is returned and cached
/// too, so a permanently missing identity is probed once per process.
pub struct ResolveAssetUseCase {
    sources: Vec<AssetSource>,
    probe: Arc<dyn SourceProbe>,
    cache: Arc<ResolutionCache>,
    probe_timeout: Duration,
    fallback_url: String,
}

impl ResolveAssetUseCase {
    pub fn new(
        sources: Vec<AssetSource>,
        probe: Arc<dyn SourceProbe>,
        cache: Arc<ResolutionCache>,
        probe_timeout: Duration,
        fallback_url: impl Into<String>,
    ) -> Self {
        Self {
            sources: in_probe_order(sources),
            probe,
            cache,
            probe_timeout,
            fallback_url: fallback_url.into(),
        }
    }

    pub async fn execute(&self, identity: &TokenIdentity) -> ResolvedAsset {
        if let Some(hit) = self.cache.get(identity) {
            debug!(identity = %identity, source = %hit.source, "resolution cache hit");
            return hit;
        }

        for source in &self.sources {
            let Some(url) = source.url_for(identity) else {
                continue;
            };

            if self.try_source(source, &url).await {
                let asset = ResolvedAsset {
                    identity: identity.clone(),
                    url,
                    source: source.name.to_string(),
                    from_cache: false,
                };
                self.cache.insert(asset.clone());
                return asset;
            }
        }

        warn!(identity = %identity, "no asset source answered, using fallback asset");
        let asset = ResolvedAsset {
            identity: identity.clone(),
            url: self.fallback_url.clone(),
            source: FALLBACK_SOURCE.to_string(),
            from_cache: false,
        };
        self.cache.insert(asset.clone());
        asset
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    async fn try_source(&self, source: &AssetSource, url: &str) -> bool {
        match tokio::time::timeout(self.probe_timeout, self.probe.probe(url)).await {
            Ok(Ok(resp)) if accepts(&resp) => true,
            Ok(Ok(resp)) => {
                debug!(
                    source = source.name,
                    url,
                    success = resp.success,
                    content_type = resp.content_type.as_deref().unwrap_or("-"),
                    "asset source rejected"
                );
                false
            }
            Ok(Err(e)) => {
                debug!(source = source.name, url, error = %e, "asset probe failed");
                false
            }
            Err(_) => {
                debug!(
                    source = source.name,
                    url,
                    timeout_ms = self.probe_timeout.as_millis() as u64,
                    "asset probe timed out"
                );
                false
            }
        }
    }
}

fn accepts(resp: &ProbeResponse) -> bool {
    resp.success && resp.is_image()
}
