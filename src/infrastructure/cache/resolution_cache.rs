use dashmap::DashMap;

use crate::domain::entities::resolved_asset::{ResolvedAsset, TokenIdentity};

type Key = (String, Option<String>);

/// Resolved display assets for the life of the process. No TTL; entries
/// only leave through [`ResolutionCache::clear`].
///
/// Concurrent writes for the same identity are last-write-wins: two
/// resolutions of one identity produce equally valid assets.
#[derive(Default)]
pub struct ResolutionCache {
    entries: DashMap<Key, ResolvedAsset>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored asset with `from_cache` set.
    pub fn get(&self, identity: &TokenIdentity) -> Option<ResolvedAsset> {
        self.entries.get(&identity.cache_key()).map(|asset| ResolvedAsset {
            from_cache: true,
            ..asset.value().clone()
        })
    }

    pub fn insert(&self, asset: ResolvedAsset) {
        let key = asset.identity.cache_key();
        let stored = ResolvedAsset {
            from_cache: false,
            ..asset
        };
        self.entries.insert(key, stored);
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(symbol: &str, address: Option<&str>, url: &str) -> ResolvedAsset {
        let mut identity = TokenIdentity::new(symbol);
        identity.address = address.map(String::from);
        ResolvedAsset {
            identity,
            url: url.to_string(),
            source: "test".to_string(),
            from_cache: false,
        }
    }

    #[test]
    fn test_get_marks_from_cache() {
        let cache = ResolutionCache::new();
        cache.insert(asset("ETH", None, "https://x/eth.png"));
        let hit = cache.get(&TokenIdentity::new("eth")).unwrap();
        assert!(hit.from_cache);
        assert_eq!(hit.url, "https://x/eth.png");
    }

    #[test]
    fn test_address_is_part_of_key() {
        let cache = ResolutionCache::new();
        cache.insert(asset("USDC", Some("0xA0b8"), "https://x/usdc-eth.png"));
        assert!(cache.get(&TokenIdentity::new("USDC")).is_none());
        assert!(cache
            .get(&TokenIdentity::new("USDC").with_address("0xa0b8"))
            .is_some());
    }

    #[test]
    fn test_last_write_wins_and_clear() {
        let cache = ResolutionCache::new();
        cache.insert(asset("BONK", None, "https://a/bonk.png"));
        cache.insert(asset("BONK", None, "https://b/bonk.png"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&TokenIdentity::new("BONK")).unwrap().url, "https://b/bonk.png");
        cache.clear();
        assert!(cache.is_empty());
    }
}
