use std::fmt;

use crate::domain::entities::resolved_asset::TokenIdentity;

/// Builds the probe URL for an identity, or `None` when the source needs
/// data the identity lacks (typically a contract address).
pub type UrlBuilder = fn(&TokenIdentity) -> Option<String>;

/// One provider in the resolution chain. Reordering or adding providers is
/// a change to a `Vec<AssetSource>`, not to the resolver. A provider is
/// accepted only on a 2xx response with an `image/*` content type.
#[derive(Clone, Copy)]
pub struct AssetSource {
    pub name: &'static str,
    /// Lower is tried first.
    pub priority: u32,
    pub build_url: UrlBuilder,
}

impl AssetSource {
    pub fn new(name: &'static str, priority: u32, build_url: UrlBuilder) -> Self {
        Self {
            name,
            priority,
            build_url,
        }
    }

    pub fn url_for(&self, identity: &TokenIdentity) -> Option<String> {
        (self.build_url)(identity)
    }
}

impl fmt::Debug for AssetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetSource")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .finish()
    }
}

/// Sort a source list into probe order. Stable, so equal priorities keep
/// their declaration order.
pub fn in_probe_order(mut sources: Vec<AssetSource>) -> Vec<AssetSource> {
    sources.sort_by_key(|s| s.priority);
    sources
}
