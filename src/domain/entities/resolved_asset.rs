use serde::{Deserialize, Serialize};
use std::fmt;

/// Source tag carried by the sentinel asset when no provider answered.
pub const FALLBACK_SOURCE: &str = "fallback";

/// What the resolver knows about a token when looking up its display asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenIdentity {
    pub symbol: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub chain: Option<String>,
}

impl TokenIdentity {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            address: None,
            chain: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_chain(mut self, chain: impl Into<String>) -> Self {
        self.chain = Some(chain.into());
        self
    }

    /// Cache key: (upper-cased symbol, lower-cased address or absent).
    pub fn cache_key(&self) -> (String, Option<String>) {
        (
            self.symbol.trim().to_uppercase(),
            self.address
                .as_deref()
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(str::to_lowercase),
        )
    }
}

impl fmt::Display for TokenIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.address {
            Some(addr) => write!(f, "{} ({addr})", self.symbol),
            None => write!(f, "{}", self.symbol),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAsset {
    pub identity: TokenIdentity,
    pub url: String,
    /// Name of the provider that supplied `url`, or [`FALLBACK_SOURCE`].
    pub source: String,
    pub from_cache: bool,
}

impl ResolvedAsset {
    pub fn is_fallback(&self) -> bool {
        self.source == FALLBACK_SOURCE
    }
}
