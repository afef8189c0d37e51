use std::time::Duration;

use crate::domain::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Mock,
    DexScreener,
}

impl std::str::FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mock" => Ok(SourceKind::Mock),
            "dexscreener" => Ok(SourceKind::DexScreener),
            _ => Err(format!("Unknown candidate source: {s}. Use 'mock' or 'dexscreener'")),
        }
    }
}

/// Runtime settings. Every option is listed here with its default; nothing
/// is filled in ad hoc at call sites.
#[derive(Debug, Clone)]
pub struct ScopeConfig {
    pub source: SourceKind,
    /// Lifetime of a cached discovery run.
    pub cache_ttl: Duration,
    /// Upper bound on one candidate-source fetch.
    pub fetch_timeout: Duration,
    /// Upper bound on one asset probe.
    pub probe_timeout: Duration,
    /// Suggested delay before the caller polls again.
    pub next_scan: Duration,
    pub verified_addresses: Vec<String>,
    pub log_level: String,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::Mock,
            cache_ttl: Duration::from_secs(30),
            fetch_timeout: Duration::from_millis(5000),
            probe_timeout: Duration::from_millis(3000),
            next_scan: Duration::from_secs(30),
            verified_addresses: Vec::new(),
            log_level: "info".into(),
        }
    }
}

impl ScopeConfig {
    /// Read `TOKENSCOPE_*` variables from the process environment.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ScopeConfig::from_env`] against an arbitrary lookup, so
    /// tests do not have to mutate the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let source = match lookup("TOKENSCOPE_SOURCE") {
            Some(v) => v.parse().map_err(DomainError::Config)?,
            None => defaults.source,
        };

        let verified_addresses = lookup("TOKENSCOPE_VERIFIED")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            source,
            cache_ttl: secs(&lookup, "TOKENSCOPE_CACHE_TTL_SECS")?.unwrap_or(defaults.cache_ttl),
            fetch_timeout: millis(&lookup, "TOKENSCOPE_FETCH_TIMEOUT_MS")?.unwrap_or(defaults.fetch_timeout),
            probe_timeout: millis(&lookup, "TOKENSCOPE_PROBE_TIMEOUT_MS")?.unwrap_or(defaults.probe_timeout),
            next_scan: secs(&lookup, "TOKENSCOPE_NEXT_SCAN_SECS")?.unwrap_or(defaults.next_scan),
            verified_addresses,
            log_level: lookup("TOKENSCOPE_LOG").unwrap_or(defaults.log_level),
        })
    }
}

fn parse_u64<F>(lookup: &F, key: &str) -> Result<Option<u64>, DomainError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|e| DomainError::Config(format!("{key}={raw}: {e}"))),
    }
}

fn secs<F>(lookup: &F, key: &str) -> Result<Option<Duration>, DomainError>
where
    F: Fn(&str) -> Option<String>,
{
    Ok(parse_u64(lookup, key)?.map(Duration::from_secs))
}

fn millis<F>(lookup: &F, key: &str) -> Result<Option<Duration>, DomainError>
where
    F: Fn(&str) -> Option<String>,
{
    Ok(parse_u64(lookup, key)?.map(Duration::from_millis))
}
