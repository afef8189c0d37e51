//! Shared test helpers and fakes.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokenscope::config::ScopeConfig;
use tokenscope::domain::entities::candidate::Candidate;
use tokenscope::domain::error::DomainError;
use tokenscope::domain::ports::candidate_source::CandidateSource;
use tokenscope::domain::ports::source_probe::{ProbeResponse, SourceProbe};
use tokenscope::domain::ports::verification_oracle::VerificationOracle;
use tokenscope::domain::values::category::Category;
use tokenscope::domain::values::criteria::Timeframe;
use tokenscope::infrastructure::sources::MockCandidateSource;
use tokenscope::{Components, TokenScope};

pub fn test_config() -> ScopeConfig {
    ScopeConfig {
        fetch_timeout: Duration::from_millis(200),
        probe_timeout: Duration::from_millis(100),
        ..ScopeConfig::default()
    }
}

/// Source that always errors, counting calls.
#[derive(Default)]
pub struct FailingSource {
    pub calls: AtomicUsize,
}

#[async_trait]
impl CandidateSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch(&self, _category: Category, _timeframe: Timeframe) -> Result<Vec<Candidate>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::Source("upstream down".into()))
    }
}

/// Source that never answers within any reasonable timeout.
pub struct HangingSource;

#[async_trait]
impl CandidateSource for HangingSource {
    fn name(&self) -> &str {
        "hanging"
    }

    async fn fetch(&self, _category: Category, _timeframe: Timeframe) -> Result<Vec<Candidate>, DomainError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(vec![])
    }
}

/// Source returning a fixed list regardless of category, counting calls.
pub struct FixedSource {
    pub candidates: Vec<Candidate>,
    pub calls: AtomicUsize,
}

impl FixedSource {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl CandidateSource for FixedSource {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn fetch(&self, _category: Category, _timeframe: Timeframe) -> Result<Vec<Candidate>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.candidates.clone())
    }
}

/// Probe with canned responses per URL; unknown URLs are 404. Records
/// every URL it is asked about.
#[derive(Default)]
pub struct ScriptedProbe {
    pub responses: HashMap<String, ProbeResponse>,
    pub slow_urls: Vec<String>,
    pub calls: Mutex<Vec<String>>,
}

impl ScriptedProbe {
    pub fn with(mut self, url: &str, response: ProbeResponse) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    pub fn slow(mut self, url: &str) -> Self {
        self.slow_urls.push(url.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn called(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SourceProbe for ScriptedProbe {
    async fn probe(&self, url: &str) -> Result<ProbeResponse, DomainError> {
        self.calls.lock().unwrap().push(url.to_string());
        if self.slow_urls.iter().any(|u| u == url) {
            tokio::time::sleep(Duration::from_secs(30)).await;
        }
        Ok(self
            .responses
            .get(url)
            .cloned()
            .unwrap_or_else(ProbeResponse::not_found))
    }
}

/// Probe whose every call errors.
#[derive(Default)]
pub struct DownProbe {
    pub calls: AtomicUsize,
}

#[async_trait]
impl SourceProbe for DownProbe {
    async fn probe(&self, url: &str) -> Result<ProbeResponse, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::Probe(format!("connection refused: {url}")))
    }
}

/// Deterministic verification: a fixed answer for every candidate.
pub struct FixedOracle(pub bool);

impl VerificationOracle for FixedOracle {
    fn is_verified(&self, _candidate: &Candidate) -> bool {
        self.0
    }
}

pub fn scope_with(source: Arc<dyn CandidateSource>, probe: Arc<dyn SourceProbe>) -> TokenScope {
    let config = test_config();
    let components = Components::new(&config, source, probe, Arc::new(FixedOracle(false)));
    TokenScope::with_components(&config, components)
}

pub fn mock_scope(anchor: DateTime<Utc>) -> TokenScope {
    scope_with(
        Arc::new(MockCandidateSource::anchored_at(anchor)),
        Arc::new(ScriptedProbe::default()),
    )
}

pub fn make_candidate(address: &str, change: f64, volume: f64, risk: f64, discovered_at: DateTime<Utc>) -> Candidate {
    Candidate::new(address, address.to_uppercase(), format!("Token {address}"), "solana", discovered_at)
        .with_market(1.0, change, volume, 10_000_000.0)
        .with_flags(false, false, risk)
}
