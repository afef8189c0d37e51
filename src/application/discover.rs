//! Discovery use case: fetch candidates, score, filter, rank, truncate,
//! and serve complete runs through a short-lived cache.

use std::cmp::Ordering;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::application::fallback::fallback_candidates;
use crate::domain::entities::candidate::Candidate;
use crate::domain::entities::discovery_run::{DiscoveryRun, RunMetadata};
use crate::domain::entities::scored_token::ScoredToken;
use crate::domain::error::DomainError;
use crate::domain::ports::candidate_source::CandidateSource;
use crate::domain::ports::verification_oracle::VerificationOracle;
use crate::domain::values::criteria::{DiscoveryCriteria, SortBy};
use crate::domain::values::provenance::Provenance;
use crate::domain::values::scoring;
use crate::infrastructure::cache::DiscoveryCache;

pub struct DiscoverUseCase {
    source: Arc<dyn CandidateSource>,
    oracle: Arc<dyn VerificationOracle>,
    cache: Arc<DiscoveryCache>,
    fetch_timeout: Duration,
    next_scan: Duration,
}

impl DiscoverUseCase {
    pub fn new(
        source: Arc<dyn CandidateSource>,
        oracle: Arc<dyn VerificationOracle>,
        cache: Arc<DiscoveryCache>,
        fetch_timeout: Duration,
        next_scan: Duration,
    ) -> Self {
        Self {
            source,
            oracle,
            cache,
            fetch_timeout,
            next_scan,
        }
    }

    /// Run discovery for `criteria`.
    ///
    /// Only invalid criteria produce an `Err`. An unavailable, slow or empty
    /// candidate source yields a run tagged [`Provenance::Fallback`].
    pub async fn execute(&self, criteria: &DiscoveryCriteria) -> Result<DiscoveryRun, DomainError> {
        let criteria = &criteria.normalized();
        criteria.validate()?;

        let key = criteria.cache_key();
        if let Some(run) = self.cache.get(&key) {
            debug!(category = %criteria.category, run_id = %run.metadata.run_id, "discovery cache hit");
            return Ok(run);
        }

        let started = Instant::now();
        let now = Utc::now();

        let candidates = match self.fetch_candidates(criteria).await {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(
                    source = self.source.name(),
                    category = %criteria.category,
                    error = %e,
                    "candidate source unavailable, serving fallback set"
                );
                return Ok(self.fallback_run(criteria, now, started));
            }
        };

        let provenance = if candidates.iter().any(Candidate::is_incomplete) {
            Provenance::Degraded
        } else {
            Provenance::Live
        };

        let scored: Vec<ScoredToken> = candidates
            .into_iter()
            .map(|c| self.score_candidate(c, now))
            .collect();

        let mut tokens = apply_filters(scored, criteria);
        let total_found = tokens.len();
        rank(&mut tokens, criteria.sort_by);
        tokens.truncate(criteria.limit);

        let run = DiscoveryRun {
            tokens,
            metadata: self.metadata(criteria, now, total_found, started, provenance),
        };

        info!(
            category = %criteria.category,
            returned = run.tokens.len(),
            total_found,
            provenance = %provenance,
            duration_ms = run.metadata.duration_ms,
            "discovery run complete"
        );

        // Only complete runs are published.
        self.cache.insert(key, run.clone());
        Ok(run)
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    async fn fetch_candidates(&self, criteria: &DiscoveryCriteria) -> Result<Vec<Candidate>, DomainError> {
        let fetch = self.source.fetch(criteria.category, criteria.timeframe);
        let candidates = tokio::time::timeout(self.fetch_timeout, fetch)
            .await
            .map_err(|_| {
                DomainError::Timeout(format!(
                    "{} did not answer within {}ms",
                    self.source.name(),
                    self.fetch_timeout.as_millis()
                ))
            })??;

        if candidates.is_empty() {
            return Err(DomainError::Source(format!(
                "{} returned no candidates for {}",
                self.source.name(),
                criteria.category
            )));
        }
        Ok(candidates)
    }

    fn score_candidate(&self, candidate: Candidate, now: DateTime<Utc>) -> ScoredToken {
        let result = scoring::score(&candidate);
        ScoredToken {
            score: result.score,
            risk_level: result.risk_level,
            sentiment: result.sentiment,
            age_hours: candidate.age_hours(now),
            verified: self.oracle.is_verified(&candidate),
            candidate,
        }
    }

    /// Not cached, so the next call retries the source.
    fn fallback_run(&self, criteria: &DiscoveryCriteria, now: DateTime<Utc>, started: Instant) -> DiscoveryRun {
        let mut tokens: Vec<ScoredToken> = fallback_candidates(now)
            .into_iter()
            .map(|c| self.score_candidate(c, now))
            .collect();
        let total_found = tokens.len();
        rank(&mut tokens, SortBy::Score);
        tokens.truncate(criteria.limit);

        DiscoveryRun {
            tokens,
            metadata: self.metadata(criteria, now, total_found, started, Provenance::Fallback),
        }
    }

    fn metadata(
        &self,
        criteria: &DiscoveryCriteria,
        now: DateTime<Utc>,
        total_found: usize,
        started: Instant,
        provenance: Provenance,
    ) -> RunMetadata {
        RunMetadata {
            run_id: uuid::Uuid::new_v4().to_string(),
            criteria: criteria.clone(),
            last_updated: now,
            total_found,
            duration_ms: started.elapsed().as_millis() as u64,
            next_scan_in_secs: self.next_scan.as_secs(),
            provenance,
        }
    }
}

/// Filters in fixed order: min score, max risk, new flag, meme flag,
/// networks. Tri-state flags filter only when set.
pub fn apply_filters(tokens: Vec<ScoredToken>, criteria: &DiscoveryCriteria) -> Vec<ScoredToken> {
    tokens
        .into_iter()
        .filter(|t| criteria.min_score.map_or(true, |min| t.score >= min))
        .filter(|t| criteria.max_risk.map_or(true, |max| t.candidate.rug_pull_risk() <= max))
        .filter(|t| criteria.include_new.map_or(true, |want| t.candidate.metadata.is_new == want))
        .filter(|t| criteria.include_meme.map_or(true, |want| t.candidate.metadata.is_meme == want))
        .filter(|t| {
            criteria.networks.is_empty()
                || criteria
                    .networks
                    .iter()
                    .any(|n| n.eq_ignore_ascii_case(&t.candidate.chain))
        })
        .collect()
}

/// Descending by the sort key (volume and price change read the requested
/// window), then newest discovery first, then by
/// chain and address so the order is total.
pub fn rank(tokens: &mut [ScoredToken], sort_by: SortBy) {
    tokens.sort_by(|a, b| compare(a, b, sort_by));
}

fn compare(a: &ScoredToken, b: &ScoredToken, sort_by: SortBy) -> Ordering {
    let primary = match sort_by {
        SortBy::Score => b.score.cmp(&a.score),
        SortBy::Volume => b.candidate.window_volume().total_cmp(&a.candidate.window_volume()),
        SortBy::PriceChange => b.candidate.window_change().total_cmp(&a.candidate.window_change()),
        SortBy::Newest => Ordering::Equal,
    };

    primary
        .then_with(|| b.candidate.discovered_at.cmp(&a.candidate.discovered_at))
        .then_with(|| a.candidate.chain.cmp(&b.candidate.chain))
        .then_with(|| a.candidate.address.cmp(&b.candidate.address))
}
