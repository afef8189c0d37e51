use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::values::criteria::Timeframe;

/// Raw token observation as delivered by a candidate source.
///
/// Numeric market fields are optional: upstream payloads are frequently
/// incomplete and scoring treats a missing value as zero instead of
/// rejecting the candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub chain: String,
    #[serde(default)]
    pub price_usd: Option<f64>,
    #[serde(default)]
    pub price_change_24h: Option<f64>,
    #[serde(default)]
    pub volume_24h: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    pub discovered_at: DateTime<Utc>,
    #[serde(default)]
    pub metadata: CandidateMetadata,
    /// Market movement over the timeframe the discovery asked for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<MarketWindow>,
}

/// Price change and volume over one timeframe. The 24h fields on
/// [`Candidate`] stay the scoring inputs; the window drives category
/// selection and the volume / price-change orderings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketWindow {
    /// The window the source actually reported, which may be wider or
    /// narrower than requested when the source lacks that granularity.
    pub timeframe: Timeframe,
    #[serde(default)]
    pub price_change: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateMetadata {
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_meme: bool,
    /// Estimated rug-pull probability in [0, 1].
    #[serde(default)]
    pub rug_pull_risk: Option<f64>,
}

impl Candidate {
    pub fn new(
        address: impl Into<String>,
        symbol: impl Into<String>,
        name: impl Into<String>,
        chain: impl Into<String>,
        discovered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            address: address.into(),
            symbol: symbol.into(),
            name: name.into(),
            chain: chain.into(),
            price_usd: None,
            price_change_24h: None,
            volume_24h: None,
            market_cap: None,
            discovered_at,
            metadata: CandidateMetadata::default(),
            window: None,
        }
    }

    pub fn with_market(mut self, price_usd: f64, change_24h: f64, volume_24h: f64, market_cap: f64) -> Self {
        self.price_usd = Some(price_usd);
        self.price_change_24h = Some(change_24h);
        self.volume_24h = Some(volume_24h);
        self.market_cap = Some(market_cap);
        self
    }

    pub fn with_flags(mut self, is_new: bool, is_meme: bool, rug_pull_risk: f64) -> Self {
        self.metadata = CandidateMetadata {
            is_new,
            is_meme,
            rug_pull_risk: Some(rug_pull_risk),
        };
        self
    }

    pub fn with_window(mut self, timeframe: Timeframe, price_change: f64, volume: f64) -> Self {
        self.window = Some(MarketWindow {
            timeframe,
            price_change: Some(price_change),
            volume: Some(volume),
        });
        self
    }

    pub fn change_24h(&self) -> f64 {
        finite_or_zero(self.price_change_24h)
    }

    pub fn volume(&self) -> f64 {
        finite_or_zero(self.volume_24h)
    }

    pub fn rug_pull_risk(&self) -> f64 {
        finite_or_zero(self.metadata.rug_pull_risk)
    }

    /// Price change over the requested window, or the 24h change when the
    /// source reported no window.
    pub fn window_change(&self) -> f64 {
        match &self.window {
            Some(w) => finite_or_zero(w.price_change),
            None => self.change_24h(),
        }
    }

    pub fn window_volume(&self) -> f64 {
        match &self.window {
            Some(w) => finite_or_zero(w.volume),
            None => self.volume(),
        }
    }

    /// True when any numeric field the scorer reads had to be zero-filled.
    pub fn is_incomplete(&self) -> bool {
        [
            self.price_usd,
            self.price_change_24h,
            self.volume_24h,
            self.market_cap,
            self.metadata.rug_pull_risk,
        ]
        .iter()
        .any(|v| !matches!(v, Some(x) if x.is_finite()))
    }

    /// Hours since discovery relative to `now`, never negative.
    pub fn age_hours(&self, now: DateTime<Utc>) -> f64 {
        let minutes = (now - self.discovered_at).num_minutes().max(0);
        minutes as f64 / 60.0
    }
}

fn finite_or_zero(v: Option<f64>) -> f64 {
    match v {
        Some(x) if x.is_finite() => x,
        _ => 0.0,
    }
}
