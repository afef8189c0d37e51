//! Discovery selection criteria.
//!
//! Every recognized option is a typed field with its default stated on
//! [`DiscoveryCriteria::default`]; the whole struct (via [`CriteriaKey`])
//! doubles as the discovery cache key.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;
use crate::domain::values::category::Category;

pub const DEFAULT_LIMIT: usize = 20;
pub const MAX_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1h")]
    H1,
    #[serde(rename = "6h")]
    H6,
    #[default]
    #[serde(rename = "24h")]
    H24,
    #[serde(rename = "7d")]
    D7,
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timeframe::H1 => write!(f, "1h"),
            Timeframe::H6 => write!(f, "6h"),
            Timeframe::H24 => write!(f, "24h"),
            Timeframe::D7 => write!(f, "7d"),
        }
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1h" => Ok(Timeframe::H1),
            "6h" => Ok(Timeframe::H6),
            "24h" | "1d" => Ok(Timeframe::H24),
            "7d" | "1w" => Ok(Timeframe::D7),
            _ => Err(format!("Unknown timeframe: {s}. Use 1h, 6h, 24h or 7d")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Score,
    Volume,
    PriceChange,
    Newest,
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortBy::Score => write!(f, "score"),
            SortBy::Volume => write!(f, "volume"),
            SortBy::PriceChange => write!(f, "price_change"),
            SortBy::Newest => write!(f, "newest"),
        }
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "score" => Ok(SortBy::Score),
            "volume" => Ok(SortBy::Volume),
            "price_change" | "change" => Ok(SortBy::PriceChange),
            "newest" | "age" => Ok(SortBy::Newest),
            _ => Err(format!("Unknown sort key: {s}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryCriteria {
    pub category: Category,
    pub limit: usize,
    pub timeframe: Timeframe,
    pub sort_by: SortBy,
    /// Keep tokens whose composite score is at least this value.
    pub min_score: Option<u8>,
    /// Keep tokens whose rug-pull probability is at most this value.
    pub max_risk: Option<f64>,
    /// `None` = no filter, `Some(true)` = only new tokens, `Some(false)` = exclude them.
    pub include_new: Option<bool>,
    /// Same tri-state as `include_new`, for the meme flag.
    pub include_meme: Option<bool>,
    /// Chain ids to keep. Empty means every chain.
    pub networks: BTreeSet<String>,
}

impl Default for DiscoveryCriteria {
    fn default() -> Self {
        Self {
            category: Category::Trending,
            limit: DEFAULT_LIMIT,
            timeframe: Timeframe::H24,
            sort_by: SortBy::Score,
            min_score: None,
            max_risk: None,
            include_new: None,
            include_meme: None,
            networks: BTreeSet::new(),
        }
    }
}

impl DiscoveryCriteria {
    pub fn for_category(category: Category, limit: usize) -> Self {
        Self {
            category,
            limit,
            ..Default::default()
        }
    }

    /// Canonical form: network ids trimmed and lowercased. Discovery runs
    /// echo this form, so equal keys always carry equal criteria.
    pub fn normalized(&self) -> Self {
        Self {
            networks: self.networks.iter().map(|n| n.trim().to_lowercase()).collect(),
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.limit == 0 || self.limit > MAX_LIMIT {
            return Err(DomainError::InvalidInput(format!(
                "limit must be between 1 and {MAX_LIMIT}, got {}",
                self.limit
            )));
        }
        if let Some(min) = self.min_score {
            if min > 100 {
                return Err(DomainError::InvalidInput(format!(
                    "min_score must be between 0 and 100, got {min}"
                )));
            }
        }
        if let Some(max) = self.max_risk {
            if !(0.0..=1.0).contains(&max) {
                return Err(DomainError::InvalidInput(format!(
                    "max_risk must be between 0.0 and 1.0, got {max}"
                )));
            }
        }
        if self.networks.iter().any(|n| n.trim().is_empty()) {
            return Err(DomainError::InvalidInput("network ids must not be empty".into()));
        }
        Ok(())
    }

    pub fn cache_key(&self) -> CriteriaKey {
        CriteriaKey {
            category: self.category,
            limit: self.limit,
            timeframe: self.timeframe,
            sort_by: self.sort_by,
            min_score: self.min_score,
            max_risk_bits: self.max_risk.map(f64::to_bits),
            include_new: self.include_new,
            include_meme: self.include_meme,
            networks: self.networks.iter().map(|n| n.trim().to_lowercase()).collect(),
        }
    }
}

/// Hashable projection of [`DiscoveryCriteria`]. `max_risk` is keyed by its
/// bit pattern since `f64` is not `Eq`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CriteriaKey {
    category: Category,
    limit: usize,
    timeframe: Timeframe,
    sort_by: SortBy,
    min_score: Option<u8>,
    max_risk_bits: Option<u64>,
    include_new: Option<bool>,
    include_meme: Option<bool>,
    networks: BTreeSet<String>,
}
