use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tracing::debug;

use crate::domain::entities::candidate::{Candidate, CandidateMetadata, MarketWindow};
use crate::domain::error::DomainError;
use crate::domain::ports::candidate_source::CandidateSource;
use crate::domain::values::category::Category;
use crate::domain::values::criteria::Timeframe;

const SEARCH_URL: &str = "https://api.dexscreener.com/latest/dex/search";

/// Pairs younger than this count as new listings.
const NEW_PAIR_MAX_AGE_HOURS: i64 = 72;

/// DexScreener pair search (public API, no auth).
///
/// The search endpoint needs a query term, so each category maps to a
/// search term and the returned pairs are then narrowed locally.
pub struct DexScreenerSource {
    client: reqwest::Client,
    base_url: String,
}

impl DexScreenerSource {
    pub fn new(timeout: Duration) -> Self {
        Self::with_base_url(SEARCH_URL, timeout)
    }

    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("tokenscope/", env!("CARGO_PKG_VERSION")))
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
        }
    }

    fn query_for(category: Category) -> &'static str {
        match category {
            Category::Meme => "meme",
            Category::New => "pump",
            Category::Trending | Category::Gainers => "SOL",
            Category::Volume => "USDC",
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct SearchResponse {
    #[serde(default)]
    pairs: Option<Vec<Pair>>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Pair {
    chain_id: String,
    base_token: BaseToken,
    #[serde(default)]
    price_usd: Option<String>,
    #[serde(default)]
    price_change: Option<Windowed>,
    #[serde(default)]
    volume: Option<Windowed>,
    #[serde(default)]
    liquidity: Option<Liquidity>,
    #[serde(default)]
    market_cap: Option<f64>,
    #[serde(default)]
    fdv: Option<f64>,
    /// Unix milliseconds.
    #[serde(default)]
    pair_created_at: Option<i64>,
}

#[derive(Debug, serde::Deserialize)]
struct BaseToken {
    address: String,
    name: String,
    symbol: String,
}

/// DexScreener reports `m5`, `h1`, `h6` and `h24` windows for both price
/// change and volume.
#[derive(Debug, Default, serde::Deserialize)]
struct Windowed {
    #[serde(default)]
    h1: Option<f64>,
    #[serde(default)]
    h6: Option<f64>,
    #[serde(default)]
    h24: Option<f64>,
}

impl Windowed {
    fn get(&self, timeframe: Timeframe) -> Option<f64> {
        match timeframe {
            Timeframe::H1 => self.h1,
            Timeframe::H6 => self.h6,
            Timeframe::H24 | Timeframe::D7 => self.h24,
        }
    }
}

/// The widest window the API offers is 24h, so a 7d request reads it.
fn reported_window(requested: Timeframe) -> Timeframe {
    match requested {
        Timeframe::D7 => Timeframe::H24,
        other => other,
    }
}

#[derive(Debug, serde::Deserialize)]
struct Liquidity {
    #[serde(default)]
    usd: Option<f64>,
}

/// Rough rug-pull estimate from pool depth. Thin pools are easy to drain.
fn rug_risk_from_liquidity(liquidity_usd: Option<f64>) -> Option<f64> {
    let usd = liquidity_usd.filter(|v| v.is_finite())?;
    Some(if usd < 10_000.0 {
        0.7
    } else if usd < 50_000.0 {
        0.45
    } else if usd < 250_000.0 {
        0.25
    } else {
        0.1
    })
}

fn is_meme_name(name: &str, symbol: &str) -> bool {
    const MARKERS: [&str; 8] = ["dog", "cat", "pepe", "inu", "wif", "bonk", "frog", "meme"];
    let text = format!("{} {}", name, symbol).to_lowercase();
    MARKERS.iter().any(|m| text.contains(m))
}

fn pair_to_candidate(pair: Pair, category: Category, timeframe: Timeframe, now: DateTime<Utc>) -> Candidate {
    let created = pair
        .pair_created_at
        .and_then(|ms| Utc.timestamp_millis_opt(ms).single());
    let is_new = created
        .map(|c| now - c < chrono::Duration::hours(NEW_PAIR_MAX_AGE_HOURS))
        .unwrap_or(false);
    let is_meme = category == Category::Meme || is_meme_name(&pair.base_token.name, &pair.base_token.symbol);

    let mut candidate = Candidate::new(
        pair.base_token.address,
        pair.base_token.symbol,
        pair.base_token.name,
        pair.chain_id,
        created.unwrap_or(now),
    );
    let price_change = pair.price_change.unwrap_or_default();
    let volume = pair.volume.unwrap_or_default();
    let window = reported_window(timeframe);

    candidate.price_usd = pair.price_usd.and_then(|p| p.parse::<f64>().ok());
    candidate.price_change_24h = price_change.h24;
    candidate.volume_24h = volume.h24;
    candidate.window = Some(MarketWindow {
        timeframe: window,
        price_change: price_change.get(window),
        volume: volume.get(window),
    });
    candidate.market_cap = pair.market_cap.or(pair.fdv);
    candidate.metadata = CandidateMetadata {
        is_new,
        is_meme,
        rug_pull_risk: rug_risk_from_liquidity(pair.liquidity.and_then(|l| l.usd)),
    };
    candidate
}

fn selects(category: Category, candidate: &Candidate) -> bool {
    match category {
        Category::Trending | Category::Meme => true,
        Category::New => candidate.metadata.is_new,
        Category::Gainers => candidate.window_change() > 0.0,
        Category::Volume => candidate.volume() > 1_000_000.0,
    }
}

/// Map a search payload to candidates: one per base token (the pair with
/// the highest 24h volume wins), narrowed to the category.
fn candidates_from_response(
    body: SearchResponse,
    category: Category,
    timeframe: Timeframe,
    now: DateTime<Utc>,
) -> Vec<Candidate> {
    let mut by_token: HashMap<(String, String), Candidate> = HashMap::new();

    for pair in body.pairs.unwrap_or_default() {
        let candidate = pair_to_candidate(pair, category, timeframe, now);
        let key = (candidate.chain.clone(), candidate.address.to_lowercase());
        match by_token.get(&key) {
            Some(existing) if existing.volume() >= candidate.volume() => {}
            _ => {
                by_token.insert(key, candidate);
            }
        }
    }

    let mut candidates: Vec<Candidate> = by_token
        .into_values()
        .filter(|c| selects(category, c))
        .collect();
    candidates.sort_by(|a, b| a.chain.cmp(&b.chain).then_with(|| a.address.cmp(&b.address)));
    candidates
}

#[async_trait]
impl CandidateSource for DexScreenerSource {
    fn name(&self) -> &str {
        "dexscreener"
    }

    async fn fetch(&self, category: Category, timeframe: Timeframe) -> Result<Vec<Candidate>, DomainError> {
        let query = Self::query_for(category);
        debug!(%category, %timeframe, query, "querying dexscreener");

        let resp = self
            .client
            .get(format!("{}?q={query}", self.base_url))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DomainError::Timeout(format!("dexscreener search: {e}"))
                } else {
                    DomainError::Source(e.to_string())
                }
            })?;

        if !resp.status().is_success() {
            return Err(DomainError::Source(format!(
                "DexScreener returned {} for category {category}",
                resp.status()
            )));
        }

        let body: SearchResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::Parse(e.to_string()))?;

        Ok(candidates_from_response(body, category, timeframe, Utc::now()))
    }
}
