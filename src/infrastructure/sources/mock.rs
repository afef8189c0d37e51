//! Deterministic in-process candidate source.
//!
//! Serves a fixed catalog of tokens whose discovery timestamps are offsets
//! from an anchor instant, so two sources with the same anchor yield
//! byte-identical candidates.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::candidate::Candidate;
use crate::domain::error::DomainError;
use crate::domain::ports::candidate_source::CandidateSource;
use crate::domain::values::category::Category;
use crate::domain::values::criteria::Timeframe;

struct Listing {
    address: &'static str,
    symbol: &'static str,
    name: &'static str,
    chain: &'static str,
    price: f64,
    change_1h: f64,
    change_6h: f64,
    change_24h: f64,
    change_7d: f64,
    volume_24h: f64,
    market_cap: f64,
    minutes_ago: i64,
    is_new: bool,
    is_meme: bool,
    rug_pull_risk: f64,
}

const CATALOG: &[Listing] = &[
    Listing { address: "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263", symbol: "BONK", name: "Bonk", chain: "solana", price: 0.000_023_1, change_1h: -1.1, change_6h: 4.0, change_24h: 14.2, change_7d: 35.0, volume_24h: 182_000_000.0, market_cap: 1_640_000_000.0, minutes_ago: 60 * 24 * 300, is_new: false, is_meme: true, rug_pull_risk: 0.05 },
    Listing { address: "EKpQGSJtjMFqKZ9KQanSqYXRcF8fBopzLHYxdM65zcjm", symbol: "WIF", name: "dogwifhat", chain: "solana", price: 2.31, change_1h: 1.9, change_6h: 9.5, change_24h: 22.8, change_7d: 48.0, volume_24h: 410_000_000.0, market_cap: 2_300_000_000.0, minutes_ago: 60 * 24 * 200, is_new: false, is_meme: true, rug_pull_risk: 0.08 },
    Listing { address: "0x6982508145454ce325ddbe47a25d4ec3d2311933", symbol: "PEPE", name: "Pepe", chain: "ethereum", price: 0.000_011_8, change_1h: 0.8, change_6h: -1.2, change_24h: -3.4, change_7d: 6.1, volume_24h: 650_000_000.0, market_cap: 4_900_000_000.0, minutes_ago: 60 * 24 * 500, is_new: false, is_meme: true, rug_pull_risk: 0.1 },
    Listing { address: "7GCihgDB8fe6KNjn2MYtkzZcRjQy3t9GHdC8uHYmW2hr", symbol: "POPCAT", name: "Popcat", chain: "solana", price: 0.71, change_1h: -0.6, change_6h: 2.2, change_24h: 8.9, change_7d: -4.0, volume_24h: 61_000_000.0, market_cap: 700_000_000.0, minutes_ago: 60 * 24 * 120, is_new: false, is_meme: true, rug_pull_risk: 0.18 },
    Listing { address: "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin", symbol: "MOODENG", name: "Moo Deng", chain: "solana", price: 0.19, change_1h: 6.3, change_6h: 18.0, change_24h: 41.5, change_7d: 41.5, volume_24h: 96_000_000.0, market_cap: 190_000_000.0, minutes_ago: 60 * 20, is_new: true, is_meme: true, rug_pull_risk: 0.32 },
    Listing { address: "0x532f27101965dd16442e59d40670faf5ebb142e4", symbol: "BRETT", name: "Brett", chain: "base", price: 0.12, change_1h: -2.4, change_6h: -5.5, change_24h: -11.0, change_7d: -19.0, volume_24h: 38_000_000.0, market_cap: 1_200_000_000.0, minutes_ago: 60 * 24 * 90, is_new: false, is_meme: true, rug_pull_risk: 0.22 },
    Listing { address: "4k3Dyjzvzp8eMZWUXbBCjEvwSkkk59S5iCNLY3QrkX6R", symbol: "RAY", name: "Raydium", chain: "solana", price: 4.82, change_1h: 0.3, change_6h: 1.4, change_24h: 5.1, change_7d: 12.0, volume_24h: 120_000_000.0, market_cap: 1_270_000_000.0, minutes_ago: 60 * 24 * 900, is_new: false, is_meme: false, rug_pull_risk: 0.03 },
    Listing { address: "JUPyiwrYJFskUPiHa7hkeR8VUtAeFoSYbKedZNsDvCN", symbol: "JUP", name: "Jupiter", chain: "solana", price: 0.98, change_1h: -0.4, change_6h: 0.9, change_24h: 2.6, change_7d: -2.2, volume_24h: 95_000_000.0, market_cap: 1_330_000_000.0, minutes_ago: 60 * 24 * 400, is_new: false, is_meme: false, rug_pull_risk: 0.04 },
    Listing { address: "0x57e114b691db790c35207b2e685d4a43181e6061", symbol: "ENA", name: "Ethena", chain: "ethereum", price: 0.61, change_1h: 1.1, change_6h: 4.8, change_24h: 12.4, change_7d: 25.0, volume_24h: 310_000_000.0, market_cap: 1_700_000_000.0, minutes_ago: 60 * 24 * 250, is_new: false, is_meme: false, rug_pull_risk: 0.07 },
    Listing { address: "8zGuJQqwhZafTah7Uc7Z4tXRnguqkn5KLFAP8oV6PHe2", symbol: "GIGA", name: "Gigachad", chain: "solana", price: 0.034, change_1h: 4.2, change_6h: 11.0, change_24h: 27.3, change_7d: 27.3, volume_24h: 740_000.0, market_cap: 32_000_000.0, minutes_ago: 60 * 9, is_new: true, is_meme: true, rug_pull_risk: 0.45 },
    Listing { address: "0x4ed4e862860bed51a9570b96d89af5e1b0efefed", symbol: "DEGEN", name: "Degen", chain: "base", price: 0.0082, change_1h: -0.9, change_6h: 1.5, change_24h: 3.7, change_7d: 3.7, volume_24h: 520_000.0, market_cap: 110_000_000.0, minutes_ago: 60 * 30, is_new: true, is_meme: true, rug_pull_risk: 0.28 },
    Listing { address: "Fch1oixTPri8zxBnmdCEADoJW2toyFHxqDZacQkwdvSP", symbol: "HARAMBE", name: "Harambe AI", chain: "solana", price: 0.0009, change_1h: 3.5, change_6h: -10.0, change_24h: -24.0, change_7d: -24.0, volume_24h: 45_000.0, market_cap: 900_000.0, minutes_ago: 95, is_new: true, is_meme: true, rug_pull_risk: 0.71 },
    Listing { address: "0xaaee1a9723aadb7afa2810263653a34ba2c21c7a", symbol: "MOG", name: "Mog Coin", chain: "ethereum", price: 0.000_001_9, change_1h: 0.5, change_6h: 6.0, change_24h: 16.0, change_7d: -8.5, volume_24h: 2_400_000.0, market_cap: 740_000_000.0, minutes_ago: 60 * 24 * 150, is_new: false, is_meme: true, rug_pull_risk: 0.15 },
    Listing { address: "0x912ce59144191c1204e64559fe8253a0e49e6548", symbol: "ARB", name: "Arbitrum", chain: "arbitrum", price: 0.74, change_1h: 0.2, change_6h: -0.5, change_24h: -1.2, change_7d: -6.0, volume_24h: 210_000_000.0, market_cap: 3_100_000_000.0, minutes_ago: 60 * 24 * 700, is_new: false, is_meme: false, rug_pull_risk: 0.02 },
];

impl Listing {
    fn change(&self, timeframe: Timeframe) -> f64 {
        match timeframe {
            Timeframe::H1 => self.change_1h,
            Timeframe::H6 => self.change_6h,
            Timeframe::H24 => self.change_24h,
            Timeframe::D7 => self.change_7d,
        }
    }

    /// Window volume as a fixed share of the 24h figure.
    fn volume(&self, timeframe: Timeframe) -> f64 {
        let share = match timeframe {
            Timeframe::H1 => 0.04,
            Timeframe::H6 => 0.25,
            Timeframe::H24 => 1.0,
            Timeframe::D7 => 6.0,
        };
        self.volume_24h * share
    }
}

pub struct MockCandidateSource {
    anchor: DateTime<Utc>,
}

impl Default for MockCandidateSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCandidateSource {
    pub fn new() -> Self {
        Self::anchored_at(Utc::now())
    }

    pub fn anchored_at(anchor: DateTime<Utc>) -> Self {
        Self { anchor }
    }

    fn selects(category: Category, timeframe: Timeframe, listing: &Listing) -> bool {
        match category {
            Category::Trending => listing.volume_24h > 1_000_000.0 && listing.change(timeframe) > 0.0,
            Category::New => listing.is_new,
            Category::Meme => listing.is_meme,
            Category::Gainers => listing.change(timeframe) > 0.0,
            Category::Volume => listing.volume_24h > 100_000_000.0,
        }
    }

    fn to_candidate(&self, listing: &Listing, timeframe: Timeframe) -> Candidate {
        Candidate::new(
            listing.address,
            listing.symbol,
            listing.name,
            listing.chain,
            self.anchor - Duration::minutes(listing.minutes_ago),
        )
        .with_market(listing.price, listing.change_24h, listing.volume_24h, listing.market_cap)
        .with_flags(listing.is_new, listing.is_meme, listing.rug_pull_risk)
        .with_window(timeframe, listing.change(timeframe), listing.volume(timeframe))
    }
}

#[async_trait]
impl CandidateSource for MockCandidateSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self, category: Category, timeframe: Timeframe) -> Result<Vec<Candidate>, DomainError> {
        Ok(CATALOG
            .iter()
            .filter(|l| Self::selects(category, timeframe, l))
            .map(|l| self.to_candidate(l, timeframe))
            .collect())
    }
}
