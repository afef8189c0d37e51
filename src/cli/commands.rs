use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tokenscope", about = "Token discovery, scoring and asset resolution")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct DiscoverArgs {
    /// Category (trending, new, meme, gainers, volume)
    #[arg(long, default_value = "trending")]
    pub category: String,
    #[arg(long, default_value = "20")]
    pub limit: usize,
    /// Price-change window (1h, 6h, 24h, 7d)
    #[arg(long, default_value = "24h")]
    pub timeframe: String,
    /// Sort key (score, volume, price_change, newest)
    #[arg(long, default_value = "score")]
    pub sort_by: String,
    /// Minimum composite score (0-100)
    #[arg(long)]
    pub min_score: Option<u8>,
    /// Maximum rug-pull probability (0.0-1.0)
    #[arg(long)]
    pub max_risk: Option<f64>,
    /// Only new tokens (true) or exclude them (false)
    #[arg(long)]
    pub new: Option<bool>,
    /// Only meme tokens (true) or exclude them (false)
    #[arg(long)]
    pub meme: Option<bool>,
    /// Chain filter, repeatable (e.g. --network solana --network base)
    #[arg(long = "network")]
    pub networks: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one discovery scan and print the result as JSON
    Discover(DiscoverArgs),
    /// Re-run discovery on an interval
    Watch {
        #[command(flatten)]
        args: DiscoverArgs,
        /// Poll interval in seconds (defaults to the run's suggested delay)
        #[arg(long)]
        interval: Option<u64>,
        /// Stop after this many scans
        #[arg(long)]
        count: Option<usize>,
    },
    /// Resolve a token's display icon
    Resolve {
        symbol: String,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        chain: Option<String>,
    },
    /// Score a single candidate given as JSON
    Score {
        /// JSON with address, symbol, name, chain, discovered_at and optional market fields
        json: String,
    },
}
