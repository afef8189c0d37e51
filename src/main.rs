use std::time::Duration;

use clap::Parser;
use tokenscope::cli::commands::{Cli, Commands, DiscoverArgs};
use tokenscope::config::ScopeConfig;
use tokenscope::domain::entities::candidate::Candidate;
use tokenscope::domain::entities::resolved_asset::TokenIdentity;
use tokenscope::domain::values::criteria::DiscoveryCriteria;
use tokenscope::observability::init_logging;
use tokenscope::TokenScope;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match ScopeConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };
    init_logging(&config);

    let scope = TokenScope::from_config(&config);

    if let Err(e) = run_command(scope, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(scope: TokenScope, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Discover(args) => {
            let criteria = build_criteria(&args)?;
            let run = scope.discover(&criteria).await?;
            println!("{}", serde_json::to_string_pretty(&run)?);
        }
        Commands::Watch {
            args,
            interval,
            count,
        } => {
            let criteria = build_criteria(&args)?;
            let mut scans = 0usize;
            loop {
                let run = scope.discover(&criteria).await?;
                println!("{}", serde_json::to_string(&run)?);
                scans += 1;
                if count.is_some_and(|max| scans >= max) {
                    break;
                }
                let delay = interval.unwrap_or(run.metadata.next_scan_in_secs).max(1);
                tokio::time::sleep(Duration::from_secs(delay)).await;
            }
        }
        Commands::Resolve {
            symbol,
            address,
            chain,
        } => {
            let identity = TokenIdentity {
                symbol,
                address,
                chain,
            };
            let asset = scope.resolve(&identity).await;
            println!("{}", serde_json::to_string_pretty(&asset)?);
        }
        Commands::Score { json } => {
            let candidate: Candidate = serde_json::from_str(&json)?;
            let result = scope.score(&candidate);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }
    Ok(())
}

fn build_criteria(args: &DiscoverArgs) -> Result<DiscoveryCriteria, String> {
    Ok(DiscoveryCriteria {
        category: args.category.parse()?,
        limit: args.limit,
        timeframe: args.timeframe.parse()?,
        sort_by: args.sort_by.parse()?,
        min_score: args.min_score,
        max_risk: args.max_risk,
        include_new: args.new,
        include_meme: args.meme,
        networks: args.networks.iter().map(|n| n.trim().to_lowercase()).collect(),
    })
}
