pub mod candidate;
pub mod discovery_run;
pub mod resolved_asset;
pub mod scored_token;
