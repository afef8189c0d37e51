pub mod asset_sources;
pub mod cache;
pub mod oracles;
pub mod probes;
pub mod sources;
