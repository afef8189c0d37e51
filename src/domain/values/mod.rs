pub mod asset_source;
pub mod category;
pub mod criteria;
pub mod provenance;
pub mod risk_level;
pub mod scoring;
pub mod sentiment;
