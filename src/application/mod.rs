pub mod discover;
pub mod fallback;
pub mod resolve_asset;
