pub mod dexscreener;
pub mod mock;

pub use dexscreener::DexScreenerSource;
pub use mock::MockCandidateSource;
