pub mod allowlist;

pub use allowlist::AllowlistOracle;
