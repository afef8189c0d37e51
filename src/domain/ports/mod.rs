pub mod candidate_source;
pub mod source_probe;
pub mod verification_oracle;
