//! Black-box integration tests, run as a single `tests` binary (mirroring
//! the aggregated-integration-test-binary convention this crate's wider
//! lineage uses for its own `tests/unit/mod.rs`).

mod property_invariants;
mod public_api;
