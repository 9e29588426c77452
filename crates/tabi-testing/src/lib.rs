//! Testing infrastructure for tabi integration tests.
//!
//! - `TestWorld`: isolated data directory plus CLI execution
//! - `assertions`: checks on the JSON envelope printed by `--format json`
//! - `fixtures`: small itineraries in both supported formats

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
