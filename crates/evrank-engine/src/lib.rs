//! evrank engine - orchestration layer
//!
//! Coordinates the core comparison logic with the filesystem adapters.
//! Each run gets a `RunId` that correlates its log events and errors.

pub mod commands;

pub use commands::archive::run_archive;
pub use commands::compare::{run_compare, CompareResult, ComparisonOutcome};
pub use commands::engine_command::{apply_engine_command, EngineCommand, EngineCommandResult};
