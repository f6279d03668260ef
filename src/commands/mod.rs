//! Command-line interface and orchestration for ts-rank
//!
//! This module implements the CLI commands and wires the loader, extractor, filter,
//! ranker and report generators together.
//!
//! ## Commands
//!
//! - **files**: Rank declaration files by the total check time of their symbols. This is
//!   the command used when none is named.
//! - **symbols**: Rank symbols by check time, with project sources and dependencies
//!   reported separately
//! - **init**: Generate a default configuration file
//! - **validate**: Check configuration file syntax and values
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap and routes to the
//! appropriate command handler. The two ranking commands share one pipeline:
//!
//! 1. Assemble the configuration from defaults, `ts-rank.toml` and flags
//! 2. Load the trace and the type catalog concurrently, degrading to empty inputs
//! 3. Correlate symbols with check events and apply the glob filter
//! 4. Rank by file or by origin
//! 5. Print the console report and/or write the JSON report

mod common;
mod host;
mod init;
mod rank;
mod run;
mod validate;

pub use common::{ColorMode, CommonArgs, LogLevel};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use rank::{RankArgs, rank_files, rank_symbols};
pub use run::run;
pub use validate::{ValidateArgs, validate_config};
