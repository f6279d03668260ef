//! Ranks the files and symbols of a TypeScript project by the type-checking time they cost.
//!
//! # Overview
//!
//! `ts-rank` reads the two files the TypeScript compiler writes when invoked with
//! `--generateTrace <dir>`: the execution trace (`trace.json`) and the type catalog
//! (`types.json`). Every structural type-relation check in the trace is correlated with
//! the catalog symbol it concerns, and the symbols are ranked by the time those checks took.
//!
//! # Quick Start
//!
//! ```bash
//! tsc --noEmit --generateTrace .tsTrace
//! ts-rank
//! ```
//!
//! # Report Modes
//!
//! **Files ranked by total check time (default):**
//! ```bash
//! ts-rank files --file-limit 20 --symbol-limit 5
//! ```
//!
//! **Slowest symbols, split between first-party sources and dependencies:**
//! ```bash
//! ts-rank symbols --symbol-limit 25
//! ```
//!
//! # Filtering
//!
//! Reduce the ranking to declarations whose path matches a glob:
//!
//! ```bash
//! ts-rank files --pattern 'src/models/**'
//! ```
//!
//! Relative patterns match anywhere in the path, so `src/**` keeps every
//! declaration below any `src` directory.
//!
//! # Configuration
//!
//! Defaults can be stored in `ts-rank.toml`:
//!
//! ```toml
//! trace_file = "./.tsTrace/trace.json"
//! types_file = "./.tsTrace/types.json"
//! pattern = "**/*"
//! file_limit = 50
//! symbol_limit = 10
//! check_kinds = ["structuredTypeRelatedTo"]
//! dependency_marker = "/node_modules"
//! ```
//!
//! Generate it with `ts-rank init` and check it with `ts-rank validate`.
//! Command-line flags always win over the configuration file.
//!
//! # Missing Inputs
//!
//! A missing or unparseable trace or catalog is reported as a warning and treated as
//! empty, so the report still runs to completion with zero metrics.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io::Write;
use std::io::{stderr, stdout};
use ts_rank::{Host, run};

/// Host that writes to the real standard streams.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

#[cfg_attr(coverage_nightly, coverage(off))]
impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

#[tokio::main(flavor = "current_thread")]
#[cfg_attr(coverage_nightly, coverage(off))]
async fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args()).await
}
