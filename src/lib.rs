//! ts-rank crate
//!
//! This crate is an implementation detail of the `ts-rank` tool. This crate's API is fluid and may change without warning
//! and in a semver-incompatible way.
//!
//! # Module Organization
//!
//! - [`trace`]: Trace and type catalog records, and their lenient loading
//! - [`metrics`]: Correlation of catalog symbols with the check events that measured them
//! - [`filter`]: Glob filtering over declaration paths
//! - [`ranking`]: Aggregation and ranking of metrics by file or by origin
//! - [`reports`]: Console and JSON rendering of a ranking
//! - [`config`]: Configuration file handling
//! - [`commands`]: Command-line interface and orchestration

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[doc(hidden)]
pub mod commands;

#[doc(hidden)]
pub mod config;

#[doc(hidden)]
pub mod filter;

#[doc(hidden)]
pub mod metrics;

#[doc(hidden)]
pub mod ranking;

#[doc(hidden)]
pub mod reports;

#[doc(hidden)]
pub mod trace;

#[cfg(test)]
mod testutil;

pub use crate::commands::{Host, run};
