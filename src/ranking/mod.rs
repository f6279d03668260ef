//! Aggregation and ranking of metrics
//!
//! A [`Ranker`] turns a list of filtered metrics into a [`Ranking`] under one of two
//! [`Grouping`] strategies:
//!
//! - **File**: metrics are grouped by declaration path, groups are ordered by their total
//!   check time and only the heaviest `file_limit` groups are kept.
//! - **Origin**: metrics are split into a source bucket and a dependency bucket, always
//!   reported in that order.
//!
//! Within every group, symbols are ordered by descending duration and truncated to
//! `symbol_limit`. All sorts are stable: groups with equal totals keep lexical path order
//! and symbols with equal durations keep catalog order.
//!
//! Percentages are relative to the grand total of every filtered metric, not only to the
//! groups that survive truncation.

mod ranked;
mod ranker;

pub use ranked::{RankedGroup, RankedItem, Ranking};
pub use ranker::{Grouping, Ranker};
