use super::Grouping;
use serde::Serialize;

/// The result of ranking a set of metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    pub grouping: Grouping,

    /// Sum of every ranked metric, in milliseconds
    pub total_ms: f64,

    /// Number of metrics that were ranked
    pub metric_count: usize,

    pub groups: Vec<RankedGroup>,
}

/// A file or an origin bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedGroup {
    /// 1-based position
    pub rank: usize,

    /// Declaration path, or the bucket name in origin mode
    pub key: String,

    pub total_ms: f64,

    /// Share of the grand total, rounded to the nearest integer
    pub percentage: u32,

    /// Number of metrics in the group before truncation
    pub count: usize,

    pub items: Vec<RankedItem>,
}

/// A single symbol in a group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedItem {
    pub duration_ms: f64,
    pub name: String,
    pub path: String,

    /// Zero-based line of the first declaration
    pub line: u32,

    /// Zero-based column of the first declaration
    pub column: u32,
}
