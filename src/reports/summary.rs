use crate::trace::CheckKind;
use camino::Utf8PathBuf;
use core::time::Duration;
use serde::Serialize;

/// Facts about a ranking run, reported alongside the ranking itself.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    pub trace_file: Utf8PathBuf,
    pub types_file: Utf8PathBuf,

    /// Number of trace events loaded
    pub trace_count: usize,

    /// Number of catalog entries loaded
    pub catalog_count: usize,

    /// Metrics correlated before the pattern was applied
    pub measured_count: usize,

    pub check_kinds: Vec<CheckKind>,
    pub pattern: String,
    pub file_limit: usize,
    pub symbol_limit: usize,

    /// Problems met while loading the inputs
    pub warnings: Vec<String>,

    #[serde(skip)]
    pub elapsed: Duration,
}
