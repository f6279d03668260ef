//! Lenient loading of the trace and catalog documents.

use super::{CatalogEntry, TraceEvent};
use camino::Utf8Path;
use serde::de::DeserializeOwned;

const LOG_TARGET: &str = "   loader";

/// The records read from one input document.
///
/// When the document could not be used, `items` is empty and `warning` says why.
#[derive(Debug)]
pub struct Loaded<T> {
    pub items: Vec<T>,
    pub warning: Option<String>,
}

impl<T> Loaded<T> {
    const fn new(items: Vec<T>) -> Self {
        Self { items, warning: None }
    }

    fn degraded(warning: String) -> Self {
        log::warn!(target: LOG_TARGET, "{warning}");
        Self {
            items: Vec::new(),
            warning: Some(warning),
        }
    }
}

/// Load the execution trace, falling back to an empty trace.
pub async fn load_trace(path: &Utf8Path) -> Loaded<TraceEvent> {
    load_json_array(path, "trace").await
}

/// Load the type catalog, falling back to an empty catalog.
pub async fn load_catalog(path: &Utf8Path) -> Loaded<CatalogEntry> {
    load_json_array(path, "types").await
}

/// Load both documents concurrently.
pub async fn load_inputs(trace_path: &Utf8Path, types_path: &Utf8Path) -> (Loaded<TraceEvent>, Loaded<CatalogEntry>) {
    tokio::join!(load_trace(trace_path), load_catalog(types_path))
}

async fn load_json_array<T: DeserializeOwned>(path: &Utf8Path, what: &str) -> Loaded<T> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) => return Loaded::degraded(format!("unable to read {what} file '{path}': {e}")),
    };

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Loaded::degraded(format!("{what} file '{path}' is empty"));
    }

    match serde_json::from_slice::<Option<Vec<T>>>(&bytes) {
        Ok(Some(items)) => {
            log::debug!(target: LOG_TARGET, "Loaded {} records from {what} file '{path}'", items.len());
            Loaded::new(items)
        }
        Ok(None) => Loaded::degraded(format!("{what} file '{path}' contains no data")),
        Err(e) => Loaded::degraded(format!("unable to parse {what} file '{path}': {e}")),
    }
}
