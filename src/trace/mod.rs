//! Input records produced by the TypeScript compiler's `--generateTrace` option
//!
//! The compiler writes two JSON documents: an execution trace (`trace.json`), an
//! ordered array of timed events, and a type catalog (`types.json`), an ordered
//! array of type descriptors. This module models the parts of both that the
//! ranking needs and loads them leniently.
//!
//! # Implementation Model
//!
//! - [`TraceEvent`] mirrors one trace record. Check events carry the ids of the
//!   catalog entries they relate in their `args`.
//! - [`CatalogEntry`] is an untagged enum over the descriptor shapes found in the
//!   catalog. Only [`Symbol`] entries with a first declaration can be ranked.
//! - [`load_inputs`] reads both documents concurrently. A document that cannot be
//!   read or parsed becomes an empty sequence plus a warning rather than an error.

mod catalog_entry;
mod loader;
mod trace_event;

pub use catalog_entry::{CatalogEntry, Declaration, Intrinsic, OtherType, Position, Symbol};
pub use loader::{Loaded, load_catalog, load_inputs, load_trace};
pub use trace_event::{CHECK_CATEGORIES, CheckKind, TraceArgs, TraceEvent, TypeId};
