//! Correlation of catalog symbols with the check events that measured them
//!
//! A [`Metric`] pairs one declared catalog [`Symbol`](crate::trace::Symbol) with the
//! check event whose subject id is that symbol's id.
//!
//! # Implementation Model
//!
//! Traces routinely hold hundreds of thousands of events, so symbols are never matched
//! by scanning the trace. Instead [`CorrelationIndex`] makes a single pass over the trace
//! and maps each subject id to the last allow-listed check event that names it.
//! [`extract`] then walks the catalog in order and looks every declared symbol up in the
//! index, producing metrics in catalog order. Ranking re-sorts explicitly.
//!
//! Metrics borrow from the loaded trace and catalog. They live exactly as long as the
//! inputs they were derived from and are never mutated.

mod correlation_index;
mod extract;
mod metric;

pub use correlation_index::CorrelationIndex;
pub use extract::extract;
pub use metric::Metric;
