//! Report generation for a ranking run
//!
//! Two generators are provided, each accessed through a `generate` function:
//! - **Console**: terminal output with optional ANSI colors
//! - **JSON**: machine-readable structured data
//!
//! Both operate on the same input: a [`Summary`] describing the run and the
//! [`Ranking`](crate::ranking::Ranking) it produced. Formatting shared by both lives
//! in the `common` module.

mod common;
mod console;
mod json;
mod summary;

pub use console::generate as generate_console;
pub use json::generate as generate_json;
pub use summary::Summary;
