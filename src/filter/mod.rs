//! Glob filtering over declaration paths
//!
//! Patterns use shell-style glob syntax (`*`, `**`, `?`, `[...]` classes and `{a,b}`
//! alternation). A `*` never crosses a `/`; use `**` for that.
//!
//! Patterns that do not start with `/` or `**` are unanchored: they may match any
//! trailing run of path components, so `src/**` keeps every declaration located below a
//! `src` directory and `*.d.ts` keeps every declaration file. A leading `./` is ignored.
//! The default pattern `**/*` matches everything.
//!
//! A pattern starting with `!` is negated: `!**/node_modules/**` keeps everything outside
//! the installed dependencies.

mod glob_filter;

pub use glob_filter::{GlobFilter, matches};
