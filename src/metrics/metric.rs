use crate::trace::{Declaration, Position, Symbol, TraceEvent};

/// A declared catalog symbol paired with the check event that measured it.
#[derive(Debug, Clone, Copy)]
pub struct Metric<'a> {
    pub symbol: &'a Symbol,
    pub declaration: &'a Declaration,
    pub check: &'a TraceEvent,

    /// Whether the declaration lives under a third-party library directory
    pub is_dependency: bool,
}

impl<'a> Metric<'a> {
    #[must_use]
    pub fn name(&self) -> &'a str {
        &self.symbol.symbol_name
    }

    #[must_use]
    pub fn path(&self) -> &'a str {
        &self.declaration.path
    }

    #[must_use]
    pub const fn start(&self) -> Position {
        self.declaration.start
    }

    #[must_use]
    pub fn duration_us(&self) -> f64 {
        self.check.duration_us()
    }

    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.check.duration_ms()
    }
}
