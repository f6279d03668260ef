//! Fixture builders shared by unit tests.

use crate::trace::{CatalogEntry, Declaration, Intrinsic, Position, Symbol, TraceArgs, TraceEvent, TypeId};

/// A completed `structuredTypeRelatedTo` check with a duration in microseconds.
pub fn check(source_id: TypeId, target_id: TypeId, dur: f64) -> TraceEvent {
    TraceEvent {
        cat: "check".to_string(),
        name: "structuredTypeRelatedTo".to_string(),
        ph: "X".to_string(),
        ts: 0.0,
        dur: Some(dur),
        args: Some(TraceArgs {
            source_id: Some(source_id),
            target_id: Some(target_id),
        }),
    }
}

pub fn symbol(id: TypeId, name: &str, path: &str, line: u32, character: u32) -> CatalogEntry {
    CatalogEntry::Symbol(Symbol {
        id,
        symbol_name: name.to_string(),
        recursion_id: None,
        instantiated_type: None,
        first_declaration: Some(Declaration {
            path: path.to_string(),
            start: Position { line, character },
            end: Position {
                line,
                character: character + u32::try_from(name.len()).unwrap_or(0),
            },
        }),
        flags: Vec::new(),
        display: None,
    })
}

pub fn undeclared_symbol(id: TypeId, name: &str) -> CatalogEntry {
    CatalogEntry::Symbol(Symbol {
        id,
        symbol_name: name.to_string(),
        recursion_id: None,
        instantiated_type: None,
        first_declaration: None,
        flags: Vec::new(),
        display: None,
    })
}

pub fn intrinsic(id: TypeId, name: &str) -> CatalogEntry {
    CatalogEntry::Intrinsic(Intrinsic {
        id,
        intrinsic_name: name.to_string(),
        flags: Vec::new(),
    })
}
