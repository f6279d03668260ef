use super::{CorrelationIndex, Metric};
use crate::config::Config;
use crate::trace::{CatalogEntry, TraceEvent};

const LOG_TARGET: &str = "  extract";

/// Pair every declared catalog symbol with the check event that measured it.
///
/// Entries that are not symbols, symbols without a first declaration, and symbols no
/// allow-listed check event refers to are skipped. The result follows catalog order.
#[must_use]
pub fn extract<'a>(trace: &'a [TraceEvent], catalog: &'a [CatalogEntry], config: &Config) -> Vec<Metric<'a>> {
    let index = CorrelationIndex::build(trace, &config.check_kinds);

    let mut metrics = Vec::new();
    let mut undeclared = 0_usize;
    let mut unmatched = 0_usize;

    for entry in catalog {
        let Some(symbol) = entry.as_symbol() else {
            continue;
        };

        let Some(declaration) = &symbol.first_declaration else {
            undeclared += 1;
            continue;
        };

        let Some(check) = index.get(symbol.id) else {
            unmatched += 1;
            continue;
        };

        metrics.push(Metric {
            symbol,
            declaration,
            check,
            is_dependency: declaration.path.contains(&config.dependency_marker),
        });
    }

    log::info!(
        target: LOG_TARGET,
        "Extracted {} metrics ({undeclared} symbols without a declaration, {unmatched} without a matching check)",
        metrics.len()
    );

    metrics
}
