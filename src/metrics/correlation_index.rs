use crate::trace::{CheckKind, TraceEvent, TypeId};
use std::collections::HashMap;

const LOG_TARGET: &str = "    index";

/// Lookup from a check event's subject id to the event itself.
#[derive(Debug, Default)]
pub struct CorrelationIndex<'a> {
    by_subject: HashMap<TypeId, &'a TraceEvent>,
}

impl<'a> CorrelationIndex<'a> {
    /// Index the check-phase events of an allow-listed kind.
    ///
    /// The trace is scanned once in input order. When several events share a subject id,
    /// the last one wins.
    #[must_use]
    pub fn build(trace: &'a [TraceEvent], kinds: &[CheckKind]) -> Self {
        let mut by_subject = HashMap::new();
        let mut unkeyed = 0_usize;

        for event in trace {
            if !event.is_check_phase() {
                continue;
            }

            let Some(kind) = event.check_kind() else {
                continue;
            };

            if !kinds.contains(&kind) {
                continue;
            }

            match event.subject_id() {
                Some(id) => {
                    let _ = by_subject.insert(id, event);
                }
                None => unkeyed += 1,
            }
        }

        log::debug!(target: LOG_TARGET, "Indexed {} check subjects, skipped {unkeyed} checks without a subject id", by_subject.len());

        Self { by_subject }
    }

    #[must_use]
    pub fn get(&self, id: TypeId) -> Option<&'a TraceEvent> {
        self.by_subject.get(&id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_subject.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_subject.is_empty()
    }
}
