use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Identifier of a type catalog entry.
pub type TypeId = u64;

/// Trace categories emitted while the checker is running.
pub const CHECK_CATEGORIES: [&str; 2] = ["check", "checkTypes"];

/// Check operations that may be correlated with catalog symbols.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Deserialize, Serialize, Display, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
#[value(rename_all = "camelCase")]
pub enum CheckKind {
    /// Structural type-relation check between a source and a target type
    StructuredTypeRelatedTo,

    /// Expression check
    CheckExpression,

    /// Variable declaration check
    CheckVariableDeclaration,
}

impl CheckKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// One record of the compiler's execution trace.
///
/// ```json
/// {"pid":1,"tid":1,"ph":"X","cat":"check","ts":8021808.15,"name":"structuredTypeRelatedTo","dur":52.45,"args":{"sourceId":15179,"targetId":11404}}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TraceEvent {
    #[serde(default)]
    pub cat: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub ph: String,

    /// Start timestamp in microseconds
    #[serde(default)]
    pub ts: f64,

    /// Elapsed time in microseconds, present on completed events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dur: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<TraceArgs>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<TypeId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<TypeId>,
}

impl TraceEvent {
    /// Whether the event was recorded during the check phase.
    #[must_use]
    pub fn is_check_phase(&self) -> bool {
        CHECK_CATEGORIES.contains(&self.cat.as_str())
    }

    /// The check operation this event measured, if it is one we know about.
    #[must_use]
    pub fn check_kind(&self) -> Option<CheckKind> {
        self.name.parse().ok()
    }

    /// The catalog id of the type being checked.
    #[must_use]
    pub fn subject_id(&self) -> Option<TypeId> {
        self.args.as_ref().and_then(|args| args.source_id)
    }

    #[must_use]
    pub fn target_id(&self) -> Option<TypeId> {
        self.args.as_ref().and_then(|args| args.target_id)
    }

    #[must_use]
    pub fn duration_us(&self) -> f64 {
        self.dur.unwrap_or(0.0)
    }

    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.duration_us() / 1000.0
    }
}
