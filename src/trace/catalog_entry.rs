use super::TypeId;
use serde::{Deserialize, Serialize};

/// One descriptor of the compiler's type catalog.
///
/// The catalog has no explicit tag, so the variant is picked by shape: entries with a
/// `symbolName` are symbols, entries with an `intrinsicName` are intrinsics, and anything
/// else (anonymous object types, unions, literals, ...) is kept as [`OtherType`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CatalogEntry {
    Symbol(Symbol),
    Intrinsic(Intrinsic),
    Other(OtherType),
}

impl CatalogEntry {
    #[must_use]
    pub const fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Self::Symbol(symbol) => Some(symbol),
            Self::Intrinsic(_) | Self::Other(_) => None,
        }
    }
}

/// ```json
/// {"id":1,"intrinsicName":"any","flags":["Any"]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Intrinsic {
    pub id: TypeId,
    pub intrinsic_name: String,

    #[serde(default)]
    pub flags: Vec<String>,
}

/// ```json
/// {"id":56,"symbolName":"IArguments","recursionId":1,"firstDeclaration":{"path":"/p/lib.es5.d.ts","start":{"line":386,"character":2},"end":{"line":392,"character":2}},"flags":["Object"]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    pub id: TypeId,
    pub symbol_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recursion_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instantiated_type: Option<TypeId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_declaration: Option<Declaration>,

    #[serde(default)]
    pub flags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OtherType {
    pub id: TypeId,
}

/// Where a symbol was first declared.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Declaration {
    /// Absolute path of the declaring file
    pub path: String,
    pub start: Position,
    pub end: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}
