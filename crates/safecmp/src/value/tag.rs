use crate::value::Value;
use derive_more::Display;

///
/// ValueTag
///
/// Variant tag of a `Value`.
///
/// IMPORTANT:
/// `identity()` names are part of the observable fallback order. The numeric
/// names (Bool, Float, Int) must stay adjacent: no other name may sort
/// between them, or mixed-type sorts stop being transitive.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum ValueTag {
    Blob,
    Bool,
    Float,
    Int,
    List,
    Map,
    Null,
    Object,
    Text,
    Tuple,
    Uint,
}

impl ValueTag {
    /// Stable human-readable type label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blob => "Blob",
            Self::Bool => "Bool",
            Self::Float => "Float",
            Self::Int => "Int",
            Self::List => "List",
            Self::Map => "Map",
            Self::Null => "Null",
            Self::Object => "Object",
            Self::Text => "Text",
            Self::Tuple => "Tuple",
            Self::Uint => "Uint",
        }
    }

    /// Tag whose name and id identify this variant's type in the fallback
    /// order. `Uint` is the same integer type as `Int`, only wider.
    #[must_use]
    pub const fn identity(self) -> Self {
        match self {
            Self::Uint => Self::Int,
            other => other,
        }
    }
}

#[must_use]
pub(super) const fn tag_of(value: &Value) -> ValueTag {
    match value {
        Value::Blob(_) => ValueTag::Blob,
        Value::Bool(_) => ValueTag::Bool,
        Value::Float(_) => ValueTag::Float,
        Value::Int(_) => ValueTag::Int,
        Value::List(_) => ValueTag::List,
        Value::Map(_) => ValueTag::Map,
        Value::Null => ValueTag::Null,
        Value::Object(_) => ValueTag::Object,
        Value::Text(_) => ValueTag::Text,
        Value::Tuple(_) => ValueTag::Tuple,
        Value::Uint(_) => ValueTag::Uint,
    }
}
