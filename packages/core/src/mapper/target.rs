//! Target type descriptors

use std::fmt;

/// Shape a mapped value is converted to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetType {
    /// Identity, the value is returned unchanged
    Json,
    Bool,
    /// Signed 64-bit integer
    Integer,
    /// 64-bit float
    Float,
    /// String; composite values become their JSON text
    Text,
    /// Array whose elements are each converted to the inner type
    List(Box<TargetType>),
    /// Object whose member values are each converted to the inner type
    Map(Box<TargetType>),
}

impl TargetType {
    #[must_use]
    pub fn list_of(element: TargetType) -> Self {
        TargetType::List(Box::new(element))
    }

    #[must_use]
    pub fn map_of(value: TargetType) -> Self {
        TargetType::Map(Box::new(value))
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetType::Json => f.write_str("json"),
            TargetType::Bool => f.write_str("bool"),
            TargetType::Integer => f.write_str("integer"),
            TargetType::Float => f.write_str("float"),
            TargetType::Text => f.write_str("text"),
            TargetType::List(inner) => write!(f, "list<{inner}>"),
            TargetType::Map(inner) => write!(f, "map<{inner}>"),
        }
    }
}
