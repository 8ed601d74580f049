use serde::{Deserialize, Serialize};

/// Kind of Swift construct a model file declares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstructType {
    /// Value type (`struct`)
    #[default]
    Struct,
    /// Reference type (`class`)
    Class,
}

impl ConstructType {
    /// Get the Swift keyword introducing the type
    pub fn keyword(&self) -> &'static str {
        match self {
            ConstructType::Struct => "struct",
            ConstructType::Class => "class",
        }
    }
}

/// Swift type names assigned to JSON values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableType {
    String,
    Int,
    Float,
    Double,
    Bool,
    Array,
    Object,
    Null,
}

impl VariableType {
    /// Get the Swift type name
    pub fn as_str(&self) -> &'static str {
        match self {
            VariableType::String => "String",
            VariableType::Int => "Int",
            VariableType::Float => "Float",
            VariableType::Double => "Double",
            VariableType::Bool => "Bool",
            VariableType::Array => "[]",
            VariableType::Object | VariableType::Null => "Any",
        }
    }

    /// Check whether a Swift type name is `Bool`.
    pub fn is_bool(ty: &str) -> bool {
        ty == VariableType::Bool.as_str()
    }
}
