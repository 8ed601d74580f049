//! Property descriptions produced by the JSON sample walker.

use serde::{Deserialize, Serialize};

/// Kind of a JSON property, inferred from the sample value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyType {
    /// Scalar (string, number, bool).
    ValueType,
    /// Array of scalars.
    ValueTypeArray,
    /// Nested object.
    ObjectType,
    /// Array of nested objects.
    ObjectTypeArray,
    /// Array without an element to infer the type from.
    EmptyArray,
    /// JSON `null`. Generators do not emit anything for it.
    NullType,
}

impl PropertyType {
    /// Get the name used in serialized property descriptions
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::ValueType => "valueType",
            PropertyType::ValueTypeArray => "valueTypeArray",
            PropertyType::ObjectType => "objectType",
            PropertyType::ObjectTypeArray => "objectTypeArray",
            PropertyType::EmptyArray => "emptyArray",
            PropertyType::NullType => "nullType",
        }
    }

    /// Whether the property holds an array.
    pub fn is_array(&self) -> bool {
        matches!(
            self,
            PropertyType::ValueTypeArray | PropertyType::ObjectTypeArray | PropertyType::EmptyArray
        )
    }

    /// Whether generators produce fragments for this kind.
    pub fn is_supported(&self) -> bool {
        !matches!(self, PropertyType::NullType)
    }
}

/// One field of the JSON object being modeled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyComponent {
    /// Swift field identifier
    pub name: String,
    /// Swift type name (element type for arrays)
    #[serde(rename = "type")]
    pub ty: String,
    /// Identifier of the generated constant holding `key`
    pub constant_name: String,
    /// Original JSON key
    pub key: String,
    pub property_type: PropertyType,
}

impl PropertyComponent {
    pub fn new(
        name: impl Into<String>,
        ty: impl Into<String>,
        constant_name: impl Into<String>,
        key: impl Into<String>,
        property_type: PropertyType,
    ) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            constant_name: constant_name.into(),
            key: key.into(),
            property_type,
        }
    }
}
