use accelerator_core::{PropertyComponent, PropertyType, VariableType, swift_array_type};

/// Element type recorded for arrays with no sample element.
///
/// Gloss initializers infer the extracted type from the declaration, so no
/// fragment prints it. Template renderers read it from
/// [`FieldShape::initializer_type`].
pub const EMPTY_ARRAY_ELEMENT_TYPE: &str = "object";

/// Which description helper renders a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionStyle {
    Primitive,
    PrimitiveArray,
    Object,
    ObjectArray,
}

/// How one property kind maps onto the fragment helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldShape<'a> {
    /// Element type the JSON value is extracted as. Not rendered into the
    /// Gloss fragments; kept for renderers that annotate extractions.
    pub initializer_type: &'a str,
    /// Element type used by the declaration, decoder and encoder
    pub element_type: &'a str,
    pub is_array: bool,
    pub description: DescriptionStyle,
}

impl<'a> FieldShape<'a> {
    /// Shape for a property, or `None` for kinds that produce no fragments.
    pub fn of(property: &'a PropertyComponent) -> Option<Self> {
        let ty = property.ty.as_str();
        let shape = match property.property_type {
            PropertyType::ValueType => Self::new(ty, ty, false, DescriptionStyle::Primitive),
            PropertyType::ValueTypeArray => {
                Self::new(ty, ty, true, DescriptionStyle::PrimitiveArray)
            }
            PropertyType::ObjectType => Self::new(ty, ty, false, DescriptionStyle::Object),
            PropertyType::ObjectTypeArray => {
                Self::new(ty, ty, true, DescriptionStyle::ObjectArray)
            }
            PropertyType::EmptyArray => Self::new(
                EMPTY_ARRAY_ELEMENT_TYPE,
                VariableType::Object.as_str(),
                true,
                DescriptionStyle::PrimitiveArray,
            ),
            // null values carry no type information
            PropertyType::NullType => return None,
        };
        Some(shape)
    }

    fn new(
        initializer_type: &'a str,
        element_type: &'a str,
        is_array: bool,
        description: DescriptionStyle,
    ) -> Self {
        Self {
            initializer_type,
            element_type,
            is_array,
            description,
        }
    }

    /// Swift type of the declared field, without the optional marker.
    pub fn declaration_type(&self) -> String {
        if self.is_array {
            swift_array_type(self.element_type)
        } else {
            self.element_type.to_string()
        }
    }
}
