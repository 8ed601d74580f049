//! Accumulator for the generated source fragments of one model file.

/// The six fragments generated for a single property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyFragments {
    pub string_constant: String,
    pub declaration: String,
    pub initialiser: String,
    pub description: String,
    pub decoder: String,
    pub encoder: String,
}

/// Ordered fragment sequences for one model file.
///
/// Fragments at the same index across all six sequences belong to the same
/// property. [`ModelComponent::push`] is the only way to add fragments, so
/// the sequences always have equal length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelComponent {
    string_constants: Vec<String>,
    declarations: Vec<String>,
    initialisers: Vec<String>,
    description: Vec<String>,
    decoders: Vec<String>,
    encoders: Vec<String>,
}

impl ModelComponent {
    /// Create an empty component.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the fragments of one property to every sequence.
    pub fn push(&mut self, fragments: PropertyFragments) {
        self.string_constants.push(fragments.string_constant);
        self.declarations.push(fragments.declaration);
        self.initialisers.push(fragments.initialiser);
        self.description.push(fragments.description);
        self.decoders.push(fragments.decoder);
        self.encoders.push(fragments.encoder);
    }

    /// Number of properties recorded.
    pub fn len(&self) -> usize {
        self.string_constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check that all six sequences have the same length.
    pub fn is_aligned(&self) -> bool {
        let len = self.len();
        [
            &self.declarations,
            &self.initialisers,
            &self.description,
            &self.decoders,
            &self.encoders,
        ]
        .iter()
        .all(|seq| seq.len() == len)
    }

    /// Get the fragments recorded for the property at `index`.
    pub fn get(&self, index: usize) -> Option<PropertyFragments> {
        Some(PropertyFragments {
            string_constant: self.string_constants.get(index)?.clone(),
            declaration: self.declarations.get(index)?.clone(),
            initialiser: self.initialisers.get(index)?.clone(),
            description: self.description.get(index)?.clone(),
            decoder: self.decoders.get(index)?.clone(),
            encoder: self.encoders.get(index)?.clone(),
        })
    }

    pub fn string_constants(&self) -> &[String] {
        &self.string_constants
    }

    pub fn declarations(&self) -> &[String] {
        &self.declarations
    }

    pub fn initialisers(&self) -> &[String] {
        &self.initialisers
    }

    pub fn description(&self) -> &[String] {
        &self.description
    }

    pub fn decoders(&self) -> &[String] {
        &self.decoders
    }

    pub fn encoders(&self) -> &[String] {
        &self.encoders
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments(tag: &str) -> PropertyFragments {
        PropertyFragments {
            string_constant: format!("constant {tag}"),
            declaration: format!("declaration {tag}"),
            initialiser: format!("initialiser {tag}"),
            description: format!("description {tag}"),
            decoder: format!("decoder {tag}"),
            encoder: format!("encoder {tag}"),
        }
    }

    #[test]
    fn test_new_component_is_empty() {
        let component = ModelComponent::new();
        assert!(component.is_empty());
        assert!(component.is_aligned());
        assert_eq!(component.get(0), None);
    }

    #[test]
    fn test_push_appends_to_every_sequence() {
        let mut component = ModelComponent::new();
        component.push(fragments("a"));
        component.push(fragments("b"));

        assert_eq!(component.len(), 2);
        assert!(component.is_aligned());
        assert_eq!(component.string_constants(), ["constant a", "constant b"]);
        assert_eq!(component.declarations(), ["declaration a", "declaration b"]);
        assert_eq!(component.initialisers(), ["initialiser a", "initialiser b"]);
        assert_eq!(component.description(), ["description a", "description b"]);
        assert_eq!(component.decoders(), ["decoder a", "decoder b"]);
        assert_eq!(component.encoders(), ["encoder a", "encoder b"]);
    }

    #[test]
    fn test_get_returns_fragments_by_index() {
        let mut component = ModelComponent::new();
        component.push(fragments("a"));
        component.push(fragments("b"));

        assert_eq!(component.get(1), Some(fragments("b")));
        assert_eq!(component.get(2), None);
    }
}
