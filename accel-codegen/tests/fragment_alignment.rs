//! Ordering and alignment guarantees of the fragment accumulator.

use accelerator_codegen::{GlossModelFile, ModelFile};
use accelerator_config::{InitializerMode, ModelGenerationConfiguration};
use accelerator_core::{PropertyComponent, PropertyType, constant_name_for};

const ALL_KINDS: [PropertyType; 6] = [
    PropertyType::ValueType,
    PropertyType::ValueTypeArray,
    PropertyType::ObjectType,
    PropertyType::ObjectTypeArray,
    PropertyType::EmptyArray,
    PropertyType::NullType,
];

fn property(key: &str, ty: &str, kind: PropertyType) -> PropertyComponent {
    PropertyComponent::new(key, ty, constant_name_for(key), key, kind)
}

fn sequence_lengths(model: &GlossModelFile) -> [usize; 6] {
    let component = model.component();
    [
        component.string_constants().len(),
        component.declarations().len(),
        component.initialisers().len(),
        component.description().len(),
        component.decoders().len(),
        component.encoders().len(),
    ]
}

#[test]
fn test_each_supported_property_adds_one_fragment_per_sequence() {
    for mode in [InitializerMode::Optional, InitializerMode::Required] {
        let mut model = GlossModelFile::with_mode(mode);
        let mut expected = 0;

        for (i, kind) in ALL_KINDS.iter().cycle().take(18).enumerate() {
            model.generate_and_add_components_for(&property(&format!("field{i}"), "Int", *kind));
            if kind.is_supported() {
                expected += 1;
            }

            assert_eq!(sequence_lengths(&model), [expected; 6], "{mode:?} {kind:?}");
            assert!(model.component().is_aligned());
        }

        assert_eq!(model.component().len(), 15);
    }
}

#[test]
fn test_null_property_changes_nothing() {
    let mut model = GlossModelFile::new();
    model.generate_and_add_components_for(&property("name", "String", PropertyType::ValueType));
    let before = model.component().clone();

    model.generate_and_add_components_for(&property("removed", "Any", PropertyType::NullType));

    assert_eq!(model.component(), &before);
}

#[test]
fn test_earlier_fragments_are_never_rewritten() {
    let mut model = GlossModelFile::new();
    model.generate_and_add_components_for(&property("first", "String", PropertyType::ValueType));
    let first = model.component().get(0).unwrap();

    model.generate_and_add_components_for(&property("second", "Item", PropertyType::ObjectTypeArray));

    assert_eq!(model.component().get(0), Some(first));
    assert_eq!(
        model.component().string_constants(),
        [
            "static let kFirstKey = \"first\"",
            "static let kSecondKey = \"second\""
        ]
    );
}

#[test]
fn test_array_marker_matches_kind() {
    let mut model = GlossModelFile::new();
    for kind in ALL_KINDS {
        model.generate_and_add_components_for(&property("value", "Thing", kind));
    }

    let declarations = model.component().declarations();
    assert_eq!(
        declarations,
        [
            "public var value: Thing?",
            "public var value: [Thing]?",
            "public var value: Thing?",
            "public var value: [Thing]?",
            "public var value: [Any]?",
        ]
    );
}

#[test]
fn test_empty_array_ignores_element_type() {
    for ty in ["", "String", "Whatever"] {
        let mut model = GlossModelFile::new();
        model.generate_and_add_components_for(&property("extras", ty, PropertyType::EmptyArray));

        let fragments = model.component().get(0).unwrap();
        assert_eq!(fragments.declaration, "public var extras: [Any]?");
        assert_eq!(
            fragments.decoder,
            "self.extras = aDecoder.decodeObject(forKey: kExtrasKey) as? [Any]"
        );
    }
}

#[test]
fn test_bool_array_decodes_as_array() {
    let mut model = GlossModelFile::new();
    model.generate_and_add_components_for(&property("flags", "Bool", PropertyType::ValueTypeArray));

    let fragments = model.component().get(0).unwrap();
    assert_eq!(fragments.declaration, "public var flags: [Bool]?");
    assert_eq!(
        fragments.decoder,
        "self.flags = aDecoder.decodeObject(forKey: kFlagsKey) as? [Bool]"
    );
    assert_eq!(
        fragments.description,
        "if let value = flags { dictionary[kFlagsKey] = value }"
    );
}

#[test]
fn test_bool_description_is_unconditional() {
    let mut model = GlossModelFile::new();
    model.generate_and_add_components_for(&property("enabled", "Bool", PropertyType::ValueType));
    model.generate_and_add_components_for(&property("count", "Int", PropertyType::ValueType));

    assert_eq!(
        model.component().description(),
        [
            "dictionary[kEnabledKey] = enabled",
            "if let value = count { dictionary[kCountKey] = value }"
        ]
    );
}

#[test]
fn test_required_title_example() {
    let mut model = GlossModelFile::new();
    model.set_info(
        "Book",
        ModelGenerationConfiguration::new("Models", "Book")
            .with_initializer_mode(InitializerMode::Required),
    );
    model.generate_and_add_components_for(&PropertyComponent::new(
        "title",
        "String",
        "kTitleKey",
        "title",
        PropertyType::ValueType,
    ));

    let initialiser = &model.component().initialisers()[0];
    assert!(initialiser.contains("kTitleKey"));
    assert!(initialiser.starts_with("guard let"));
    assert!(initialiser.contains("Book"));
    assert!(initialiser.contains("title"));
    assert!(initialiser.contains("return nil"));
}

#[test]
fn test_source_json_is_kept() {
    let sample = serde_json::json!({ "title": "Dune" });
    let model = GlossModelFile::new().with_source_json(sample.clone());
    assert_eq!(model.source_json(), &sample);
}
