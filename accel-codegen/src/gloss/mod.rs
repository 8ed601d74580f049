//! Model-file generator for the Gloss mapping library.
//!
//! One generator covers both Gloss templates. The [`InitializerMode`]
//! picks the template and decides whether a missing field fails
//! initialization.

mod initializer;
mod shape;

use accelerator_config::{InitializerMode, ModelGenerationConfiguration};
use accelerator_core::{ConstructType, ModelComponent, PropertyComponent, PropertyFragments};
pub use initializer::{gen_initializer, gen_optional_initializer, gen_required_initializer};
pub use shape::{DescriptionStyle, EMPTY_ARRAY_ELEMENT_TYPE, FieldShape};
use tracing::{debug, trace};

use crate::{
    fragments::{
        gen_decoder, gen_description_for_object, gen_description_for_object_array,
        gen_description_for_primitive, gen_description_for_primitive_array, gen_encoder,
        gen_string_constant, gen_variable_declaration,
    },
    model_file::ModelFile,
};

/// Template whose initializers never fail.
pub const GLOSS_JSON_TEMPLATE: &str = "GlossJSONTemplate";
/// Template with failable initializers for required fields.
pub const GLOSS_TEMPLATE: &str = "GlossTemplate";

/// Generates Gloss `Decodable` model fragments.
#[derive(Debug, Clone)]
pub struct GlossModelFile {
    file_name: String,
    construct_type: ConstructType,
    mode: InitializerMode,
    component: ModelComponent,
    source_json: serde_json::Value,
    configuration: Option<ModelGenerationConfiguration>,
}

impl GlossModelFile {
    /// Create an unbound generator producing best-effort initializers.
    pub fn new() -> Self {
        Self::with_mode(InitializerMode::Optional)
    }

    pub fn with_mode(mode: InitializerMode) -> Self {
        Self {
            file_name: String::new(),
            construct_type: ConstructType::Struct,
            mode,
            component: ModelComponent::new(),
            source_json: serde_json::Value::Array(Vec::new()),
            configuration: None,
        }
    }

    /// Attach the JSON sample the model is generated from.
    pub fn with_source_json(mut self, source_json: serde_json::Value) -> Self {
        self.source_json = source_json;
        self
    }

    pub fn mode(&self) -> InitializerMode {
        self.mode
    }

    /// Hand the accumulated fragments to the renderer.
    pub fn into_component(self) -> ModelComponent {
        self.component
    }

    fn gen_description(&self, property: &PropertyComponent, shape: &FieldShape<'_>) -> String {
        let name = &property.name;
        let constant_name = &property.constant_name;
        match shape.description {
            DescriptionStyle::Primitive => {
                gen_description_for_primitive(name, shape.element_type, constant_name)
            }
            DescriptionStyle::PrimitiveArray => {
                gen_description_for_primitive_array(name, constant_name)
            }
            DescriptionStyle::Object => gen_description_for_object(name, constant_name),
            DescriptionStyle::ObjectArray => gen_description_for_object_array(name, constant_name),
        }
    }
}

impl Default for GlossModelFile {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelFile for GlossModelFile {
    fn set_info(&mut self, file_name: &str, configuration: ModelGenerationConfiguration) {
        trace!(
            file_name,
            construct_type = configuration.construct_type.keyword(),
            mode = configuration.initializer_mode.as_str(),
            "binding gloss model file"
        );
        self.file_name = file_name.to_string();
        self.construct_type = configuration.construct_type;
        self.mode = configuration.initializer_mode;
        self.configuration = Some(configuration);
    }

    fn module_name(&self) -> &'static str {
        "Gloss"
    }

    fn base_element_name(&self) -> Option<&'static str> {
        Some("Decodable")
    }

    fn main_body_template_file_name(&self) -> &'static str {
        match self.mode {
            InitializerMode::Optional => GLOSS_JSON_TEMPLATE,
            InitializerMode::Required => GLOSS_TEMPLATE,
        }
    }

    fn generate_and_add_components_for(&mut self, property: &PropertyComponent) {
        let Some(shape) = FieldShape::of(property) else {
            debug!(
                property = %property.name,
                kind = property.property_type.as_str(),
                "skipping property without fragments"
            );
            return;
        };

        debug!(
            property = %property.name,
            kind = property.property_type.as_str(),
            file_name = %self.file_name,
            "generating gloss fragments"
        );

        let name = &property.name;
        let constant_name = &property.constant_name;
        let fragments = PropertyFragments {
            string_constant: gen_string_constant(constant_name, &property.key),
            declaration: gen_variable_declaration(name, shape.element_type, shape.is_array),
            initialiser: gen_initializer(self.mode, &self.file_name, name, constant_name, &shape),
            description: self.gen_description(property, &shape),
            decoder: gen_decoder(name, shape.element_type, constant_name, shape.is_array),
            encoder: gen_encoder(name, constant_name),
        };
        self.component.push(fragments);
    }

    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn construct_type(&self) -> ConstructType {
        self.construct_type
    }

    fn configuration(&self) -> Option<&ModelGenerationConfiguration> {
        self.configuration.as_ref()
    }

    fn component(&self) -> &ModelComponent {
        &self.component
    }

    fn source_json(&self) -> &serde_json::Value {
        &self.source_json
    }
}
