//! The model-file generation strategy.

use accelerator_config::ModelGenerationConfiguration;
use accelerator_core::{ConstructType, ModelComponent, PropertyComponent};

/// A strategy that turns property descriptions into source fragments for
/// one model file, targeting a specific JSON mapping library.
///
/// The strategy exclusively owns its [`ModelComponent`]; the template
/// renderer only reads it through [`ModelFile::component`].
pub trait ModelFile {
    /// Bind the target file name and generation configuration.
    ///
    /// Adopts the configuration's construct type. No validation is done.
    fn set_info(&mut self, file_name: &str, configuration: ModelGenerationConfiguration);

    /// Mapping library module imported by the generated file
    fn module_name(&self) -> &'static str;

    /// Protocol the generated type conforms to, if any
    fn base_element_name(&self) -> Option<&'static str>;

    /// Template asset the renderer substitutes the fragments into
    fn main_body_template_file_name(&self) -> &'static str;

    /// Generate the fragments for one property and append them to the component.
    fn generate_and_add_components_for(&mut self, property: &PropertyComponent);

    fn file_name(&self) -> &str;

    fn construct_type(&self) -> ConstructType;

    fn configuration(&self) -> Option<&ModelGenerationConfiguration>;

    fn component(&self) -> &ModelComponent;

    /// JSON sample the model is generated from
    fn source_json(&self) -> &serde_json::Value;

    /// Process properties in order.
    fn generate_and_add_components_for_all<'a, I>(&mut self, properties: I)
    where
        Self: Sized,
        I: IntoIterator<Item = &'a PropertyComponent>,
    {
        for property in properties {
            self.generate_and_add_components_for(property);
        }
    }
}
