//! Gloss `init?(json:)` statements.

use accelerator_config::InitializerMode;

use super::FieldShape;
use crate::builder::CodeBuilder;

/// Initializer statement for one field in the given mode.
pub fn gen_initializer(
    mode: InitializerMode,
    file_name: &str,
    name: &str,
    constant_name: &str,
    shape: &FieldShape<'_>,
) -> String {
    match mode {
        InitializerMode::Optional => gen_optional_initializer(name, constant_name),
        InitializerMode::Required => {
            gen_required_initializer(file_name, name, &shape.declaration_type(), constant_name)
        }
    }
}

/// `title = kTitleKey <~~ json`
///
/// A missing or mistyped value leaves the field `nil`.
pub fn gen_optional_initializer(name: &str, constant_name: &str) -> String {
    format!("{name} = {constant_name} <~~ json")
}

/// Guarded extraction that fails the initializer when the value is missing
/// or has the wrong type.
pub fn gen_required_initializer(
    file_name: &str,
    name: &str,
    ty: &str,
    constant_name: &str,
) -> String {
    let guard = format!("guard let {name}: {ty} = {constant_name} <~~ json else {{");
    let diagnostic = format!(
        "print(\"Error: (In `{file_name}`) Key `{name}` not found or of wrong type.\")"
    );

    CodeBuilder::swift()
        .block_with_close(&guard, "}", |b| b.line(&diagnostic).line("return nil"))
        .line(&format!("self.{name} = {name}"))
        .build_fragment()
}
