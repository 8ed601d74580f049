//! Fragment helpers shared by every model-file generator.
//!
//! Each function is a pure function of the property's name, type and
//! constant name. Library-specific generators only provide their own
//! initializers and reuse everything else.

use accelerator_core::{VariableType, swift_array_type};

/// Escape a value for use inside a Swift string literal.
pub fn escape_swift_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// `static let kTitleKey = "title"`
///
/// Only the last dot-separated segment of `constant_name` is declared, so a
/// qualified name such as `SerializationKeys.title` declares `title`.
pub fn gen_string_constant(constant_name: &str, key: &str) -> String {
    let name = constant_name.rsplit('.').next().unwrap_or(constant_name);
    format!("static let {} = \"{}\"", name, escape_swift_string(key))
}

/// `public var title: String?`, or `[String]?` for arrays.
pub fn gen_variable_declaration(name: &str, ty: &str, is_array: bool) -> String {
    if is_array {
        gen_primitive_variable_declaration(name, &swift_array_type(ty))
    } else {
        gen_primitive_variable_declaration(name, ty)
    }
}

pub fn gen_primitive_variable_declaration(name: &str, ty: &str) -> String {
    format!("public var {name}: {ty}?")
}

/// `Bool` fields are stored unconditionally; everything else only when present.
pub fn gen_description_for_primitive(name: &str, ty: &str, constant_name: &str) -> String {
    if VariableType::is_bool(ty) {
        format!("dictionary[{constant_name}] = {name}")
    } else {
        format!("if let value = {name} {{ dictionary[{constant_name}] = value }}")
    }
}

pub fn gen_description_for_primitive_array(name: &str, constant_name: &str) -> String {
    format!("if let value = {name} {{ dictionary[{constant_name}] = value }}")
}

pub fn gen_description_for_object(name: &str, constant_name: &str) -> String {
    format!(
        "if let value = {name} {{ dictionary[{constant_name}] = value.dictionaryRepresentation() }}"
    )
}

pub fn gen_description_for_object_array(name: &str, constant_name: &str) -> String {
    format!(
        "if let value = {name} {{ dictionary[{constant_name}] = value.map {{ $0.dictionaryRepresentation() }} }}"
    )
}

/// NSCoding decoder line.
pub fn gen_decoder(name: &str, ty: &str, constant_name: &str, is_array: bool) -> String {
    if is_array {
        let final_type = swift_array_type(ty);
        return format!(
            "self.{name} = aDecoder.decodeObject(forKey: {constant_name}) as? {final_type}"
        );
    }
    if VariableType::is_bool(ty) {
        return format!("self.{name} = aDecoder.decodeBool(forKey: {constant_name})");
    }
    format!("self.{name} = aDecoder.decodeObject(forKey: {constant_name}) as? {ty}")
}

/// NSCoding encoder line.
pub fn gen_encoder(name: &str, constant_name: &str) -> String {
    format!("aCoder.encode({name}, forKey: {constant_name})")
}
