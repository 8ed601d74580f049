//! Shared naming helpers for Swift code generation.

/// Convert a JSON key to PascalCase (e.g., "user_name" -> "UserName")
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| c == '_' || c == '-' || c == ' ')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a JSON key to camelCase (e.g., "user_name" -> "userName")
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Name of the constant holding a JSON key (e.g., "user_name" -> "kUserNameKey")
pub fn constant_name_for(key: &str) -> String {
    format!("k{}Key", to_pascal_case(key))
}

/// Wrap a Swift type in array brackets (e.g., "Int" -> "[Int]")
pub fn swift_array_type(ty: &str) -> String {
    format!("[{ty}]")
}
