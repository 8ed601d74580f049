//! Core model types for the Swift JSON model generator.
//!
//! This crate provides the types shared between configuration loading and
//! the model-file generators: property descriptions, the fragment
//! accumulator and the Swift naming helpers.

mod model;
mod property;
mod types;
mod utils;

// Fragment accumulation
pub use model::{ModelComponent, PropertyFragments};
// Property descriptions
pub use property::{PropertyComponent, PropertyType};
// Fundamental types
pub use types::{ConstructType, VariableType};
// String utilities
pub use utils::{constant_name_for, swift_array_type, to_camel_case, to_pascal_case};
