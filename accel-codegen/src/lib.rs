//! Swift model-file generators for the JSON model generator.
//!
//! A [`ModelFile`] strategy receives the properties of one JSON object and
//! fills a [`ModelComponent`](accelerator_core::ModelComponent) with the
//! source fragments a template renderer later assembles into a Swift type.
//!
//! # Module Organization
//!
//! - [`builder`] - Indentation-aware builder for multi-line fragments
//! - [`fragments`] - Fragment helpers shared by all mapping libraries
//! - [`gloss`] - Generator for the Gloss mapping library

pub mod builder;
pub mod fragments;
pub mod gloss;
mod model_file;

pub use gloss::{FieldShape, GlossModelFile};
pub use model_file::ModelFile;
