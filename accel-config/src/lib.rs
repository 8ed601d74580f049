//! Generation configuration for the Swift JSON model generator.
//!
//! The configuration is read from a TOML file:
//!
//! ```toml
//! file_path = "Sources/Models"
//! base_class_name = "Person"
//! construct_type = "class"
//! initializer_mode = "required"
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod configuration;
mod error;
mod validate;

use std::path::Path;

pub use configuration::{InitializerMode, ModelGenerationConfiguration};
pub use error::{Error, Result};
use validate::ParseContext;

/// Default filename used in diagnostics when parsing from a string
pub const DEFAULT_FILENAME: &str = "accelerator.toml";

impl ModelGenerationConfiguration {
    /// Validate the configuration after parsing
    pub fn validate(&self, src: &str, filename: &str) -> Result<()> {
        let ctx = ParseContext::new(src, filename);

        if self.file_path.trim().is_empty() {
            return Err(ctx.validation_error("file_path cannot be empty", "file_path"));
        }

        ctx.validate_name(&self.base_class_name, "base class name")?;

        if let Some(prefix) = &self.prefix {
            ctx.validate_name(prefix, "prefix")?;
        }

        Ok(())
    }
}

/// Parse a configuration file from the given path
pub fn parse_file(path: impl AsRef<Path>) -> Result<ModelGenerationConfiguration> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    let filename = path.display().to_string();
    parse_str_with_filename(&content, &filename)
}

/// Parse a configuration from a string (uses "accelerator.toml" as default filename)
pub fn parse_str(content: &str) -> Result<ModelGenerationConfiguration> {
    parse_str_with_filename(content, DEFAULT_FILENAME)
}

/// Parse a configuration from a string with a custom filename for error reporting
pub fn parse_str_with_filename(
    content: &str,
    filename: &str,
) -> Result<ModelGenerationConfiguration> {
    let config: ModelGenerationConfiguration =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;

    config.validate(content, filename)?;
    Ok(config)
}
