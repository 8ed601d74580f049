use accelerator_core::ConstructType;
use serde::{Deserialize, Serialize};

/// How generated initializers treat a missing or mistyped JSON field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitializerMode {
    /// Best effort: the field is left `nil` and initialization succeeds.
    #[default]
    Optional,
    /// Fail fast: a diagnostic is printed and the failable initializer returns `nil`.
    Required,
}

impl InitializerMode {
    /// Get the name used in the configuration file
    pub fn as_str(&self) -> &'static str {
        match self {
            InitializerMode::Optional => "optional",
            InitializerMode::Required => "required",
        }
    }
}

/// Options for one model generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelGenerationConfiguration {
    /// Directory the generated files are written to
    pub file_path: String,
    /// Name of the root model type
    pub base_class_name: String,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    /// Prefix prepended to every generated type name
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub construct_type: ConstructType,
    #[serde(default)]
    pub initializer_mode: InitializerMode,
    #[serde(default, rename = "support_nscoding")]
    pub support_ns_coding: bool,
    /// Mark generated classes `final`
    #[serde(default)]
    pub is_final_required: bool,
    /// Emit the file header comment
    #[serde(default = "default_true")]
    pub is_header_included: bool,
}

fn default_true() -> bool {
    true
}

impl ModelGenerationConfiguration {
    pub fn new(file_path: impl Into<String>, base_class_name: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            base_class_name: base_class_name.into(),
            author_name: None,
            company_name: None,
            prefix: None,
            construct_type: ConstructType::default(),
            initializer_mode: InitializerMode::default(),
            support_ns_coding: false,
            is_final_required: false,
            is_header_included: true,
        }
    }

    pub fn with_author_name(mut self, author_name: impl Into<String>) -> Self {
        self.author_name = Some(author_name.into());
        self
    }

    pub fn with_company_name(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = Some(company_name.into());
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_construct_type(mut self, construct_type: ConstructType) -> Self {
        self.construct_type = construct_type;
        self
    }

    pub fn with_initializer_mode(mut self, initializer_mode: InitializerMode) -> Self {
        self.initializer_mode = initializer_mode;
        self
    }

    pub fn with_ns_coding(mut self, support_ns_coding: bool) -> Self {
        self.support_ns_coding = support_ns_coding;
        self
    }

    pub fn with_final_required(mut self, is_final_required: bool) -> Self {
        self.is_final_required = is_final_required;
        self
    }

    pub fn with_header(mut self, is_header_included: bool) -> Self {
        self.is_header_included = is_header_included;
        self
    }

    /// Name of a generated type with the configured prefix applied.
    pub fn type_name(&self, name: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}{name}"),
            None => name.to_string(),
        }
    }
}
