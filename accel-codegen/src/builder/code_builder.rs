//! Line builder for indented Swift statements.

/// One indent level (Xcode default).
const SWIFT_INDENT: &str = "    ";

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use accelerator_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::swift()
///     .block_with_close("guard let id: Int = kIdKey <~~ json else {", "}", |b| {
///         b.line("return nil")
///     })
///     .build_fragment();
///
/// assert_eq!(code, "guard let id: Int = kIdKey <~~ json else {\n    return nil\n}");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create an empty builder with 4-space indentation.
    pub fn swift() -> Self {
        Self {
            indent_level: 0,
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(SWIFT_INDENT);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add an indented block between `header` and `close`.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Consume the builder and return the code without the final newline.
    ///
    /// Fragments are joined by the template renderer, which supplies its own
    /// line breaks.
    pub fn build_fragment(mut self) -> String {
        if self.buffer.ends_with('\n') {
            self.buffer.pop();
        }
        self.buffer
    }
}
