//! Line builder used by the emitters.

/// Builds text line by line with a fixed two-space indentation step.
///
/// ```
/// use srcgen_codegen::emit::TextBuilder;
///
/// let mut builder = TextBuilder::new();
/// builder
///     .push_line("sources = [")
///     .push_indent()
///     .push_line("\"a.c\",")
///     .push_dedent()
///     .push_line("]");
///
/// assert_eq!(builder.build(), "sources = [\n  \"a.c\",\n]\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextBuilder {
    indent_level: usize,
    buffer: String,
}

impl TextBuilder {
    const INDENT: &'static str = "  ";

    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(Self::INDENT);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line. Blank lines are never indented.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add a `#` comment line, or a bare `#` for an empty comment.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            self.push_line("#")
        } else {
            self.push_line(&format!("# {}", text))
        }
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Consume the builder and return the text.
    pub fn build(self) -> String {
        self.buffer
    }
}
