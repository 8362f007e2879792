//! Line-oriented text output for generated sources
//!
//! Each call to [`Printer::line`] writes its fragments back to back followed
//! by a newline. The indentation level is tracked but never prepended: the
//! Java templates spell out their own leading whitespace.
//!
//! Generators build a fresh printer per file and take its text with
//! [`Printer::finish`], so they never call [`Printer::reset`].

/// One indentation step
const INDENT_UNIT: &str = "  ";

/// Buffer for the text of a single generated file
#[derive(Debug, Default)]
pub struct Printer {
    output: String,
    indent: String,
}

impl Printer {
    /// Create an empty printer
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the fragments followed by a newline
    pub fn line(&mut self, parts: &[&str]) {
        for part in parts {
            self.output.push_str(part);
        }
        self.output.push('\n');
    }

    /// Write an empty line
    pub fn blank(&mut self) {
        self.output.push('\n');
    }

    /// Go one indentation level deeper
    pub fn indent(&mut self) {
        self.indent.push_str(INDENT_UNIT);
    }

    /// Go one indentation level back; a no-op at the outermost level
    pub fn outdent(&mut self) {
        let len = self.indent.len().saturating_sub(INDENT_UNIT.len());
        self.indent.truncate(len);
    }

    /// Current indentation prefix
    pub fn current_indent(&self) -> &str {
        &self.indent
    }

    /// Text written so far
    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// Clear the buffer and the indentation
    pub fn reset(&mut self) {
        self.output.clear();
        self.indent.clear();
    }

    /// Take the accumulated text, leaving the printer reset
    pub fn finish(&mut self) -> String {
        self.indent.clear();
        std::mem::take(&mut self.output)
    }
}
