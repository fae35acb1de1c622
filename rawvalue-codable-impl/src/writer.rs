//! Indentation-aware line writer for generated source.

use crate::{AccessLevel, ExpansionConfig};

pub(crate) struct SourceWriter {
    output: String,
    indent_width: usize,
    level: usize,
}

impl SourceWriter {
    pub(crate) fn new(config: &ExpansionConfig) -> Self {
        Self {
            output: String::new(),
            indent_width: config.indent_width,
            level: 0,
        }
    }

    /// Write one line at the current indentation.
    pub(crate) fn line(&mut self, text: &str) -> &mut Self {
        for _ in 0..self.level * self.indent_width {
            self.output.push(' ');
        }
        self.output.push_str(text);
        self.output.push('\n');
        self
    }

    /// An empty line, never indented.
    pub(crate) fn blank(&mut self) -> &mut Self {
        self.output.push('\n');
        self
    }

    /// `header {` and indent.
    pub(crate) fn open(&mut self, header: &str) -> &mut Self {
        self.line(&format!("{header} {{"));
        self.level += 1;
        self
    }

    /// Dedent and `}`.
    pub(crate) fn close(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self.line("}")
    }

    /// Dedent and write `closer`, for calls spanning several lines.
    pub(crate) fn close_with(&mut self, closer: &str) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self.line(closer)
    }

    /// Write `opener` and indent.
    pub(crate) fn open_with(&mut self, opener: &str) -> &mut Self {
        self.line(opener);
        self.level += 1;
        self
    }

    /// The written source, without the final newline.
    pub(crate) fn finish(mut self) -> String {
        if self.output.ends_with('\n') {
            self.output.pop();
        }
        self.output
    }
}

/// `"public "` for the levels that are restated, `""` otherwise.
pub(crate) fn modifier_prefix(access: Option<AccessLevel>) -> String {
    access
        .map(|level| format!("{} ", level.keyword()))
        .unwrap_or_default()
}
