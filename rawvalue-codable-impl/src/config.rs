//! Expansion settings.

/// How the generated extension spells the contract it declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConformanceSpelling {
    /// `extension ID: Swift.Decodable`
    #[default]
    Qualified,
    /// `extension ID: Decodable`
    Bare,
}

impl ConformanceSpelling {
    /// Spell `contract` according to this setting.
    pub fn spell(self, contract: &str) -> String {
        match self {
            ConformanceSpelling::Qualified => format!("{STANDARD_LIBRARY_MODULE}.{contract}"),
            ConformanceSpelling::Bare => contract.to_string(),
        }
    }
}

/// Module that owns `RawRepresentable`, `Decodable`, `Encodable` and `Codable`.
pub const STANDARD_LIBRARY_MODULE: &str = "Swift";

/// Settings shared by every stage of an expansion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExpansionConfig {
    /// Spaces per indentation level in generated code
    pub indent_width: usize,
    /// Spelling of the contract in generated extensions
    pub conformance_spelling: ConformanceSpelling,
    /// Attach the catalog's fix-its to diagnostics that have one
    pub attach_fix_its: bool,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            conformance_spelling: ConformanceSpelling::default(),
            attach_fix_its: false,
        }
    }
}

impl ExpansionConfig {
    /// Set the indentation width.
    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    /// Set how extensions spell their contract.
    pub fn with_conformance_spelling(mut self, spelling: ConformanceSpelling) -> Self {
        self.conformance_spelling = spelling;
        self
    }

    /// Attach fix-its to diagnostics.
    pub fn with_fix_its(mut self, attach_fix_its: bool) -> Self {
        self.attach_fix_its = attach_fix_its;
        self
    }
}
