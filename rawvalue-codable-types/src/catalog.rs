//! Message and fix-it templates for every diagnostic the synthesizer reports.
//!
//! Messages name the directive the user actually wrote, so a template is
//! resolved against a `(DiagnosticKind, ContractRequest)` pair.

use crate::{ContractRequest, DiagnosticKind, Edit, FixIt, MessageId};

/// Domain of every message id emitted by this workspace.
pub const DIAGNOSTIC_DOMAIN: &str = "RawValueCodableMacros";

/// Name of the raw-value-representable contract.
pub const RAW_REPRESENTABLE: &str = "RawRepresentable";

/// Placeholder substituted with the requesting directive's name.
const DIRECTIVE: &str = "{directive}";

/// A catalog entry for one diagnostic kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Stable message id
    pub id: MessageId,
    /// Message template, `{directive}` is replaced by the directive name
    pub template: &'static str,
    /// The fix-it offered alongside this diagnostic, if any
    pub fix_it: Option<FixItTemplate>,
}

/// A fix-it described as data; applying it is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixItTemplate {
    /// Stable fix-it id
    pub id: MessageId,
    /// Human-readable description of the edit
    pub message: &'static str,
    /// Name to append to the inheritance clause
    pub conformance: &'static str,
}

impl FixItTemplate {
    /// Bind this template to a declaration.
    pub fn instantiate(&self, type_name: &str) -> FixIt {
        FixIt {
            id: self.id,
            message: self.message.to_string(),
            edit: Edit::AppendInheritedType {
                type_name: type_name.to_string(),
                inherited: self.conformance.to_string(),
            },
        }
    }
}

const ADD_RAW_REPRESENTABLE_CONFORMANCE: FixItTemplate = FixItTemplate {
    id: MessageId::new(DIAGNOSTIC_DOMAIN, "addRawRepresentableConformance"),
    message: "Add 'RawRepresentable' conformance",
    conformance: RAW_REPRESENTABLE,
};

const NOT_RAW_REPRESENTABLE: CatalogEntry = CatalogEntry {
    id: MessageId::new(DIAGNOSTIC_DOMAIN, "notRawRepresentable"),
    template: "@{directive} can only be applied to a type conforming to 'RawRepresentable'",
    fix_it: Some(ADD_RAW_REPRESENTABLE_CONFORMANCE),
};

const ENUM_MISSING_RAW_VALUE_TYPE: CatalogEntry = CatalogEntry {
    id: MessageId::new(DIAGNOSTIC_DOMAIN, "enumMissingRawValueType"),
    template: "@{directive} can only be applied to an enum conforming to 'RawRepresentable' explicitly or an enum with raw value",
    fix_it: None,
};

/// The catalog entry for a diagnostic kind.
pub const fn catalog_entry(kind: DiagnosticKind) -> &'static CatalogEntry {
    match kind {
        DiagnosticKind::NotRawValueRepresentable => &NOT_RAW_REPRESENTABLE,
        DiagnosticKind::MissingBackingValueType => &ENUM_MISSING_RAW_VALUE_TYPE,
    }
}

/// Render the message for `kind` as reported by `identity`.
pub fn render_message(kind: DiagnosticKind, identity: ContractRequest) -> String {
    catalog_entry(kind)
        .template
        .replace(DIRECTIVE, identity.directive_name())
}
