//! Analysis-time diagnostics.

use core::fmt;

use crate::{ContractRequest, SourceLocation, catalog_entry, render_message};

/// Why a declaration cannot receive synthesized conformances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// The type does not declare `RawRepresentable` and is not an enum with
    /// a backing type.
    NotRawValueRepresentable,
    /// An enum with no inheritance clause at all, so it has no raw value.
    MissingBackingValueType,
}

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Severity {
    /// Prevents the attachment from producing anything
    Error,
}

/// A stable `domain.id` pair identifying a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId {
    /// Emitting component
    pub domain: &'static str,
    /// Identifier within the domain
    pub id: &'static str,
}

impl MessageId {
    /// A message id.
    pub const fn new(domain: &'static str, id: &'static str) -> Self {
        Self { domain, id }
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.domain, self.id)
    }
}

/// A textual edit suggested by a fix-it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Edit {
    /// Add `inherited` to the inheritance clause of `type_name`, creating the
    /// clause when the declaration has none.
    AppendInheritedType {
        /// Declaration to edit
        type_name: String,
        /// Name to append
        inherited: String,
    },
}

/// An advisory edit attached to a diagnostic. Never applied automatically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixIt {
    /// Stable fix-it id
    pub id: MessageId,
    /// Description shown to the user
    pub message: String,
    /// The edit itself
    pub edit: Edit,
}

/// A failed attachment.
///
/// The message is not stored: it is rendered from `kind` and
/// `requesting_identity` through the catalog, so re-tagging the identity is
/// enough to reword it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    /// What went wrong
    pub kind: DiagnosticKind,
    /// Always [`Severity::Error`] today
    pub severity: Severity,
    /// Location of the attachment directive
    pub location: SourceLocation,
    /// The directive the message is worded for
    pub requesting_identity: ContractRequest,
    /// Optional suggested edit
    pub fix_it: Option<FixIt>,
}

impl Diagnostic {
    /// An error of `kind` reported on behalf of `identity`.
    pub fn error(kind: DiagnosticKind, identity: ContractRequest, location: SourceLocation) -> Self {
        Self {
            kind,
            severity: Severity::Error,
            location,
            requesting_identity: identity,
            fix_it: None,
        }
    }

    /// Attach a fix-it.
    pub fn with_fix_it(mut self, fix_it: FixIt) -> Self {
        self.fix_it = Some(fix_it);
        self
    }

    /// The rendered message.
    pub fn message(&self) -> String {
        render_message(self.kind, self.requesting_identity)
    }

    /// The stable message id.
    pub fn id(&self) -> MessageId {
        catalog_entry(self.kind).id
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl core::error::Error for Diagnostic {}

#[cfg(feature = "miette")]
impl miette::Diagnostic for Diagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.id()))
    }

    fn severity(&self) -> Option<miette::Severity> {
        match self.severity {
            Severity::Error => Some(miette::Severity::Error),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.fix_it
            .as_ref()
            .map(|fix_it| Box::new(fix_it.message.as_str()) as Box<dyn fmt::Display + 'a>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + '_>> {
        let span = miette::SourceSpan::new(self.location.offset.into(), self.location.length);
        Some(Box::new(core::iter::once(
            miette::LabeledSpan::new_with_span(Some(self.requesting_identity.to_string()), span),
        )))
    }
}
