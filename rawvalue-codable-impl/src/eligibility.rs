//! Decides whether a declaration may receive synthesized conformances.

use crate::{
    Attachment, Category, DeclarationFacts, Diagnostic, DiagnosticKind, ExpansionConfig,
    catalog_entry, trace,
};

/// Facts that passed the eligibility check.
///
/// The synthesizers only accept this type, so code cannot be generated for a
/// declaration that was never checked.
#[derive(Debug, Clone, Copy)]
pub struct Eligible<'f, 'a> {
    facts: &'f DeclarationFacts<'a>,
}

impl<'f, 'a> Eligible<'f, 'a> {
    /// The checked facts.
    pub fn facts(&self) -> &'f DeclarationFacts<'a> {
        self.facts
    }
}

/// Check `facts` on behalf of `attachment`.
///
/// | declares `RawRepresentable` | category | inheritance clause | result |
/// |---|---|---|---|
/// | yes | any | any | eligible |
/// | no | enum | empty | [`DiagnosticKind::MissingBackingValueType`] |
/// | no | enum | not empty | eligible |
/// | no | struct | any | [`DiagnosticKind::NotRawValueRepresentable`] |
///
/// An enum inheriting anything is assumed to inherit its backing primitive;
/// the name is not checked against the set of valid raw value types.
pub fn check_eligibility<'f, 'a>(
    facts: &'f DeclarationFacts<'a>,
    attachment: Attachment,
    config: &ExpansionConfig,
) -> Result<Eligible<'f, 'a>, Diagnostic> {
    let failure = if facts.declares_raw_representable() {
        None
    } else {
        match facts.category {
            Category::Sum if !facts.has_inherited_types() => {
                Some(DiagnosticKind::MissingBackingValueType)
            }
            Category::Sum => None,
            Category::Product => Some(DiagnosticKind::NotRawValueRepresentable),
        }
    };

    let Some(kind) = failure else {
        trace!("{} is eligible for {}", facts.name, attachment.request);
        return Ok(Eligible { facts });
    };

    trace!("{} rejected by {}: {:?}", facts.name, attachment.request, kind);
    let mut diagnostic = Diagnostic::error(kind, attachment.request, attachment.location);
    if config.attach_fix_its
        && let Some(template) = catalog_entry(kind).fix_it
    {
        diagnostic = diagnostic.with_fix_it(template.instantiate(facts.name));
    }
    Err(diagnostic)
}
