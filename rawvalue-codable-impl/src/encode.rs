//! `encode(to:)` synthesis.

use crate::writer::{SourceWriter, modifier_prefix};
use crate::{Eligible, ExpansionConfig, MemberFragment, MemberKind, trace};

/// Build the encode method for an eligible declaration: the raw value goes
/// into a single-value container, encoding errors propagate unchanged.
pub fn synthesize_encode(eligible: Eligible<'_, '_>, config: &ExpansionConfig) -> MemberFragment {
    let facts = eligible.facts();
    let access = facts.access.needed_modifier();
    trace!("synthesizing encode(to:) for {}", facts.name);

    let mut w = SourceWriter::new(config);
    w.open(&format!(
        "{}func encode(to encoder: Encoder) throws",
        modifier_prefix(access)
    ))
    .line("var container = encoder.singleValueContainer()")
    .line("try container.encode(self.rawValue)")
    .close();

    MemberFragment {
        kind: MemberKind::EncodeMethod,
        access,
        source: w.finish(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        AccessLevel, Attachment, ContractRequest, Initializer, SourceLocation, TypeDeclaration,
        check_eligibility, inspect,
    };
    use indoc::indoc;

    fn encode(decl: &TypeDeclaration, config: &ExpansionConfig) -> MemberFragment {
        let facts = inspect(decl);
        let attachment = Attachment::new(ContractRequest::Encoding, SourceLocation::default());
        let eligible = check_eligibility(&facts, attachment, config).unwrap();
        synthesize_encode(eligible, config)
    }

    #[test]
    fn writes_the_raw_value() {
        let decl = TypeDeclaration::product("ID").inheriting("RawRepresentable");
        assert_eq!(
            encode(&decl, &ExpansionConfig::default()).source,
            indoc! {"
                func encode(to encoder: Encoder) throws {
                    var container = encoder.singleValueContainer()
                    try container.encode(self.rawValue)
                }"}
        );
    }

    #[test]
    fn failability_does_not_matter() {
        let config = ExpansionConfig::default();
        let plain = TypeDeclaration::product("ID")
            .inheriting("RawRepresentable")
            .with_initializer(Initializer::raw_value("String"));
        let failable = TypeDeclaration::product("ID")
            .inheriting("RawRepresentable")
            .with_initializer(Initializer::raw_value("String").failable());
        assert_eq!(encode(&plain, &config), encode(&failable, &config));
    }

    #[test]
    fn package_access_and_custom_indent() {
        let decl = TypeDeclaration::product("ID")
            .inheriting("RawRepresentable")
            .with_access(AccessLevel::Package);
        let fragment = encode(&decl, &ExpansionConfig::default().with_indent_width(2));
        assert_eq!(
            fragment.source,
            indoc! {"
                package func encode(to encoder: Encoder) throws {
                  var container = encoder.singleValueContainer()
                  try container.encode(self.rawValue)
                }"}
        );
    }
}
