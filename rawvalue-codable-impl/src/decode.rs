//! `init(from:)` synthesis.

use crate::writer::{SourceWriter, modifier_prefix};
use crate::{Eligible, ExpansionConfig, MemberFragment, MemberKind, trace};

/// Message of the error thrown when a decoded raw value has no matching
/// instance.
pub const DATA_CORRUPTED_MESSAGE: &str = "Unable to decode value of type `RawValue` from data.";

/// Build the decode initializer for an eligible declaration.
///
/// A non-failable `init(rawValue:)` is called directly and any container
/// error propagates as is. Otherwise the result is unwrapped and a `nil`
/// becomes a `DecodingError.dataCorrupted` carrying
/// [`DATA_CORRUPTED_MESSAGE`].
pub fn synthesize_decode(eligible: Eligible<'_, '_>, config: &ExpansionConfig) -> MemberFragment {
    let facts = eligible.facts();
    let access = facts.access.needed_modifier();
    let failable = facts.raw_value_init_is_failable();
    trace!("synthesizing init(from:) for {} (failable: {failable})", facts.name);

    let mut w = SourceWriter::new(config);
    w.open(&format!(
        "{}init(from decoder: Decoder) throws",
        modifier_prefix(access)
    ));
    if failable {
        w.line("let container = try decoder.singleValueContainer()")
            .line(&format!(
                "let value = try {}(rawValue: container.decode(RawValue.self))",
                facts.name
            ))
            .blank()
            .open("guard let value else")
            .open_with("throw DecodingError.dataCorruptedError(")
            .line("in: container,")
            .line(&format!("debugDescription: \"{DATA_CORRUPTED_MESSAGE}\""))
            .close_with(")")
            .close()
            .blank()
            .line("self = value");
    } else {
        w.line("try self.init(rawValue: decoder.singleValueContainer().decode(RawValue.self))");
    }
    w.close();

    MemberFragment {
        kind: MemberKind::DecodeInitializer,
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

    fn decode(decl: &TypeDeclaration) -> MemberFragment {
        let config = ExpansionConfig::default();
        let facts = inspect(decl);
        let attachment = Attachment::new(ContractRequest::Decoding, SourceLocation::default());
        let eligible = check_eligibility(&facts, attachment, &config).unwrap();
        synthesize_decode(eligible, &config)
    }

    #[test]
    fn non_failable_init_is_forwarded() {
        let decl = TypeDeclaration::product("ID")
            .inheriting("RawRepresentable")
            .with_initializer(Initializer::raw_value("String"));
        assert_eq!(
            decode(&decl).source,
            indoc! {"
                init(from decoder: Decoder) throws {
                    try self.init(rawValue: decoder.singleValueContainer().decode(RawValue.self))
                }"}
        );
    }

    #[test]
    fn failable_init_is_guarded() {
        let decl = TypeDeclaration::product("ID")
            .inheriting("RawRepresentable")
            .with_initializer(Initializer::raw_value("String").failable());
        assert_eq!(
            decode(&decl).source,
            indoc! {r#"
                init(from decoder: Decoder) throws {
                    let container = try decoder.singleValueContainer()
                    let value = try ID(rawValue: container.decode(RawValue.self))

                    guard let value else {
                        throw DecodingError.dataCorruptedError(
                            in: container,
                            debugDescription: "Unable to decode value of type `RawValue` from data."
                        )
                    }

                    self = value
                }"#}
        );
    }

    #[test]
    fn public_types_get_a_public_initializer() {
        let decl = TypeDeclaration::sum("Texture")
            .inheriting("String")
            .with_access(AccessLevel::Public);
        let fragment = decode(&decl);
        assert_eq!(fragment.access, Some(AccessLevel::Public));
        assert!(
            fragment
                .source
                .starts_with("public init(from decoder: Decoder) throws {")
        );
        assert!(fragment.source.contains("try Texture(rawValue:"));
    }

    #[test]
    fn fileprivate_is_not_restated() {
        let decl = TypeDeclaration::product("ID")
            .inheriting("RawRepresentable")
            .with_access(AccessLevel::FileScoped);
        let fragment = decode(&decl);
        assert_eq!(fragment.access, None);
        assert!(fragment.source.starts_with("init(from decoder:"));
    }
}
