//! The extension that declares the requested conformance.

use crate::writer::{SourceWriter, modifier_prefix};
use crate::{ContractRequest, DeclarationFacts, ExpansionConfig, ExtensionFragment, trace};

/// Build `extension <Type>: <Contract> {}` for `request`.
///
/// Returns `None` when the inheritance clause already names the contract,
/// bare or qualified, since declaring it twice is an error in the host
/// language. Only the contract of `request` itself is considered:
/// `@RawValueCodable` on a type listing `Decodable` and `Encodable` still
/// gets a `Codable` extension.
pub fn build_extension(
    facts: &DeclarationFacts<'_>,
    request: ContractRequest,
    config: &ExpansionConfig,
) -> Option<ExtensionFragment> {
    let contract = request.conformance_name();
    if facts.declares(contract) {
        trace!("{} already declares {contract}, no extension", facts.name);
        return None;
    }

    let access = facts.access.needed_modifier();
    let conformance = config.conformance_spelling.spell(contract);
    let mut w = SourceWriter::new(config);
    w.open(&format!(
        "{}extension {}: {conformance}",
        modifier_prefix(access),
        facts.name
    ))
    .close();

    Some(ExtensionFragment {
        type_name: facts.name.to_string(),
        conformance,
        access,
        source: w.finish(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AccessLevel, ConformanceSpelling, TypeDeclaration, inspect};

    #[test]
    fn declares_the_qualified_contract() {
        let decl = TypeDeclaration::product("ID").inheriting("RawRepresentable");
        let ext = build_extension(&inspect(&decl), ContractRequest::Decoding, &ExpansionConfig::default())
            .unwrap();
        assert_eq!(ext.source, "extension ID: Swift.Decodable {\n}");
        assert_eq!(ext.conformance, "Swift.Decodable");
        assert_eq!(ext.type_name, "ID");
    }

    #[test]
    fn bare_spelling() {
        let decl = TypeDeclaration::product("ID").inheriting("RawRepresentable");
        let config = ExpansionConfig::default().with_conformance_spelling(ConformanceSpelling::Bare);
        let ext = build_extension(&inspect(&decl), ContractRequest::Both, &config).unwrap();
        assert_eq!(ext.source, "extension ID: Codable {\n}");
    }

    #[test]
    fn suppressed_when_already_declared() {
        let config = ExpansionConfig::default();
        for spelled in ["Encodable", "Swift.Encodable"] {
            let decl = TypeDeclaration::product("ID")
                .inheriting("RawRepresentable")
                .inheriting(spelled);
            let facts = inspect(&decl);
            assert_eq!(build_extension(&facts, ContractRequest::Encoding, &config), None);
            assert!(build_extension(&facts, ContractRequest::Decoding, &config).is_some());
        }
    }

    #[test]
    fn narrower_contracts_do_not_suppress_codable() {
        let decl = TypeDeclaration::product("ID")
            .inheriting("RawRepresentable")
            .inheriting("Decodable")
            .inheriting("Encodable");
        let ext = build_extension(&inspect(&decl), ContractRequest::Both, &ExpansionConfig::default());
        assert_eq!(ext.map(|ext| ext.conformance).as_deref(), Some("Swift.Codable"));
    }

    #[test]
    fn public_extension() {
        let decl = TypeDeclaration::product("ID")
            .inheriting("RawRepresentable")
            .with_access(AccessLevel::Public);
        let ext = build_extension(&inspect(&decl), ContractRequest::Encoding, &ExpansionConfig::default())
            .unwrap();
        assert_eq!(ext.access, Some(AccessLevel::Public));
        assert_eq!(ext.source, "public extension ID: Swift.Encodable {\n}");
    }

    #[test]
    fn private_extension_is_left_implicit() {
        let decl = TypeDeclaration::product("ID")
            .inheriting("RawRepresentable")
            .with_access(AccessLevel::Private);
        let ext = build_extension(&inspect(&decl), ContractRequest::Encoding, &ExpansionConfig::default())
            .unwrap();
        assert_eq!(ext.access, None);
        assert!(ext.source.starts_with("extension ID:"));
    }
}
