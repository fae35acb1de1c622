//! Structural facts about a declaration.
//!
//! Inspection never fails: anything the front end did not supply shows up as
//! an empty list or a `None`.

use crate::{
    AccessLevel, Category, Initializer, RAW_REPRESENTABLE, STANDARD_LIBRARY_MODULE,
    SourceLocation, TypeDeclaration, trace,
};

/// Argument label of the raw-value initializer.
pub const RAW_VALUE_LABEL: &str = "rawValue";

/// Shape of the initializer that builds a value from its raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawValueConstructor {
    /// `init?(rawValue:)`: some raw values produce no instance
    pub is_failable: bool,
}

/// Normalized view of a [`TypeDeclaration`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationFacts<'a> {
    /// The type's name
    pub name: &'a str,
    /// `struct` or `enum`
    pub category: Category,
    /// Inheritance clause with whitespace removed, in source order
    pub declared_conformances: Vec<String>,
    /// Declared access level
    pub access: AccessLevel,
    /// The `init(rawValue:)` found in the body, if any
    pub raw_value_constructor: Option<RawValueConstructor>,
    /// Where the declaration is
    pub location: SourceLocation,
}

impl DeclarationFacts<'_> {
    /// Whether the inheritance clause names `contract`, either bare or
    /// qualified with the standard library module.
    ///
    /// This is purely syntactic. A conformance added by an extension elsewhere
    /// in the program is not visible here.
    pub fn declares(&self, contract: &str) -> bool {
        self.declared_conformances.iter().any(|name| {
            name == contract
                || name
                    .strip_prefix(STANDARD_LIBRARY_MODULE)
                    .and_then(|rest| rest.strip_prefix('.'))
                    == Some(contract)
        })
    }

    /// Whether `RawRepresentable` is declared.
    pub fn declares_raw_representable(&self) -> bool {
        self.declares(RAW_REPRESENTABLE)
    }

    /// Whether the inheritance clause names anything at all.
    pub fn has_inherited_types(&self) -> bool {
        !self.declared_conformances.is_empty()
    }

    /// Whether building from a raw value may fail.
    ///
    /// Without an explicit `init(rawValue:)` the initializer is the one the
    /// compiler synthesizes for enums with a backing type, which is failable.
    pub fn raw_value_init_is_failable(&self) -> bool {
        self.raw_value_constructor
            .is_none_or(|constructor| constructor.is_failable)
    }
}

/// Extract the facts the rest of the pipeline works from.
pub fn inspect(declaration: &TypeDeclaration) -> DeclarationFacts<'_> {
    let facts = DeclarationFacts {
        name: &declaration.name,
        category: declaration.category,
        declared_conformances: declaration
            .inherited_types
            .iter()
            .map(|name| normalize_type_name(name))
            .filter(|name| !name.is_empty())
            .collect(),
        access: declaration.access,
        raw_value_constructor: find_raw_value_constructor(&declaration.initializers),
        location: declaration.location,
    };
    trace!(
        "inspected {} {}: conformances {:?}, access {}, raw value init {:?}",
        facts.category.keyword(),
        facts.name,
        facts.declared_conformances,
        facts.access,
        facts.raw_value_constructor
    );
    facts
}

/// The first initializer taking exactly one argument labeled `rawValue`.
///
/// Every initializer is scanned, not only the first one in the body.
fn find_raw_value_constructor(initializers: &[Initializer]) -> Option<RawValueConstructor> {
    initializers
        .iter()
        .find(|init| matches!(init.parameters.as_slice(), [only] if only.label.trim() == RAW_VALUE_LABEL))
        .map(|init| RawValueConstructor {
            is_failable: init.is_failable,
        })
}

/// `Swift . Decodable` and `Swift.Decodable` name the same type.
fn normalize_type_name(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Parameter;

    #[test]
    fn declares_matches_bare_and_qualified_names() {
        let decl = TypeDeclaration::product("ID")
            .inheriting("Swift.RawRepresentable")
            .inheriting(" Decodable ");
        let facts = inspect(&decl);
        assert!(facts.declares_raw_representable());
        assert!(facts.declares("Decodable"));
        assert!(!facts.declares("Encodable"));
        assert!(!facts.declares("Codable"));
    }

    #[test]
    fn other_modules_do_not_count() {
        let decl = TypeDeclaration::product("ID")
            .inheriting("Foundation.RawRepresentable")
            .inheriting("SwiftDecodable");
        let facts = inspect(&decl);
        assert!(!facts.declares_raw_representable());
        assert!(!facts.declares("Decodable"));
    }

    #[test]
    fn whitespace_inside_a_qualified_name_is_ignored() {
        let decl = TypeDeclaration::product("ID").inheriting("Swift . Codable");
        assert!(inspect(&decl).declares("Codable"));
    }

    #[test]
    fn missing_raw_value_init_defaults_to_failable() {
        let decl = TypeDeclaration::sum("Texture").inheriting("String");
        let facts = inspect(&decl);
        assert_eq!(facts.raw_value_constructor, None);
        assert!(facts.raw_value_init_is_failable());
    }

    #[test]
    fn explicit_non_failable_init_is_found() {
        let decl = TypeDeclaration::product("ID")
            .inheriting("RawRepresentable")
            .with_initializer(Initializer::new(vec![Parameter::new("name", "String")]))
            .with_initializer(Initializer::raw_value("String"));
        let facts = inspect(&decl);
        assert_eq!(
            facts.raw_value_constructor,
            Some(RawValueConstructor { is_failable: false })
        );
        assert!(!facts.raw_value_init_is_failable());
    }

    #[test]
    fn init_shape_must_be_a_single_raw_value_label() {
        let two_params = Initializer::new(vec![
            Parameter::new("rawValue", "String"),
            Parameter::new("fallback", "String"),
        ]);
        let unlabeled = Initializer::new(vec![Parameter::named("_", "rawValue", "String")]);
        let decl = TypeDeclaration::product("ID")
            .with_initializer(two_params)
            .with_initializer(unlabeled);
        assert_eq!(inspect(&decl).raw_value_constructor, None);

        let renamed = TypeDeclaration::product("ID").with_initializer(Initializer::new(vec![
            Parameter::named("rawValue", "value", "String"),
        ]));
        assert_eq!(
            inspect(&renamed).raw_value_constructor,
            Some(RawValueConstructor { is_failable: false })
        );
    }

    #[test]
    fn failable_marker_is_carried() {
        let decl = TypeDeclaration::product("ID")
            .with_initializer(Initializer::raw_value("Int").failable());
        assert!(inspect(&decl).raw_value_init_is_failable());
    }
}
