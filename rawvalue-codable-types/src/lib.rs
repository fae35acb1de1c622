#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

use core::fmt;

mod catalog;
pub use catalog::*;

mod diagnostic;
pub use diagnostic::*;

// =============================================================================
// Source locations
// =============================================================================

/// Where a declaration or an attachment directive sits in its source file.
///
/// `offset` and `length` are byte positions, `line` and `column` are 1-based.
/// A front end that only knows line/column may leave the span empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SourceLocation {
    /// 1-based line
    pub line: u32,
    /// 1-based column
    pub column: u32,
    /// Byte offset of the first character
    pub offset: usize,
    /// Length of the highlighted region, in bytes
    pub length: usize,
}

impl SourceLocation {
    /// A location at `line:column` with an empty span.
    pub const fn new(line: u32, column: u32) -> Self {
        Self {
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Attach a byte span to this location.
    pub const fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

// =============================================================================
// Declarations
// =============================================================================

/// The shape of a nominal type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A type aggregating named fields (`struct`)
    Product,
    /// A type whose values are one of a fixed set of cases (`enum`)
    Sum,
}

impl Category {
    /// The declaration keyword for this category.
    pub const fn keyword(self) -> &'static str {
        match self {
            Category::Product => "struct",
            Category::Sum => "enum",
        }
    }
}

/// Declared access level of a type or member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum AccessLevel {
    /// `private`
    Private,
    /// `fileprivate`
    FileScoped,
    /// `internal`, the implicit default
    #[default]
    Internal,
    /// `package`
    Package,
    /// `public`
    Public,
}

impl AccessLevel {
    /// The modifier keyword as written in source.
    pub const fn keyword(self) -> &'static str {
        match self {
            AccessLevel::Private => "private",
            AccessLevel::FileScoped => "fileprivate",
            AccessLevel::Internal => "internal",
            AccessLevel::Package => "package",
            AccessLevel::Public => "public",
        }
    }

    /// Parse a modifier keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "private" => Some(AccessLevel::Private),
            "fileprivate" => Some(AccessLevel::FileScoped),
            "internal" => Some(AccessLevel::Internal),
            "package" => Some(AccessLevel::Package),
            "public" => Some(AccessLevel::Public),
            _ => None,
        }
    }

    /// The modifier to restate on generated code, if any.
    ///
    /// Only `package` and `public` are carried over. Restating `private`,
    /// `fileprivate` or `internal` on an extension changes the visibility of
    /// its members, so those levels are left implicit.
    pub const fn needed_modifier(self) -> Option<Self> {
        match self {
            AccessLevel::Package | AccessLevel::Public => Some(self),
            AccessLevel::Private | AccessLevel::FileScoped | AccessLevel::Internal => None,
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One parameter of a declared initializer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    /// Argument label (`rawValue` in `init(rawValue: String)`, `_` when unlabeled)
    pub label: String,
    /// Local parameter name, if the front end reported one
    pub name: Option<String>,
    /// Type annotation as written
    pub ty: String,
}

impl Parameter {
    /// A parameter whose label doubles as its local name.
    pub fn new(label: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            name: None,
            ty: ty.into(),
        }
    }

    /// A parameter with a separate local name (`init(rawValue value: String)`).
    pub fn named(label: impl Into<String>, name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            name: Some(name.into()),
            ty: ty.into(),
        }
    }
}

/// An initializer declared in the body of a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Initializer {
    /// Parameters in declaration order
    pub parameters: Vec<Parameter>,
    /// `init?` rather than `init`
    pub is_failable: bool,
    /// Access level as written
    pub access: AccessLevel,
}

impl Initializer {
    /// A non-failable initializer with the given parameters.
    pub fn new(parameters: Vec<Parameter>) -> Self {
        Self {
            parameters,
            is_failable: false,
            access: AccessLevel::default(),
        }
    }

    /// `init(rawValue: <ty>)`
    pub fn raw_value(ty: impl Into<String>) -> Self {
        Self::new(vec![Parameter::new("rawValue", ty)])
    }

    /// Mark this initializer as failable (`init?`).
    pub fn failable(mut self) -> Self {
        self.is_failable = true;
        self
    }

    /// Set the declared access level.
    pub fn with_access(mut self, access: AccessLevel) -> Self {
        self.access = access;
        self
    }
}

/// A type declaration as handed over by the front end.
///
/// This is the only input of the synthesizer. It is built fresh for every
/// attachment and never mutated by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDeclaration {
    /// The type's name
    pub name: String,
    /// `struct` or `enum`
    pub category: Category,
    /// The inheritance clause, in source order, as written
    pub inherited_types: Vec<String>,
    /// The declared access level
    pub access: AccessLevel,
    /// Initializers declared in the type's body, in source order
    pub initializers: Vec<Initializer>,
    /// Location of the declaration
    pub location: SourceLocation,
}

impl TypeDeclaration {
    /// An empty declaration of the given category.
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
            inherited_types: Vec::new(),
            access: AccessLevel::default(),
            initializers: Vec::new(),
            location: SourceLocation::default(),
        }
    }

    /// `struct <name>`
    pub fn product(name: impl Into<String>) -> Self {
        Self::new(name, Category::Product)
    }

    /// `enum <name>`
    pub fn sum(name: impl Into<String>) -> Self {
        Self::new(name, Category::Sum)
    }

    /// Append a name to the inheritance clause.
    pub fn inheriting(mut self, ty: impl Into<String>) -> Self {
        self.inherited_types.push(ty.into());
        self
    }

    /// Set the declared access level.
    pub fn with_access(mut self, access: AccessLevel) -> Self {
        self.access = access;
        self
    }

    /// Append an initializer to the body.
    pub fn with_initializer(mut self, initializer: Initializer) -> Self {
        self.initializers.push(initializer);
        self
    }

    /// Set the declaration's location.
    pub fn at(mut self, location: SourceLocation) -> Self {
        self.location = location;
        self
    }
}

// =============================================================================
// Requests
// =============================================================================

/// Which conformance an attachment directive asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractRequest {
    /// `@RawValueDecodable`
    Decoding,
    /// `@RawValueEncodable`
    Encoding,
    /// `@RawValueCodable`
    Both,
}

impl ContractRequest {
    /// Every request, in declaration order.
    pub const ALL: [ContractRequest; 3] = [
        ContractRequest::Decoding,
        ContractRequest::Encoding,
        ContractRequest::Both,
    ];

    /// Name of the attachment directive, without the leading `@`.
    pub const fn directive_name(self) -> &'static str {
        match self {
            ContractRequest::Decoding => "RawValueDecodable",
            ContractRequest::Encoding => "RawValueEncodable",
            ContractRequest::Both => "RawValueCodable",
        }
    }

    /// Look a request up by directive name (with or without `@`).
    pub fn from_directive_name(name: &str) -> Option<Self> {
        let name = name.strip_prefix('@').unwrap_or(name);
        Self::ALL
            .into_iter()
            .find(|request| request.directive_name() == name)
    }

    /// The contract the generated extension declares.
    pub const fn conformance_name(self) -> &'static str {
        match self {
            ContractRequest::Decoding => "Decodable",
            ContractRequest::Encoding => "Encodable",
            ContractRequest::Both => "Codable",
        }
    }

    /// Members this directive may introduce.
    pub const fn member_kinds(self) -> &'static [MemberKind] {
        match self {
            ContractRequest::Decoding => &[MemberKind::DecodeInitializer],
            ContractRequest::Encoding => &[MemberKind::EncodeMethod],
            ContractRequest::Both => &[MemberKind::DecodeInitializer, MemberKind::EncodeMethod],
        }
    }
}

impl fmt::Display for ContractRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.directive_name())
    }
}

/// One attachment directive on a declaration.
///
/// Diagnostics are reported at the attachment's location, so two directives
/// on the same declaration fail or succeed independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attachment {
    /// What the directive asks for
    pub request: ContractRequest,
    /// Where the directive is written
    pub location: SourceLocation,
}

impl Attachment {
    /// An attachment at the given location.
    pub const fn new(request: ContractRequest, location: SourceLocation) -> Self {
        Self { request, location }
    }
}

// =============================================================================
// Generated fragments
// =============================================================================

/// Which member a fragment implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// `init(from:)`
    DecodeInitializer,
    /// `encode(to:)`
    EncodeMethod,
}

impl MemberKind {
    /// The member's name as the host language spells it.
    pub const fn member_name(self) -> &'static str {
        match self {
            MemberKind::DecodeInitializer => "init(from:)",
            MemberKind::EncodeMethod => "encode(to:)",
        }
    }
}

/// A generated member declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberFragment {
    /// Which member this is
    pub kind: MemberKind,
    /// The access modifier written on the member, if any
    pub access: Option<AccessLevel>,
    /// Rendered source, without a trailing newline
    pub source: String,
}

impl fmt::Display for MemberFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// A generated extension declaring one conformance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtensionFragment {
    /// The extended type
    pub type_name: String,
    /// The conformance, as spelled in the extension
    pub conformance: String,
    /// The access modifier written on the extension, if any
    pub access: Option<AccessLevel>,
    /// Rendered source, without a trailing newline
    pub source: String,
}

impl fmt::Display for ExtensionFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Everything one attachment contributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SynthesisResult {
    /// Members to insert into the type's body, in order
    pub members: Vec<MemberFragment>,
    /// Extensions to place after the declaration, in order
    pub extensions: Vec<ExtensionFragment>,
}

impl SynthesisResult {
    /// Look up the generated member of the given kind.
    pub fn member(&self, kind: MemberKind) -> Option<&MemberFragment> {
        self.members.iter().find(|member| member.kind == kind)
    }

    /// True when nothing was generated.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty() && self.extensions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needed_modifier_keeps_package_and_public_only() {
        let needed: Vec<_> = [
            AccessLevel::Private,
            AccessLevel::FileScoped,
            AccessLevel::Internal,
            AccessLevel::Package,
            AccessLevel::Public,
        ]
        .into_iter()
        .filter_map(AccessLevel::needed_modifier)
        .collect();
        assert_eq!(needed, vec![AccessLevel::Package, AccessLevel::Public]);
    }

    #[test]
    fn access_keywords_round_trip() {
        for keyword in ["private", "fileprivate", "internal", "package", "public"] {
            let level = AccessLevel::from_keyword(keyword).unwrap();
            assert_eq!(level.keyword(), keyword);
        }
        assert_eq!(AccessLevel::from_keyword("open"), None);
    }

    #[test]
    fn directive_lookup_accepts_attribute_syntax() {
        assert_eq!(
            ContractRequest::from_directive_name("@RawValueCodable"),
            Some(ContractRequest::Both)
        );
        assert_eq!(
            ContractRequest::from_directive_name("RawValueEncodable"),
            Some(ContractRequest::Encoding)
        );
        assert_eq!(ContractRequest::from_directive_name("Codable"), None);
    }

    #[test]
    fn request_display() {
        insta::assert_snapshot!(ContractRequest::Decoding, @"@RawValueDecodable");
    }

    #[test]
    fn builder_keeps_source_order() {
        let decl = TypeDeclaration::sum("Texture")
            .inheriting("String")
            .inheriting("CaseIterable")
            .with_access(AccessLevel::Public);
        assert_eq!(decl.inherited_types, ["String", "CaseIterable"]);
        assert_eq!(decl.category.keyword(), "enum");
        assert_eq!(decl.access, AccessLevel::Public);
    }
}
