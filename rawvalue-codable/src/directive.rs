//! The three attachment directives.

use crate::{
    Attachment, ContractRequest, Diagnostic, Expander, MemberKind, SourceLocation,
    SynthesisResult, TypeDeclaration,
};

/// A directive that can be attached to a type declaration.
pub trait AttachmentDirective {
    /// What the directive asks for.
    const REQUEST: ContractRequest;

    /// The directive's name, as written after `@`.
    const NAME: &'static str = Self::REQUEST.directive_name();

    /// Members the directive may add to the type.
    const MEMBERS: &'static [MemberKind] = Self::REQUEST.member_kinds();

    /// The conformance the generated extension declares.
    const CONFORMANCE: &'static str = Self::REQUEST.conformance_name();

    /// Expand with the default configuration, reporting at the declaration.
    fn expand(declaration: &TypeDeclaration) -> Result<SynthesisResult, Diagnostic> {
        crate::expand(Self::REQUEST, declaration)
    }

    /// Expand with `expander`, reporting at the directive's own location.
    fn expand_at(
        expander: &Expander,
        location: SourceLocation,
        declaration: &TypeDeclaration,
    ) -> Result<SynthesisResult, Diagnostic> {
        expander.expand(Attachment::new(Self::REQUEST, location), declaration)
    }
}

/// `@RawValueDecodable`: adds `init(from:)` and a `Decodable` extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawValueDecodable;

impl AttachmentDirective for RawValueDecodable {
    const REQUEST: ContractRequest = ContractRequest::Decoding;
}

/// `@RawValueEncodable`: adds `encode(to:)` and an `Encodable` extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawValueEncodable;

impl AttachmentDirective for RawValueEncodable {
    const REQUEST: ContractRequest = ContractRequest::Encoding;
}

/// `@RawValueCodable`: adds both members and a single `Codable` extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawValueCodable;

impl AttachmentDirective for RawValueCodable {
    const REQUEST: ContractRequest = ContractRequest::Both;
}
