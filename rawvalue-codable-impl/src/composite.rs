//! `@RawValueCodable`: the decoding and encoding pipelines run back to back.

use crate::{
    Attachment, ContractRequest, DeclarationFacts, Diagnostic, ExpansionConfig, MemberFragment,
    MemberKind, debug, synthesize_member,
};

/// Reword `diagnostic` as if `identity` had reported it.
///
/// Kind, severity, location and fix-it are kept.
pub fn retag(diagnostic: Diagnostic, identity: ContractRequest) -> Diagnostic {
    Diagnostic {
        requesting_identity: identity,
        ..diagnostic
    }
}

/// Run the decoding pipeline, then the encoding pipeline, each with its own
/// eligibility check, and concatenate their members.
///
/// The first failure wins and is re-tagged with the composite attachment's
/// identity, so the user never sees a directive they did not write.
pub fn synthesize_composite_members(
    facts: &DeclarationFacts<'_>,
    attachment: Attachment,
    config: &ExpansionConfig,
) -> Result<Vec<MemberFragment>, Diagnostic> {
    let sub_pipelines = [
        (ContractRequest::Decoding, MemberKind::DecodeInitializer),
        (ContractRequest::Encoding, MemberKind::EncodeMethod),
    ];

    sub_pipelines
        .into_iter()
        .map(|(request, kind)| {
            let sub_attachment = Attachment::new(request, attachment.location);
            synthesize_member(facts, sub_attachment, kind, config).map_err(|diagnostic| {
                debug!(
                    "{} failed inside {}, re-tagging",
                    diagnostic.requesting_identity, attachment.request
                );
                retag(diagnostic, attachment.request)
            })
        })
        .collect()
}
