//! Entry points: one attachment and its declaration in, fragments or a
//! diagnostic out.

use crate::{
    Attachment, ContractRequest, DeclarationFacts, Diagnostic, ExpansionConfig, MemberFragment,
    MemberKind, SynthesisResult, TypeDeclaration, build_extension, check_eligibility, debug,
    inspect, synthesize_composite_members, synthesize_decode, synthesize_encode,
};

/// Runs expansions with a fixed [`ExpansionConfig`].
///
/// Holds no state besides the configuration; one expander can serve any
/// number of attachments, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Expander {
    config: ExpansionConfig,
}

impl Expander {
    /// An expander using `config`.
    pub fn new(config: ExpansionConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &ExpansionConfig {
        &self.config
    }

    /// Expand one attachment.
    ///
    /// Either every fragment is produced or none is: on failure the
    /// diagnostic is the only output.
    pub fn expand(
        &self,
        attachment: Attachment,
        declaration: &TypeDeclaration,
    ) -> Result<SynthesisResult, Diagnostic> {
        let facts = inspect(declaration);
        let members = match attachment.request {
            ContractRequest::Decoding => vec![synthesize_member(
                &facts,
                attachment,
                MemberKind::DecodeInitializer,
                &self.config,
            )?],
            ContractRequest::Encoding => vec![synthesize_member(
                &facts,
                attachment,
                MemberKind::EncodeMethod,
                &self.config,
            )?],
            ContractRequest::Both => {
                synthesize_composite_members(&facts, attachment, &self.config)?
            }
        };
        let extensions = build_extension(&facts, attachment.request, &self.config)
            .into_iter()
            .collect::<Vec<_>>();

        debug!(
            "{} on {}: {} member(s), {} extension(s)",
            attachment.request,
            facts.name,
            members.len(),
            extensions.len()
        );
        Ok(SynthesisResult {
            members,
            extensions,
        })
    }

    /// Expand `request` with the directive placed at the declaration itself.
    pub fn expand_request(
        &self,
        request: ContractRequest,
        declaration: &TypeDeclaration,
    ) -> Result<SynthesisResult, Diagnostic> {
        self.expand(Attachment::new(request, declaration.location), declaration)
    }
}

/// Expand `request` on `declaration` with the default configuration.
pub fn expand(
    request: ContractRequest,
    declaration: &TypeDeclaration,
) -> Result<SynthesisResult, Diagnostic> {
    Expander::default().expand_request(request, declaration)
}

/// Check eligibility on behalf of `attachment` and build one member.
pub fn synthesize_member(
    facts: &DeclarationFacts<'_>,
    attachment: Attachment,
    kind: MemberKind,
    config: &ExpansionConfig,
) -> Result<MemberFragment, Diagnostic> {
    let eligible = check_eligibility(facts, attachment, config)?;
    Ok(match kind {
        MemberKind::DecodeInitializer => synthesize_decode(eligible, config),
        MemberKind::EncodeMethod => synthesize_encode(eligible, config),
    })
}
