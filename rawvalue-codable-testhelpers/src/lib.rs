#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

use std::sync::LazyLock;

use rawvalue_codable_impl::{
    Attachment, ContractRequest, Diagnostic, Expander, ExpansionConfig, SynthesisResult,
    TypeDeclaration,
};
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "RAWVALUE_LOG";

static SUBSCRIBER_INIT: LazyLock<()> = LazyLock::new(|| {
    let filter = std::env::var(LOG_ENV)
        .ok()
        .and_then(|s| s.parse::<Targets>().ok())
        .unwrap_or_else(|| Targets::new().with_default(tracing::Level::TRACE));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_test_writer()
                .without_time()
                .with_target(true)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .ok();
});

/// Install the tracing subscriber, once per process.
pub fn setup() {
    LazyLock::force(&SUBSCRIBER_INIT);
}

/// Whether an assertion compares or captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Recording {
    /// Compare against the expectation and panic on mismatch
    #[default]
    Off,
    /// Print the actual output and skip the comparison
    On,
}

/// Expands declarations and checks the rendered result.
#[derive(Debug, Clone)]
pub struct Harness {
    recording: Recording,
    expander: Expander,
}

impl Harness {
    /// A harness with the default configuration. Also calls [`setup`].
    pub fn new(recording: Recording) -> Self {
        setup();
        Self {
            recording,
            expander: Expander::default(),
        }
    }

    /// Use `config` for every expansion.
    pub fn with_config(mut self, config: ExpansionConfig) -> Self {
        self.expander = Expander::new(config);
        self
    }

    /// Expand `request` on `declaration` and compare the rendered fragments
    /// with `expected`.
    #[track_caller]
    pub fn assert_expansion(
        &self,
        request: ContractRequest,
        declaration: &TypeDeclaration,
        expected: &str,
    ) {
        match self.expander.expand_request(request, declaration) {
            Ok(result) => self.check(&render_expansion(&result), expected),
            Err(diagnostic) => panic!(
                "expected {request} on {} to expand, got: {diagnostic}",
                declaration.name
            ),
        }
    }

    /// Expand `request` on `declaration`, expecting a diagnostic, and compare
    /// its rendering with `expected`.
    #[track_caller]
    pub fn assert_diagnostic(
        &self,
        request: ContractRequest,
        declaration: &TypeDeclaration,
        expected: &str,
    ) {
        let attachment = Attachment::new(request, declaration.location);
        match self.expander.expand(attachment, declaration) {
            Ok(result) => panic!(
                "expected {request} on {} to fail, got:\n{}",
                declaration.name,
                render_expansion(&result)
            ),
            Err(diagnostic) => self.check(&render_diagnostic(attachment, &diagnostic), expected),
        }
    }

    #[track_caller]
    fn check(&self, actual: &str, expected: &str) {
        match self.recording {
            Recording::On => {
                eprintln!("recorded:\n{actual}");
            }
            Recording::Off => {
                if actual != expected {
                    let diff = similar::TextDiff::from_lines(expected, actual);
                    panic!(
                        "expansion mismatch\n{}",
                        diff.unified_diff().header("expected", "actual")
                    );
                }
            }
        }
    }
}

/// Members separated by blank lines, then the extensions.
pub fn render_expansion(result: &SynthesisResult) -> String {
    if result.is_empty() {
        return String::new();
    }
    result
        .members
        .iter()
        .map(|member| member.source.as_str())
        .chain(result.extensions.iter().map(|ext| ext.source.as_str()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// The directive line with the diagnostic (and its fix-it) underneath.
pub fn render_diagnostic(attachment: Attachment, diagnostic: &Diagnostic) -> String {
    let mut out = format!(
        "@{}\n╰─ 🛑 {}",
        attachment.request.directive_name(),
        diagnostic.message()
    );
    if let Some(fix_it) = &diagnostic.fix_it {
        out.push_str("\n   ✏️ ");
        out.push_str(&fix_it.message);
    }
    out
}
