#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

// ============================================================================
// RE-EXPORTS FROM RAWVALUE-CODABLE-TYPES (declarations, fragments, diagnostics)
// ============================================================================

pub use rawvalue_codable_types::*;

// ============================================================================
// LOGGING
// ============================================================================

#[cfg(feature = "tracing")]
#[allow(unused_imports)]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
#[macro_export]
/// Forwards to tracing::trace when the tracing feature is enabled
macro_rules! trace {
    ($($tt:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
#[macro_export]
/// Forwards to tracing::debug when the tracing feature is enabled
macro_rules! debug {
    ($($tt:tt)*) => {};
}

// ============================================================================
// ANALYSIS
// ============================================================================

mod config;
pub use config::*;

mod inspect;
pub use inspect::*;

mod eligibility;
pub use eligibility::*;

// ============================================================================
// SYNTHESIS
// ============================================================================

mod writer;

mod decode;
pub use decode::*;

mod encode;
pub use encode::*;

mod extension;
pub use extension::*;

mod composite;
pub use composite::*;

mod expand;
pub use expand::*;
