#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub use rawvalue_codable_impl::*;

mod directive;
pub use directive::*;
