//! Parsers for Fluent resource files.
//!
//! - `syntax`: line grammar shared by the parser and the key extractor
//! - `ftl`: resource text to [`LocaleResource`](crate::core::LocaleResource)

pub mod ftl;
pub mod syntax;
