//! ftlsync - keep Fluent (FTL) locale resources consistent
//!
//! ftlsync reconciles translation files against a canonical source locale
//! and finds keys that no source file references.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and actions)
//! - `config`: Configuration file loading and parsing
//! - `core`: Resource model, parser, key extraction, reconciliation and usage scanning
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Missing-key and unused-key detection

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
