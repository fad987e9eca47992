//! Core engine: resource model, parsing, key extraction and the two
//! algorithms built on them.
//!
//! ```text
//! resource text ──▶ parsers::ftl ──▶ LocaleResource ──▶ reconcile ──▶ serialize
//!       │
//!       └────────▶ keys::extract_key_lines ──▶ usage ──▶ prune
//! ```
//!
//! ## Module Structure
//!
//! - `context`: Project settings (config + CLI overrides, locale discovery)
//! - `data`: Resource model and location types
//! - `file_scanner`: Corpus file discovery
//! - `keys`: Key extraction from resources and raw lines
//! - `parsers`: Line grammar and resource parser
//! - `prune`: Format-preserving removal of unused key lines
//! - `reconcile`: Missing-key diff and merge
//! - `serialize`: Resource to text
//! - `usage`: Key usage scanning against the corpus

pub mod context;
pub mod data;
pub mod file_scanner;
pub mod keys;
pub mod parsers;
pub mod prune;
pub mod reconcile;
pub mod serialize;
pub mod usage;

pub use context::ProjectContext;
pub use data::*;
