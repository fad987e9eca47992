//! Actions for fixing resource issues.
//!
//! Actions convert Issues into Operations and execute them.
//!
//! ## Architecture
//!
//! ```text
//! Issue (problem detected)
//!     ↓
//! Action (Issue → Operation conversion)
//!     ↓
//! Operation (low-level file operation)
//!     ↓
//! execute (file modification)
//! ```
//!
//! ## Actions
//!
//! - [`AppendMessages`]: Append missing messages to target locales (sync)
//! - [`RemoveKeyLines`]: Remove unused keys from a resource (unused --prune)

mod append_messages;
mod operation;
mod remove_key_lines;
mod traits;

pub use append_messages::AppendMessages;
pub use operation::{Operation, OperationResult};
pub use remove_key_lines::RemoveKeyLines;
pub use traits::{Action, ActionStats};
