//! Core data types shared by the parser, the key extractor and the rules.
//!
//! ## Module Structure
//!
//! - `message`: Location types for issues in resource files (MessageLocation, MessageContext)
//! - `resource`: Structural model of a resource (LocaleResource, Entry, Message, Attribute, Junk)

pub mod message;
pub mod resource;

pub use message::{MessageContext, MessageLocation};
pub use resource::{Attribute, Entry, Junk, JunkReason, LocaleResource, Message};
