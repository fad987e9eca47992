//! Missing-key reconciliation between a source locale and a target locale.
//!
//! Only top-level message ids are compared. A target message that exists but
//! lacks some of the source message's attributes counts as present and is
//! left as it is.

use std::collections::HashSet;

use crate::core::{LocaleResource, Message};

/// Source messages whose id does not appear among the target's messages.
///
/// Returned in source order; a duplicated source id is returned once.
pub fn missing_messages<'a>(source: &'a LocaleResource, target: &LocaleResource) -> Vec<&'a Message> {
    let mut known: HashSet<&str> = target.message_ids();
    source
        .messages()
        .filter(|message| known.insert(message.id.as_str()))
        .collect()
}

/// Append every missing source message to the end of `target`.
///
/// Returns the ids that were added; an empty result means `target` was not
/// modified.
pub fn reconcile(source: &LocaleResource, target: &mut LocaleResource) -> Vec<String> {
    let missing: Vec<Message> = missing_messages(source, target)
        .into_iter()
        .cloned()
        .collect();
    let added = missing.iter().map(|message| message.id.clone()).collect();
    target.append_messages(missing);
    added
}
