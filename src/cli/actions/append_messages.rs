//! AppendMessages action.
//!
//! Appends source messages to the target locales that lack them.
//! Used by the `ftlsync sync` command.

use super::operation::Operation;
use super::traits::Action;
use crate::issues::MissingKeyIssue;

/// Action to append missing messages to target resources.
///
/// Issues are grouped by target file, keeping the order in which each file
/// first appears, so every target is rewritten once.
pub struct AppendMessages;

impl Action<MissingKeyIssue> for AppendMessages {
    fn to_operations(issues: &[MissingKeyIssue]) -> Vec<Operation> {
        let mut ops: Vec<Operation> = Vec::new();
        for issue in issues {
            let existing = ops.iter_mut().find_map(|op| match op {
                Operation::AppendMessages {
                    file_path,
                    messages,
                } if *file_path == issue.target_file => Some(messages),
                _ => None,
            });
            match existing {
                Some(messages) => messages.push(issue.message.clone()),
                None => ops.push(Operation::AppendMessages {
                    file_path: issue.target_file.clone(),
                    messages: vec![issue.message.clone()],
                }),
            }
        }
        ops
    }
}
