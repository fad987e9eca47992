//! RemoveKeyLines action.
//!
//! Removes the lines of unused keys from their resource file.
//! Used by `ftlsync unused --prune`.

use super::operation::Operation;
use super::traits::Action;
use crate::issues::UnusedKeyIssue;

/// Action to remove unused keys, one operation per resource file.
pub struct RemoveKeyLines;

impl Action<UnusedKeyIssue> for RemoveKeyLines {
    fn to_operations(issues: &[UnusedKeyIssue]) -> Vec<Operation> {
        let mut ops: Vec<Operation> = Vec::new();
        for issue in issues {
            let existing = ops.iter_mut().find_map(|op| match op {
                Operation::RemoveKeyLines { file_path, keys }
                    if file_path.as_str() == issue.context.file_path() =>
                {
                    Some(keys)
                }
                _ => None,
            });
            match existing {
                Some(keys) => keys.push(issue.context.key.clone()),
                None => ops.push(Operation::RemoveKeyLines {
                    file_path: issue.context.file_path().to_string(),
                    keys: vec![issue.context.key.clone()],
                }),
            }
        }
        ops
    }
}
