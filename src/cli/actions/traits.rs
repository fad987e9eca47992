//! Action trait definition.
//!
//! Actions convert Issues into Operations. Each Action can be implemented
//! for multiple Issue types, providing type-safe handling.

use std::collections::HashSet;

use anyhow::Result;

use super::operation::Operation;

/// Statistics from running an action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionStats {
    /// Number of operations processed.
    pub processed: usize,
    /// Number of operations that left their file unchanged.
    pub skipped: usize,
    /// Number of keys added or lines removed.
    pub changes_applied: usize,
    /// Number of files modified.
    pub files_modified: usize,
}

/// Action trait - converts Issues into Operations and executes them.
///
/// # Example
///
/// ```ignore
/// if check {
///     AppendMessages::preview(&issues);
/// } else {
///     AppendMessages::run(&issues)?;
/// }
/// ```
pub trait Action<I> {
    /// Convert issues to low-level operations.
    ///
    /// This is the only method that must be implemented.
    fn to_operations(issues: &[I]) -> Vec<Operation>;

    /// Execute the action (modify files).
    fn run(issues: &[I]) -> Result<ActionStats> {
        let ops = Self::to_operations(issues);
        execute_operations(&ops)
    }

    /// Preview the action (dry-run mode).
    fn preview(issues: &[I]) {
        let ops = Self::to_operations(issues);
        for op in &ops {
            op.preview();
        }
    }
}

/// Execute operations in order, one file write at most per operation.
fn execute_operations(ops: &[Operation]) -> Result<ActionStats> {
    let mut files_modified: HashSet<&str> = HashSet::new();
    let mut stats = ActionStats {
        processed: ops.len(),
        ..Default::default()
    };

    for op in ops {
        let result = op.execute()?;
        if result.is_applied() {
            stats.changes_applied += result.changes();
            files_modified.insert(op.file_path());
        } else {
            stats.skipped += 1;
        }
    }

    stats.files_modified = files_modified.len();
    Ok(stats)
}
