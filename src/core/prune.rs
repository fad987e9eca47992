//! Format-preserving removal of unused key lines.

use std::collections::HashSet;

use crate::core::{keys::KeyLine, parsers::syntax::LineKind};

/// Text of a resource after pruning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pruned {
    pub text: String,
    pub removed_lines: usize,
}

impl Pruned {
    pub fn is_changed(&self) -> bool {
        self.removed_lines > 0
    }
}

/// Rebuild the text from `lines`, dropping every line whose key is unused.
///
/// Lines without a key are always kept. Kept lines are copied unchanged.
/// A message whose attribute lines are not all removed keeps its own lines,
/// so no attribute is left without its message.
pub fn prune_lines(lines: &[KeyLine<'_>], unused: &HashSet<String>) -> Pruned {
    let anchored = anchored_messages(lines, unused);
    let mut text = String::new();
    let mut removed_lines = 0;
    for line in lines {
        let removable = !line.key.is_empty()
            && unused.contains(&line.key)
            && !anchored.contains(line.key.as_str());
        if removable {
            removed_lines += 1;
        } else {
            text.push_str(line.text);
        }
    }
    Pruned {
        text,
        removed_lines,
    }
}

/// Ids of messages that still own at least one attribute after pruning.
fn anchored_messages<'k>(
    lines: &'k [KeyLine<'_>],
    unused: &HashSet<String>,
) -> HashSet<&'k str> {
    lines
        .iter()
        .filter(|l| l.kind == LineKind::Attribute && !unused.contains(&l.key))
        .filter_map(|l| l.key.split_once('.').map(|(root, _)| root))
        .collect()
}
