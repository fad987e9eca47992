//! Key extraction.
//!
//! Keys are message ids (`login-button`) and qualified attribute ids
//! (`login-button.title`). They can be taken from a parsed resource, or
//! straight from raw lines when each key must stay tied to the text that
//! produced it (the pruning path).

use crate::core::{
    LocaleResource,
    parsers::syntax::{Line, LineKind, classify, split_lines},
};

/// A resource line together with the key it belongs to.
///
/// `key` is empty for lines that do not define or continue a key (blank
/// lines, comments, terms, malformed lines).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyLine<'a> {
    pub key: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// The line exactly as written, terminator included.
    pub text: &'a str,
    pub kind: LineKind,
}

/// Running state of the line fold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyScope {
    /// Id of the most recent message; attribute lines are qualified with it.
    pub root: Option<String>,
    /// Key that continuation lines belong to (message or attribute).
    pub current: Option<String>,
    /// Inside a term: its attributes are valid but define no key.
    pub in_term: bool,
}

impl KeyScope {
    /// Advance the scope over one line, returning the next scope together
    /// with the key and kind assigned to the line.
    pub fn advance(&self, line: &Line<'_>) -> (KeyScope, String, LineKind) {
        match line {
            Line::Blank => (self.clone(), String::new(), LineKind::Blank),
            Line::Message { id, .. } => {
                let key = id.to_string();
                let next = KeyScope {
                    root: Some(key.clone()),
                    current: Some(key.clone()),
                    in_term: false,
                };
                (next, key, LineKind::Message)
            }
            Line::Attribute { id, .. } => match &self.root {
                Some(root) => {
                    let key = format!("{}.{}", root, id);
                    let next = KeyScope {
                        root: Some(root.clone()),
                        current: Some(key.clone()),
                        in_term: false,
                    };
                    (next, key, LineKind::Attribute)
                }
                None if self.in_term => (self.clone(), String::new(), LineKind::Attribute),
                None => (KeyScope::default(), String::new(), LineKind::Orphan),
            },
            Line::Continuation(_) => (
                self.clone(),
                self.current.clone().unwrap_or_default(),
                LineKind::Continuation,
            ),
            Line::Term { .. } => {
                let next = KeyScope {
                    in_term: true,
                    ..KeyScope::default()
                };
                (next, String::new(), LineKind::Term)
            }
            Line::Comment | Line::Invalid => (KeyScope::default(), String::new(), line.kind()),
        }
    }
}

/// Extract `(key, line)` pairs from raw resource text.
///
/// Every line of `text` appears exactly once in the output, in order.
pub fn extract_key_lines(text: &str) -> Vec<KeyLine<'_>> {
    let (_, lines) = split_lines(text).enumerate().fold(
        (KeyScope::default(), Vec::new()),
        |(scope, mut lines), (idx, raw)| {
            let (next, key, kind) = scope.advance(&classify(raw));
            lines.push(KeyLine {
                key,
                line: idx + 1,
                text: raw,
                kind,
            });
            (next, lines)
        },
    );
    lines
}

/// Keys defined by key lines, in order, each reported once.
pub fn distinct_keys(lines: &[KeyLine<'_>]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    lines
        .iter()
        .filter(|l| matches!(l.kind, LineKind::Message | LineKind::Attribute))
        .filter(|l| !l.key.is_empty())
        .filter(|l| seen.insert(l.key.as_str()))
        .map(|l| l.key.clone())
        .collect()
}

/// Extract `(key, line)` pairs from a parsed resource.
///
/// Attributes are qualified with their message id. Terms are not keys.
pub fn resource_keys(resource: &LocaleResource) -> Vec<(String, usize)> {
    resource
        .messages()
        .flat_map(|message| {
            std::iter::once((message.id.clone(), message.line)).chain(
                message
                    .attributes
                    .iter()
                    .map(|attr| (attr.key(&message.id), attr.line)),
            )
        })
        .collect()
}
