//! Line grammar of the Fluent resource dialect.
//!
//! Both the resource parser and the raw-line key extractor classify lines
//! through [`classify`], so the two paths agree on what a message, an
//! attribute or a malformed line is.

use std::sync::LazyLock;

use regex::Regex;

static ENTRY_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-)?([A-Za-z][A-Za-z0-9_-]*)[ \t]*=[ \t]*(.*?)[ \t]*$").unwrap()
});

static ATTRIBUTE_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]*\.([A-Za-z][A-Za-z0-9_-]*)[ \t]*=[ \t]*(.*?)[ \t]*$").unwrap()
});

/// Kind of a single resource line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Blank,
    Comment,
    Message,
    Term,
    Attribute,
    /// Indented text continuing the value of the entry above it.
    Continuation,
    /// Attribute line with no message to attach to.
    Orphan,
    Invalid,
}

/// A classified line, borrowing identifiers and values from the line text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Comment,
    /// `id = value` at column 0.
    Message { id: &'a str, value: &'a str },
    /// `-id = value` at column 0. The id is stored without the dash.
    Term { id: &'a str, value: &'a str },
    /// `    .id = value`.
    Attribute { id: &'a str, value: &'a str },
    /// Indented text, or a closing `}` of a multiline placeable.
    Continuation(&'a str),
    Invalid,
}

impl Line<'_> {
    pub fn kind(&self) -> LineKind {
        match self {
            Line::Blank => LineKind::Blank,
            Line::Comment => LineKind::Comment,
            Line::Message { .. } => LineKind::Message,
            Line::Term { .. } => LineKind::Term,
            Line::Attribute { .. } => LineKind::Attribute,
            Line::Continuation(_) => LineKind::Continuation,
            Line::Invalid => LineKind::Invalid,
        }
    }
}

/// Split text into lines, keeping each line's terminator.
///
/// Concatenating the returned slices yields the input unchanged.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split_inclusive('\n')
}

/// Strip a trailing `\n` or `\r\n`.
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Classify one line (with or without its terminator).
pub fn classify(line: &str) -> Line<'_> {
    let content = strip_line_ending(line);
    let trimmed = content.trim_start();

    if trimmed.trim_end().is_empty() {
        return Line::Blank;
    }
    if content.starts_with('#') {
        return Line::Comment;
    }
    if trimmed.starts_with('.') {
        return match ATTRIBUTE_LINE_REGEX.captures(content) {
            Some(caps) => Line::Attribute {
                id: caps.get(1).map_or("", |m| m.as_str()),
                value: caps.get(2).map_or("", |m| m.as_str()),
            },
            None => Line::Invalid,
        };
    }
    if trimmed.len() != content.len() || content.starts_with('}') {
        return Line::Continuation(trimmed.trim_end());
    }

    match ENTRY_LINE_REGEX.captures(content) {
        Some(caps) => {
            let id = caps.get(2).map_or("", |m| m.as_str());
            let value = caps.get(3).map_or("", |m| m.as_str());
            if caps.get(1).is_some() {
                Line::Term { id, value }
            } else {
                Line::Message { id, value }
            }
        }
        None => Line::Invalid,
    }
}
