//! Structural model of a Fluent locale resource.
//!
//! A [`LocaleResource`] is an ordered list of [`Entry`] values. Every entry
//! keeps the exact text it was parsed from, so serializing an untouched
//! resource reproduces the original file byte for byte.

use std::{collections::HashSet, fmt};

/// A sub-entry scoped to a message (`    .placeholder = Type here`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub id: String,
    pub value: String,
    /// Line number (1-indexed) in the file it was parsed from, 0 if built in code.
    pub line: usize,
    source: String,
}

impl Attribute {
    #[cfg(test)]
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        let id = id.into();
        let value = value.into();
        let source = format!("    .{} = {}\n", id, value);
        Self {
            id,
            value,
            line: 0,
            source,
        }
    }

    pub(crate) fn parsed(id: &str, value: &str, line: usize, raw: &str) -> Self {
        Self {
            id: id.to_string(),
            value: value.to_string(),
            line,
            source: raw.to_string(),
        }
    }

    /// Qualified key of this attribute under `message_id`.
    pub fn key(&self, message_id: &str) -> String {
        format!("{}.{}", message_id, self.id)
    }

    /// Exact text of the attribute, including continuation lines.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// A top-level translatable unit (`settings-title = Settings`).
///
/// Terms (`-brand = Uplink`) share this shape and are stored in
/// [`Entry::Term`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    /// `None` for messages that only carry attributes.
    pub value: Option<String>,
    pub attributes: Vec<Attribute>,
    /// Line number (1-indexed) in the file it was parsed from, 0 if built in code.
    pub line: usize,
    /// Header line plus continuation lines of the value.
    source: String,
}

impl Message {
    #[cfg(test)]
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        let id = id.into();
        let value = value.into();
        let source = format!("{} = {}\n", id, value);
        Self {
            id,
            value: Some(value),
            attributes: Vec::new(),
            line: 0,
            source,
        }
    }

    #[cfg(test)]
    pub fn with_attribute(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(id, value));
        self
    }

    pub(crate) fn parsed(id: &str, value: &str, line: usize, raw: &str) -> Self {
        Self {
            id: id.to_string(),
            value: (!value.is_empty()).then(|| value.to_string()),
            attributes: Vec::new(),
            line,
            source: raw.to_string(),
        }
    }

    /// Keys this message defines: its id followed by each qualified attribute.
    #[cfg(test)]
    pub fn keys(&self) -> Vec<String> {
        std::iter::once(self.id.clone())
            .chain(self.attributes.iter().map(|attr| attr.key(&self.id)))
            .collect()
    }

    /// Exact text of the message, attributes included.
    #[cfg(test)]
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    pub(crate) fn write_to(&self, out: &mut String) {
        out.push_str(&self.source);
        for attr in &self.attributes {
            out.push_str(&attr.source);
        }
    }

    /// Append a raw line to the last part of the message (last attribute, or
    /// the value when there are no attributes).
    pub(crate) fn push_raw(&mut self, raw: &str) {
        match self.attributes.last_mut() {
            Some(attr) => attr.source.push_str(raw),
            None => self.source.push_str(raw),
        }
    }

    /// Extend the value of the last part with a continuation line.
    pub(crate) fn push_continuation(&mut self, text: &str) {
        let value = match self.attributes.last_mut() {
            Some(attr) => &mut attr.value,
            None => self.value.get_or_insert_with(String::new),
        };
        if !value.is_empty() {
            value.push('\n');
        }
        value.push_str(text);
    }

    fn ends_with_newline(&self) -> bool {
        match self.attributes.last() {
            Some(attr) => attr.source.ends_with('\n'),
            None => self.source.ends_with('\n'),
        }
    }

    /// Rewrite every line terminator of the message to `line_ending`.
    fn with_line_ending(mut self, line_ending: &str) -> Self {
        self.source = convert_line_endings(&self.source, line_ending);
        for attr in &mut self.attributes {
            attr.source = convert_line_endings(&attr.source, line_ending);
        }
        self
    }
}

fn convert_line_endings(text: &str, line_ending: &str) -> String {
    text.split_inclusive('\n')
        .map(|line| match line.strip_suffix('\n') {
            Some(body) => {
                format!("{}{}", body.strip_suffix('\r').unwrap_or(body), line_ending)
            }
            None => line.to_string(),
        })
        .collect()
}

/// Why a run of lines could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JunkReason {
    /// Line at column 0 that is neither a message, a term nor a comment.
    InvalidLine,
    /// Attribute line with no message above it.
    OrphanAttribute,
    /// Indented line with no entry above it.
    OrphanContinuation,
}

impl fmt::Display for JunkReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JunkReason::InvalidLine => write!(f, "expected `key = value`"),
            JunkReason::OrphanAttribute => write!(f, "attribute without a message"),
            JunkReason::OrphanContinuation => write!(f, "indented text without an entry"),
        }
    }
}

/// Unparseable text kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Junk {
    /// Line number (1-indexed) of the first junk line.
    pub line: usize,
    pub reason: JunkReason,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Message(Message),
    Term(Message),
    Comment(String),
    Blank(String),
    Junk(Junk),
}

impl Entry {
    pub(crate) fn write_to(&self, out: &mut String) {
        match self {
            Entry::Message(message) | Entry::Term(message) => message.write_to(out),
            Entry::Comment(text) | Entry::Blank(text) => out.push_str(text),
            Entry::Junk(junk) => out.push_str(&junk.content),
        }
    }

    fn ends_with_newline(&self) -> bool {
        match self {
            Entry::Message(message) | Entry::Term(message) => message.ends_with_newline(),
            Entry::Comment(text) | Entry::Blank(text) => text.ends_with('\n'),
            Entry::Junk(junk) => junk.content.ends_with('\n'),
        }
    }

    fn push_raw(&mut self, raw: &str) {
        match self {
            Entry::Message(message) | Entry::Term(message) => message.push_raw(raw),
            Entry::Comment(text) | Entry::Blank(text) => text.push_str(raw),
            Entry::Junk(junk) => junk.content.push_str(raw),
        }
    }
}

/// One locale's translation file as an ordered entry sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleResource {
    pub entries: Vec<Entry>,
}

impl LocaleResource {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Top-level messages in file order (terms excluded).
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Message(message) => Some(message),
            _ => None,
        })
    }

    #[cfg(test)]
    pub fn message(&self, id: &str) -> Option<&Message> {
        self.messages().find(|message| message.id == id)
    }

    pub fn message_ids(&self) -> HashSet<&str> {
        self.messages().map(|message| message.id.as_str()).collect()
    }

    pub fn junk(&self) -> impl Iterator<Item = &Junk> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Junk(junk) => Some(junk),
            _ => None,
        })
    }

    /// Terminator of the first line (`\r\n` or `\n`), `None` when the
    /// resource has no terminated line.
    pub fn line_ending(&self) -> Option<&'static str> {
        let mut first = String::new();
        if let Some(entry) = self.entries.first() {
            entry.write_to(&mut first);
        }
        first
            .find('\n')
            .map(|pos| if first[..pos].ends_with('\r') { "\r\n" } else { "\n" })
    }

    /// Append messages to the end of the resource.
    ///
    /// The last existing line is terminated first so appended messages start
    /// on a line of their own. Appended messages take the resource's line
    /// ending; a resource with no terminated line keeps theirs.
    pub fn append_messages(&mut self, messages: impl IntoIterator<Item = Message>) {
        let mut messages = messages.into_iter().peekable();
        if messages.peek().is_none() {
            return;
        }
        let detected = self.line_ending();
        if let Some(last) = self.entries.last_mut()
            && !last.ends_with_newline()
        {
            last.push_raw(detected.unwrap_or("\n"));
        }
        match detected {
            Some(line_ending) => self.entries.extend(
                messages.map(|message| Entry::Message(message.with_line_ending(line_ending))),
            ),
            None => self.entries.extend(messages.map(Entry::Message)),
        }
    }
}
