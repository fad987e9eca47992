use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::syntax::{Line, classify, split_lines};
use crate::core::{Attribute, Entry, Junk, JunkReason, LocaleResource, Message};

/// Read and parse an FTL file.
///
/// A missing or unreadable file is an error; malformed lines inside the
/// file are not (they become [`Entry::Junk`]).
pub fn parse_ftl_file(path: &Path) -> Result<LocaleResource> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read FTL file: {}", path.display()))?;
    Ok(parse_resource(&content))
}

/// Parse resource text into an ordered entry sequence.
///
/// Never fails: every line ends up in some entry, so serializing the result
/// gives back `text` unchanged.
pub fn parse_resource(text: &str) -> LocaleResource {
    let mut parser = ResourceParser::default();
    for (idx, raw) in split_lines(text).enumerate() {
        parser.feed(idx + 1, raw);
    }
    parser.finish()
}

/// Entry still accepting indented lines.
enum Open {
    Message(Message),
    Term(Message),
    Junk(Junk),
}

impl Open {
    fn push_raw(&mut self, raw: &str) {
        match self {
            Open::Message(message) | Open::Term(message) => message.push_raw(raw),
            Open::Junk(junk) => junk.content.push_str(raw),
        }
    }

    fn into_entry(self) -> Entry {
        match self {
            Open::Message(message) => Entry::Message(message),
            Open::Term(message) => Entry::Term(message),
            Open::Junk(junk) => Entry::Junk(junk),
        }
    }
}

#[derive(Default)]
struct ResourceParser<'a> {
    entries: Vec<Entry>,
    open: Option<Open>,
    /// Blank lines seen while an entry is open. They belong to the entry only
    /// if an indented line follows.
    pending_blanks: Vec<&'a str>,
}

impl<'a> ResourceParser<'a> {
    fn feed(&mut self, line_no: usize, raw: &'a str) {
        match classify(raw) {
            Line::Blank => {
                if self.open.is_some() {
                    self.pending_blanks.push(raw);
                } else {
                    self.entries.push(Entry::Blank(raw.to_string()));
                }
            }
            Line::Continuation(text) => match self.open.as_mut() {
                Some(open) => {
                    for blank in self.pending_blanks.drain(..) {
                        open.push_raw(blank);
                    }
                    open.push_raw(raw);
                    if let Open::Message(message) | Open::Term(message) = open {
                        message.push_continuation(text);
                    }
                }
                None => self.open_junk(line_no, raw, JunkReason::OrphanContinuation),
            },
            Line::Attribute { id, value } => match self.open.as_mut() {
                Some(Open::Message(message) | Open::Term(message)) => {
                    for blank in self.pending_blanks.drain(..) {
                        message.push_raw(blank);
                    }
                    message
                        .attributes
                        .push(Attribute::parsed(id, value, line_no, raw));
                }
                Some(Open::Junk(junk)) => {
                    for blank in self.pending_blanks.drain(..) {
                        junk.content.push_str(blank);
                    }
                    junk.content.push_str(raw);
                }
                None => self.open_junk(line_no, raw, JunkReason::OrphanAttribute),
            },
            Line::Comment => {
                self.close();
                self.entries.push(Entry::Comment(raw.to_string()));
            }
            Line::Message { id, value } => {
                self.close();
                self.open = Some(Open::Message(Message::parsed(id, value, line_no, raw)));
            }
            Line::Term { id, value } => {
                self.close();
                self.open = Some(Open::Term(Message::parsed(id, value, line_no, raw)));
            }
            Line::Invalid => self.open_junk(line_no, raw, JunkReason::InvalidLine),
        }
    }

    fn open_junk(&mut self, line_no: usize, raw: &str, reason: JunkReason) {
        self.close();
        self.open = Some(Open::Junk(Junk {
            line: line_no,
            reason,
            content: raw.to_string(),
        }));
    }

    /// Close the open entry and flush held-back blank lines after it.
    fn close(&mut self) {
        if let Some(open) = self.open.take() {
            self.entries.push(open.into_entry());
        }
        for blank in self.pending_blanks.drain(..) {
            self.entries.push(Entry::Blank(blank.to_string()));
        }
    }

    fn finish(mut self) -> LocaleResource {
        self.close();
        LocaleResource::new(self.entries)
    }
}
