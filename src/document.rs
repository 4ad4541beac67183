//! INI document representation.
//!
//! A `Document` owns an ordered sequence of `Section`s; each `Section`
//! owns an ordered sequence of `Key`s. Lookup is a linear scan by exact
//! name and the first match wins, so duplicate names inserted by parse
//! remain as siblings that lookup never reaches.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Trim ASCII whitespace from both ends of a string slice.
fn trim_ascii(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_ascii_whitespace())
}

/// A single `name = value` entry within a section.
///
/// Names and values never carry leading or trailing ASCII whitespace;
/// trimming is applied at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    name: String,
    value: String,
}

impl Key {
    pub(crate) fn new(name: &str, value: &str) -> Self {
        Self {
            name: trim_ascii(name).to_string(),
            value: trim_ascii(value).to_string(),
        }
    }

    /// Returns the key name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the key value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A named, ordered collection of keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    keys: Vec<Key>,
}

impl Section {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: trim_ascii(name).to_string(),
            keys: Vec::new(),
        }
    }

    /// Returns the section name. The implicit preamble section has the
    /// empty name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the keys in insertion order.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Returns the value of the first key with the given name, or
    /// `None` if the section has no such key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.keys
            .iter()
            .find(|k| k.name == key)
            .map(|k| k.value.as_str())
    }

    pub(crate) fn push_key(&mut self, key: Key) {
        self.keys.push(key);
    }

    fn set(&mut self, key: &str, value: &str) {
        let name = trim_ascii(key);
        match self.keys.iter_mut().find(|k| k.name == name) {
            Some(existing) => existing.value = trim_ascii(value).to_string(),
            None => self.keys.push(Key::new(key, value)),
        }
    }
}

/// An INI document: an ordered sequence of sections.
///
/// Created empty with [`Document::new`] or populated with
/// [`crate::parse`]. Dropping the document releases every owned section
/// and key; [`Document::clear`] does the same explicitly and may be
/// called any number of times.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the sections in document order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns `true` if the document has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns the value for `key` in the first section named `section`,
    /// or `None` if either is missing. Pass the empty string as the
    /// section name to look up keys that appeared before any header.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.iter().find(|s| s.name == section)?.get(key)
    }

    /// Insert or update a key.
    ///
    /// A missing section or key is created and appended at the end of
    /// its list, the same order parsing produces; an existing key has
    /// its value overwritten in place. Names and values are trimmed of
    /// ASCII whitespace like parsed input.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        let name = trim_ascii(section);
        let pos = match self.sections.iter().position(|s| s.name == name) {
            Some(pos) => pos,
            None => {
                self.sections.push(Section::new(section));
                self.sections.len() - 1
            }
        };
        self.sections[pos].set(key, value);
    }

    /// Remove every section and key. A no-op on an already-empty
    /// document.
    pub fn clear(&mut self) {
        self.sections.clear();
    }

    pub(crate) fn push_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// The section new keys attach to during parsing: the most recently
    /// opened one, or the implicit preamble section created on demand.
    pub(crate) fn tail_section_mut(&mut self) -> &mut Section {
        if self.sections.is_empty() {
            self.sections.push(Section::new(""));
        }
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::encode::encode(self))
    }
}

impl FromStr for Document {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}
