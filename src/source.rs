//! Directive-keyed source entries.
//! A decoded template is a mapping whose keys carry a directive and an entry
//! name; this module gives those raw keys a typed, ordered representation.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fmt;

/// Directive kind of a template source entry.
///
/// The variant order matches the lexicographic order of the directive
/// keywords, so deriving `Ord` keeps `(directive, name)` sorting stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Directive {
    Dir,
    File,
    Link,
}

impl Directive {
    pub fn as_str(&self) -> &'static str {
        match self {
            Directive::Dir => "dir",
            Directive::File => "file",
            Directive::Link => "link",
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed `"<directive> <name>"` key of a template source entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct EntryKey {
    pub directive: Directive,
    pub name: String,
}

impl EntryKey {
    /// Splits a raw source key into its directive and entry name.
    ///
    /// The name may be empty (e.g. a bare `link` key that takes its name
    /// from the linked template).
    ///
    /// # Errors
    /// * `Error::UnknownDirectiveError` if the directive keyword is not
    ///   one of `dir`, `file` or `link`
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let (keyword, name) = match raw.split_once(char::is_whitespace) {
            Some((keyword, name)) => (keyword, name.trim_start()),
            None => (raw, ""),
        };

        let directive = match keyword {
            "dir" => Directive::Dir,
            "file" => Directive::File,
            "link" => Directive::Link,
            other => {
                return Err(Error::UnknownDirectiveError { directive: other.to_string() })
            }
        };

        Ok(Self { directive, name: name.to_string() })
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.directive)
        } else {
            write!(f, "{} {}", self.directive, self.name)
        }
    }
}

/// Payload of a `link` entry.
#[derive(Debug, Deserialize)]
pub struct LinkSpec {
    /// Reference to the template spliced in at the link's position
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_key_parse() {
        let key = EntryKey::parse("dir src").unwrap();
        assert_eq!(key.directive, Directive::Dir);
        assert_eq!(key.name, "src");

        let key = EntryKey::parse("file README.md").unwrap();
        assert_eq!(key.directive, Directive::File);
        assert_eq!(key.name, "README.md");

        // A bare directive has an empty name
        let key = EntryKey::parse("link").unwrap();
        assert_eq!(key.directive, Directive::Link);
        assert_eq!(key.name, "");
    }

    #[test]
    fn test_entry_key_parse_collapses_extra_whitespace() {
        let key = EntryKey::parse("  file   notes.txt ").unwrap();
        assert_eq!(key.directive, Directive::File);
        assert_eq!(key.name, "notes.txt");
    }

    #[test]
    fn test_entry_key_parse_unknown_directive() {
        let err = EntryKey::parse("symlink x").unwrap_err();
        match err {
            Error::UnknownDirectiveError { directive } => assert_eq!(directive, "symlink"),
            _ => panic!("Expected UnknownDirectiveError variant"),
        }
    }

    #[test]
    fn test_entry_key_ordering() {
        let mut keys = vec![
            EntryKey::parse("link extras").unwrap(),
            EntryKey::parse("file z.txt").unwrap(),
            EntryKey::parse("dir b").unwrap(),
            EntryKey::parse("file a.txt").unwrap(),
            EntryKey::parse("dir a").unwrap(),
        ];
        keys.sort();

        let rendered: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        assert_eq!(rendered, ["dir a", "dir b", "file a.txt", "file z.txt", "link extras"]);
    }
}
