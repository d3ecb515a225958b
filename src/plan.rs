//! Resolved plan tree entities.
//! A plan is the pure, immutable-after-construction output of template
//! parsing: a tree of directories and files ready for materialization.
//! Construction never fails; failures belong to the parser.

use serde_json::Value;
use std::fmt;

/// A node of a resolved plan tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Plan {
    Directory(DirectoryPlan),
    File(FilePlan),
}

/// A directory to create, together with its ordered children.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryPlan {
    name: String,
    children: Vec<Plan>,
}

/// A file to create, optionally with literal content.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePlan {
    name: String,
    content: Option<Value>,
}

impl DirectoryPlan {
    pub fn new<S: Into<String>>(name: S, children: Vec<Plan>) -> Self {
        Self { name: name.into(), children }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Plan] {
        &self.children
    }

    /// Looks up a child by position in plan order.
    pub fn child(&self, index: usize) -> Option<&Plan> {
        self.children.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl FilePlan {
    pub fn new<S: Into<String>>(name: S, content: Option<Value>) -> Self {
        Self { name: name.into(), content }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw content payload, held verbatim from the template source.
    pub fn content(&self) -> Option<&Value> {
        self.content.as_ref()
    }

    /// Extracts the literal text to write, if the payload carries any.
    ///
    /// A string payload is written verbatim; a mapping payload contributes
    /// its `content` field. Anything else means an empty file.
    pub fn literal(&self) -> Option<&str> {
        match self.content.as_ref()? {
            Value::String(text) => Some(text),
            Value::Object(fields) => fields.get("content").and_then(Value::as_str),
            _ => None,
        }
    }
}

impl Plan {
    pub fn name(&self) -> &str {
        match self {
            Plan::Directory(dir) => dir.name(),
            Plan::File(file) => file.name(),
        }
    }

    /// Looks up a child by position; files have none.
    pub fn child(&self, index: usize) -> Option<&Plan> {
        match self {
            Plan::Directory(dir) => dir.child(index),
            Plan::File(_) => None,
        }
    }

    pub fn as_directory(&self) -> Option<&DirectoryPlan> {
        match self {
            Plan::Directory(dir) => Some(dir),
            Plan::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&FilePlan> {
        match self {
            Plan::Directory(_) => None,
            Plan::File(file) => Some(file),
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            Plan::Directory(dir) => {
                writeln!(f, "{}{}/", indent, dir.name())?;
                for child in dir.children() {
                    child.render(f, depth + 1)?;
                }
                Ok(())
            }
            Plan::File(file) => writeln!(f, "{}{}", indent, file.name()),
        }
    }
}

/// Indented tree listing, used by the dry-run preview.
impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, 0)
    }
}
