//! Name-label substitution for Carver templates.
//! Entry names may carry `{label}` placeholders; a `Labels` set replaces
//! each known placeholder with its value, exactly once, at the point a plan
//! node is constructed.

use crate::error::Result;
use indexmap::IndexMap;
use regex::{Captures, Regex};

/// An ordered set of label substitutions plus the compiled placeholder
/// pattern. Placeholders are written as the label key wrapped in braces,
/// e.g. `{module_name}`.
#[derive(Debug)]
pub struct Labels {
    values: IndexMap<String, String>,
    pattern: Regex,
}

impl Labels {
    /// Creates a label set from a mapping of placeholder keys to values.
    ///
    /// # Errors
    /// * `Error::RegexError` if the placeholder pattern fails to compile
    pub fn new(values: IndexMap<String, String>) -> Result<Self> {
        let pattern = Regex::new(r"\{([A-Za-z0-9_]+)\}")?;
        Ok(Self { values, pattern })
    }

    /// Creates an empty label set; `apply` then returns names unchanged.
    pub fn empty() -> Result<Self> {
        Self::new(IndexMap::new())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Substitutes known placeholders in `name` with their label values.
    ///
    /// A placeholder with no matching label is left as-is; label coverage
    /// is the caller's responsibility.
    pub fn apply(&self, name: &str) -> String {
        if self.values.is_empty() {
            return name.to_string();
        }

        self.pattern
            .replace_all(name, |caps: &Captures| match self.values.get(&caps[1]) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}
