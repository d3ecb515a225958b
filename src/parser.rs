//! Recursive template parsing and link resolution for Carver.
//! Turns a root template reference into a fully resolved plan tree:
//! entries are processed in sorted `(directive, name)` order, `link`
//! directives splice in other templates, and a branch-scoped visited set
//! rejects cyclic link chains.

use crate::decoder::{decode_template, inferred_name, resolve_template_path, SourceMap};
use crate::error::{Error, Result};
use crate::labels::Labels;
use crate::plan::{DirectoryPlan, FilePlan, Plan};
use crate::source::{Directive, EntryKey, LinkSpec};
use log::debug;
use serde_json::Value;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Parses a root template into a resolved `DirectoryPlan`.
///
/// The root node is named `name` when provided and non-empty, otherwise the
/// template's own base name without extension. Labels are applied to every
/// node name exactly once, at construction.
///
/// # Errors
/// * `Error::TemplateNotFoundError` / `Error::DecodeError` from the decoder
/// * `Error::UnknownDirectiveError` for a directive outside file, dir, link
/// * `Error::RecursionError` if link resolution revisits a template already
///   being expanded on the current branch
pub fn parse<P: AsRef<Path>>(
    root_template: P,
    name: Option<&str>,
    labels: &Labels,
) -> Result<DirectoryPlan> {
    let mut visited = HashSet::new();
    parse_template(root_template.as_ref(), name, labels, &mut visited)
}

/// Expands one template as the root of a resolution branch.
///
/// The template's canonical path joins the visited set before its entries
/// are parsed and leaves it once the branch completes, so a template may be
/// reused from independent branches but never from its own descendants.
fn parse_template(
    template: &Path,
    name: Option<&str>,
    labels: &Labels,
    visited: &mut HashSet<PathBuf>,
) -> Result<DirectoryPlan> {
    let template_path = resolve_template_path(template)?;

    if visited.contains(&template_path) {
        return Err(Error::RecursionError {
            template: template_path.display().to_string(),
        });
    }
    visited.insert(template_path.clone());

    debug!("Expanding template {}", template_path.display());

    let root_name = match name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => inferred_name(&template_path),
    };

    let plan = decode_template(&template_path)
        .and_then(|source| parse_source(&source, root_name, &template_path, labels, visited));

    visited.remove(&template_path);
    plan
}

/// Parses one source mapping into a directory node.
///
/// Entries are sorted by `(directive, name)` so repeated parses of the same
/// template yield an identical tree regardless of source iteration order.
fn parse_source(
    source: &SourceMap,
    name: String,
    template_path: &Path,
    labels: &Labels,
    visited: &mut HashSet<PathBuf>,
) -> Result<DirectoryPlan> {
    let mut entries = source
        .iter()
        .map(|(raw, payload)| EntryKey::parse(raw).map(|key| (key, payload)))
        .collect::<Result<Vec<_>>>()?;
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut children = Vec::with_capacity(entries.len());
    for (key, payload) in entries {
        children.push(parse_entry(&key, payload, template_path, labels, visited)?);
    }

    Ok(DirectoryPlan::new(labels.apply(&name), children))
}

/// Parses a single `(directive, name)` entry into a plan node.
fn parse_entry(
    key: &EntryKey,
    payload: &Value,
    template_path: &Path,
    labels: &Labels,
    visited: &mut HashSet<PathBuf>,
) -> Result<Plan> {
    debug!("Parsing entry '{}'", key);

    match key.directive {
        Directive::File => {
            // The payload stays opaque; the materializer decides what
            // literal content it carries.
            let content = (!payload.is_null()).then(|| payload.clone());
            Ok(Plan::File(FilePlan::new(labels.apply(&key.name), content)))
        }
        Directive::Dir => match payload {
            Value::Null => {
                Ok(Plan::Directory(DirectoryPlan::new(labels.apply(&key.name), Vec::new())))
            }
            Value::Object(entries) => {
                parse_source(entries, key.name.clone(), template_path, labels, visited)
                    .map(Plan::Directory)
            }
            _ => Err(malformed_entry(template_path, key, "a mapping of entries or null")),
        },
        Directive::Link => {
            let link: LinkSpec = serde_json::from_value(payload.clone())
                .map_err(|_| malformed_entry(template_path, key, "a mapping with a 'path' field"))?;

            let target = resolve_link_target(template_path, &link.path);
            let name = (!key.name.is_empty()).then_some(key.name.as_str());

            parse_template(&target, name, labels, visited).map(Plan::Directory)
        }
    }
}

/// Resolves a link's `path` value relative to the referencing template.
fn resolve_link_target(template_path: &Path, raw: &str) -> PathBuf {
    let target = Path::new(raw);
    if target.is_absolute() {
        return target.to_path_buf();
    }
    match template_path.parent() {
        Some(dir) => dir.join(target),
        None => target.to_path_buf(),
    }
}

fn malformed_entry(template_path: &Path, key: &EntryKey, expected: &str) -> Error {
    Error::DecodeError {
        template: template_path.display().to_string(),
        reason: format!("'{}' expects {}", key, expected),
    }
}
