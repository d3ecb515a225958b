//! Raw template decoding for Carver.
//! This module resolves template references to canonical paths and decodes
//! template sources into directive-keyed mappings.
//! Supports JSON and YAML formats.

use crate::constants::TEMPLATE_EXTENSIONS;
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// A decoded template source: directive-keyed entries with opaque payloads.
pub type SourceMap = serde_json::Map<String, serde_json::Value>;

/// Canonicalizes a template reference into a stable, comparable identifier.
///
/// The canonical path doubles as the identity used for link cycle detection,
/// so it must resolve before any visited-set check. A reference that does not
/// name an existing file is retried with each well-known template extension.
///
/// # Errors
/// * `Error::TemplateNotFoundError` if no candidate file exists
pub fn resolve_template_path<P: AsRef<Path>>(template: P) -> Result<PathBuf> {
    let template = template.as_ref();

    let candidate = if template.is_file() {
        template.to_path_buf()
    } else {
        TEMPLATE_EXTENSIONS
            .iter()
            .map(|ext| template.with_extension(ext))
            .find(|path| path.is_file())
            .ok_or_else(|| Error::TemplateNotFoundError {
                template: template.display().to_string(),
            })?
    };

    fs::canonicalize(&candidate).map_err(Error::IoError)
}

/// Reads and decodes a template source file into a `SourceMap`.
///
/// Tries JSON first, then YAML, mirroring the configuration formats Carver
/// accepts. The decoded root must be a mapping; a null document decodes to
/// an empty mapping (a template with no entries).
///
/// # Errors
/// * `Error::DecodeError` if the file cannot be read, neither format parses,
///   or the root is not a mapping
pub fn decode_template(template_path: &Path) -> Result<SourceMap> {
    debug!("Decoding template {}", template_path.display());

    let content = fs::read_to_string(template_path).map_err(|e| Error::DecodeError {
        template: template_path.display().to_string(),
        reason: e.to_string(),
    })?;

    let value: serde_json::Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(_) => serde_yaml::from_str(&content).map_err(|e| Error::DecodeError {
            template: template_path.display().to_string(),
            reason: e.to_string(),
        })?,
    };

    match value {
        serde_json::Value::Null => Ok(SourceMap::new()),
        serde_json::Value::Object(entries) => Ok(entries),
        _ => Err(Error::DecodeError {
            template: template_path.display().to_string(),
            reason: "expected a mapping of directive-keyed entries".to_string(),
        }),
    }
}

/// Infers a template's name from its path: the base name without extension.
pub fn inferred_name(template_path: &Path) -> String {
    template_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
