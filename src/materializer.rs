//! Filesystem materialization of resolved plans.
//! Walks a plan tree in strict pre-order and creates the corresponding
//! directories and files. Creation is exclusive: an existing target is a
//! path conflict, never an overwrite or merge. There is no rollback; on
//! failure, entries created so far are left in place.

use crate::error::{Error, Result};
use crate::plan::Plan;
use log::debug;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Creates the filesystem entries for `node` and all of its descendants
/// under `host_dir`.
pub fn materialize<P: AsRef<Path>>(node: &Plan, host_dir: P) -> Result<()> {
    materialize_node(node, host_dir.as_ref(), true)
}

/// Creates the filesystem entry for `node` under `host_dir`.
///
/// A directory is created before any of its children; children are created
/// in plan order. With `recursive` false only the node itself is created.
///
/// # Errors
/// * `Error::PathConflictError` if the target name already exists
/// * `Error::IoError` for other filesystem failures
pub fn materialize_node(node: &Plan, host_dir: &Path, recursive: bool) -> Result<()> {
    match node {
        Plan::Directory(dir) => {
            let target = host_dir.join(dir.name());
            debug!("Creating directory {}", target.display());
            create_directory(&target)?;

            if recursive {
                for child in dir.children() {
                    materialize_node(child, &target, recursive)?;
                }
            }
            Ok(())
        }
        Plan::File(file) => {
            let target = host_dir.join(file.name());
            debug!("Creating file {}", target.display());
            create_file(&target, file.literal())
        }
    }
}

fn create_directory(path: &Path) -> Result<()> {
    fs::create_dir(path).map_err(|e| conflict_or_io(e, path))
}

fn create_file(path: &Path, content: Option<&str>) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| conflict_or_io(e, path))?;

    if let Some(content) = content {
        file.write_all(content.as_bytes()).map_err(Error::IoError)?;
    }
    Ok(())
}

/// Tells an already-existing target apart from other I/O failures.
fn conflict_or_io(err: io::Error, path: &Path) -> Error {
    if err.kind() == io::ErrorKind::AlreadyExists {
        Error::PathConflictError { path: path.display().to_string() }
    } else {
        Error::IoError(err)
    }
}
