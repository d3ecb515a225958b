//! Carver turns a declarative, hierarchical template description into an
//! in-memory plan and materializes that plan on a real filesystem.
//! It is used to bootstrap new project skeletons from reusable, composable
//! templates.

/// Command-line interface module for the Carver application
pub mod cli;

/// Common constants used throughout the application
pub mod constants;

/// Template reference resolution and raw source decoding
/// Supports JSON and YAML template sources
pub mod decoder;

/// Error types and handling for the Carver application
pub mod error;

/// Name-label substitution applied to plan node names
pub mod labels;

/// Logger configuration
pub mod logger;

/// Filesystem materialization of resolved plan trees
pub mod materializer;

/// Recursive template parsing and link resolution
/// Produces the ordered, cycle-free plan tree
pub mod parser;

/// Resolved plan tree entities and read-only traversal
pub mod plan;

/// Directive-keyed template source entries
pub mod source;
