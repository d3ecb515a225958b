//! Common constants used throughout the Carver application.

/// Extensions tried, in order, when a template reference omits one
pub const TEMPLATE_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];
