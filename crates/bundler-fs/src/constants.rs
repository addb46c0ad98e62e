//! Well-known file names.

/// File name of the host project's package manifest.
pub const PACKAGE_JSON: &str = "package.json";
