//! Validation of the raw `one-amex.bundler` block
//!
//! Checks run in a fixed order so the same input always yields the same
//! error: unknown keys, externals direction, externals shape and
//! collisions, then webpack config paths.

use crate::options::{
    ALLOWED_OPTIONS, PROVIDED_EXTERNALS, REQUIRED_EXTERNALS, WEBPACK_CLIENT_CONFIG_PATH,
    WEBPACK_CONFIG_PATH, WEBPACK_SERVER_CONFIG_PATH, present,
};
use crate::{Error, HostExternals, Result};
use serde_json::{Map, Value};

/// Validate raw bundler options against the allowed keys and the host
/// externals registry.
pub fn validate_options(
    options: &Map<String, Value>,
    host_externals: &HostExternals,
) -> Result<()> {
    let unrecognized: Vec<&str> = options
        .keys()
        .map(String::as_str)
        .filter(|key| !ALLOWED_OPTIONS.contains(key))
        .collect();
    if !unrecognized.is_empty() {
        return Err(Error::syntax(format!(
            "unrecognized option(s) {}; allowed options are {}",
            unrecognized.join(", "),
            ALLOWED_OPTIONS.join(", ")
        )));
    }

    validate_externals(options, host_externals)?;

    if present(options, WEBPACK_CONFIG_PATH).is_some()
        && (present(options, WEBPACK_CLIENT_CONFIG_PATH).is_some()
            || present(options, WEBPACK_SERVER_CONFIG_PATH).is_some())
    {
        return Err(Error::ConflictingWebpackConfigPath);
    }

    Ok(())
}

fn validate_externals(options: &Map<String, Value>, host_externals: &HostExternals) -> Result<()> {
    let declared = match (
        present(options, REQUIRED_EXTERNALS),
        present(options, PROVIDED_EXTERNALS),
    ) {
        (Some(_), Some(_)) => return Err(Error::ConflictingExternalsDeclaration),
        (Some(required), None) => (REQUIRED_EXTERNALS, required),
        (None, Some(provided)) => (PROVIDED_EXTERNALS, provided),
        (None, None) => return Ok(()),
    };

    let (key, value) = declared;
    let names = module_names(value).ok_or(Error::InvalidExternalsType { key })?;

    let collisions = host_externals.collisions(&names);
    if !collisions.is_empty() {
        return Err(Error::ReservedExternalName { names: collisions });
    }

    Ok(())
}

fn module_names(value: &Value) -> Option<Vec<&str>> {
    value.as_array()?.iter().map(Value::as_str).collect()
}
