//! Resolution of bundler options from the nearest package manifest
//!
//! The `ConfigResolver` locates the manifest, reads the bundler block,
//! applies defaults and the derived compatibility value, validates the
//! result and logs advisory warnings.

use crate::options::{APP_COMPATIBILITY, PURGECSS};
use crate::{
    BundlerOptions, Error, HostExternals, Result, log_configuration_warnings, validate_options,
};
use bundler_fs::{ManifestLocator, NearestManifestLocator, NormalizedPath, PackageManifest};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Location of the bundler options block in `package.json`
pub const BUNDLER_OPTIONS_PATH: [&str; 2] = ["one-amex", "bundler"];

/// Location of the app compatibility declaration in `package.json`
pub const APP_COMPATIBILITY_PATH: [&str; 3] = ["one-amex", "app", "compatibility"];

/// Resolves bundler options for a working directory.
///
/// Collaborators are injectable so tests can swap the manifest locator or
/// the host externals registry without touching the real filesystem.
pub struct ConfigResolver {
    cwd: NormalizedPath,
    locator: Arc<dyn ManifestLocator>,
    host_externals: HostExternals,
}

impl ConfigResolver {
    /// Create a resolver that searches upward from `cwd` on the real
    /// filesystem and checks against the built-in host externals.
    pub fn new(cwd: NormalizedPath) -> Self {
        Self {
            cwd,
            locator: Arc::new(NearestManifestLocator::new()),
            host_externals: HostExternals::with_builtins(),
        }
    }

    /// Create a resolver for the process working directory.
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| bundler_fs::Error::io(".", e))?;
        Ok(Self::new(NormalizedPath::new(cwd)))
    }

    pub fn with_locator(mut self, locator: impl ManifestLocator + 'static) -> Self {
        self.locator = Arc::new(locator);
        self
    }

    pub fn with_host_externals(mut self, host_externals: HostExternals) -> Self {
        self.host_externals = host_externals;
        self
    }

    /// Resolve the options.
    ///
    /// Either every check passes and the options are returned, or the first
    /// failing check is returned as an error.
    pub fn resolve(&self) -> Result<BundlerOptions> {
        let manifest = self.locator.locate(&self.cwd)?;
        tracing::debug!(manifest = %manifest.path(), "Resolving bundler options");

        let mut raw = bundler_block(&manifest)?;

        // Never user-settable: always replaced by the app-level declaration
        let app_compatibility = manifest
            .get_path(&APP_COMPATIBILITY_PATH)
            .and_then(Value::as_str)
            .map_or(Value::Null, |version| Value::String(version.to_string()));
        raw.insert(APP_COMPATIBILITY.to_string(), app_compatibility);

        if raw.get(PURGECSS).is_none_or(is_falsy) {
            raw.insert(PURGECSS.to_string(), Value::Object(Map::new()));
        }

        validate_options(&raw, &self.host_externals)?;

        let options: BundlerOptions =
            serde_json::from_value(Value::Object(raw)).map_err(|e| Error::syntax(e.to_string()))?;

        log_configuration_warnings(&options);
        tracing::debug!(externals = ?options.externals(), "Bundler options resolved");

        Ok(options)
    }

    /// Resolve now and return an accessor that hands out the same options
    /// on every call.
    pub fn accessor(&self) -> Result<impl Fn() -> Arc<BundlerOptions> + Send + Sync + use<>> {
        let options = Arc::new(self.resolve()?);
        Ok(move || Arc::clone(&options))
    }
}

impl fmt::Debug for ConfigResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigResolver")
            .field("cwd", &self.cwd)
            .field("host_externals", &self.host_externals)
            .finish_non_exhaustive()
    }
}

fn bundler_block(manifest: &PackageManifest) -> Result<Map<String, Value>> {
    match manifest.get_path(&BUNDLER_OPTIONS_PATH) {
        None | Some(Value::Null) => Ok(Map::new()),
        Some(Value::Object(options)) => Ok(options.clone()),
        Some(other) => Err(Error::syntax(format!(
            "expected an object at {}, found {}",
            BUNDLER_OPTIONS_PATH.join("."),
            json_type(other)
        ))),
    }
}

/// `null`, `false`, `0` and `""` switch an option off the way an unset one does.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
