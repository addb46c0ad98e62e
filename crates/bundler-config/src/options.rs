//! The bundler options schema

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const PROVIDED_EXTERNALS: &str = "providedExternals";
pub const REQUIRED_EXTERNALS: &str = "requiredExternals";
pub const WEBPACK_CONFIG_PATH: &str = "webpackConfigPath";
pub const APP_COMPATIBILITY: &str = "appCompatibility";
pub const PURGECSS: &str = "purgecss";
pub const WEBPACK_CLIENT_CONFIG_PATH: &str = "webpackClientConfigPath";
pub const WEBPACK_SERVER_CONFIG_PATH: &str = "webpackServerConfigPath";

/// Every key accepted inside `one-amex.bundler`.
pub const ALLOWED_OPTIONS: [&str; 7] = [
    PROVIDED_EXTERNALS,
    REQUIRED_EXTERNALS,
    WEBPACK_CONFIG_PATH,
    APP_COMPATIBILITY,
    PURGECSS,
    WEBPACK_CLIENT_CONFIG_PATH,
    WEBPACK_SERVER_CONFIG_PATH,
];

/// Validated bundler options for a module.
///
/// Built once by [`ConfigResolver`](crate::ConfigResolver) and shared
/// read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BundlerOptions {
    /// Modules this bundle supplies to its consumers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provided_externals: Option<Vec<String>>,

    /// Modules this bundle expects the host to supply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_externals: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webpack_config_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webpack_client_config_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webpack_server_config_path: Option<String>,

    /// Always copied from `one-amex.app.compatibility`
    #[serde(default)]
    pub app_compatibility: Option<String>,

    #[serde(default)]
    pub purgecss: Map<String, Value>,
}

/// Which direction, if any, a module declares externals in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalsDeclaration<'a> {
    None,
    Provided(&'a [String]),
    Required(&'a [String]),
}

impl BundlerOptions {
    pub fn externals(&self) -> ExternalsDeclaration<'_> {
        match (&self.provided_externals, &self.required_externals) {
            (Some(provided), _) => ExternalsDeclaration::Provided(provided),
            (None, Some(required)) => ExternalsDeclaration::Required(required),
            (None, None) => ExternalsDeclaration::None,
        }
    }

    /// True when any of the three webpack override paths is set.
    pub fn has_custom_webpack_config(&self) -> bool {
        self.webpack_config_path.is_some()
            || self.webpack_client_config_path.is_some()
            || self.webpack_server_config_path.is_some()
    }
}

/// A key counts as present when it exists with a non-null value.
pub(crate) fn present<'a>(options: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    options.get(key).filter(|value| !value.is_null())
}
