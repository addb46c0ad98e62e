//! Advisory warnings for risky but valid configurations

use crate::BundlerOptions;
use std::fmt;

/// A non-fatal configuration concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigWarning {
    /// One of the webpack config override paths is set
    CustomWebpackConfig,
}

impl ConfigWarning {
    pub fn message(&self) -> &'static str {
        match self {
            Self::CustomWebpackConfig => {
                "one-app-bundler: Using a custom webpack config can cause unintended side effects. Issues resulting from custom configuration will not be supported."
            }
        }
    }
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Log a warning for each risky option and return what was logged.
pub fn log_configuration_warnings(options: &BundlerOptions) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if options.has_custom_webpack_config() {
        warnings.push(ConfigWarning::CustomWebpackConfig);
    }

    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    warnings
}
