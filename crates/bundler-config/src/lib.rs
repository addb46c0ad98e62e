//! Bundler options resolution
//!
//! Reads the `one-amex.bundler` block from the nearest `package.json`,
//! derives `appCompatibility` from `one-amex.app.compatibility`, validates
//! the result and exposes it through a resolve-once accessor.
//!
//! # Example
//!
//! ```ignore
//! use bundler_config::{ConfigResolver, LazyConfigOptions};
//! use bundler_fs::NormalizedPath;
//!
//! let options = LazyConfigOptions::new(ConfigResolver::new(NormalizedPath::new("/path/to/module")));
//! let resolved = options.get()?;
//! println!("{:?}", resolved.externals());
//! ```

pub mod accessor;
pub mod error;
pub mod externals;
pub mod logging;
pub mod options;
pub mod resolver;
pub mod validation;
pub mod warnings;

pub use accessor::{LazyConfigOptions, config_options};
pub use error::{Error, ErrorKind, Result};
pub use externals::HostExternals;
pub use options::{ALLOWED_OPTIONS, BundlerOptions, ExternalsDeclaration};
pub use resolver::ConfigResolver;
pub use validation::validate_options;
pub use warnings::{ConfigWarning, log_configuration_warnings};
