//! Filesystem layer for the bundler config resolver
//!
//! Provides normalized paths, JSON config loading and upward discovery of
//! the nearest `package.json`.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod locator;
pub mod path;

pub use config::ConfigStore;
pub use constants::PACKAGE_JSON;
pub use error::{Error, Result};
pub use locator::{ManifestLocator, NearestManifestLocator, PackageManifest, find_nearest};
pub use path::NormalizedPath;
