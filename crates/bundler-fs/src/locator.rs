//! Discovery of the nearest package manifest
//!
//! Starting from a working directory, the locator checks each directory up
//! to the filesystem root for a `package.json` and parses the first one it
//! finds.

use crate::{ConfigStore, Error, NormalizedPath, PACKAGE_JSON, Result};
use serde_json::Value;

/// A parsed package manifest together with the path it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageManifest {
    path: NormalizedPath,
    document: Value,
}

impl PackageManifest {
    pub fn new(path: NormalizedPath, document: Value) -> Self {
        Self { path, document }
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Look up a nested value by key path.
    ///
    /// Returns `None` when any segment is missing or an intermediate value
    /// is not an object.
    pub fn get_path(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter()
            .try_fold(&self.document, |value, key| value.as_object()?.get(*key))
    }
}

/// Finds and loads the package manifest that applies to a directory.
pub trait ManifestLocator: Send + Sync {
    fn locate(&self, cwd: &NormalizedPath) -> Result<PackageManifest>;
}

/// Find `file_name` in `start` or the closest ancestor directory containing it.
pub fn find_nearest(start: &NormalizedPath, file_name: &str) -> Option<NormalizedPath> {
    start
        .ancestors()
        .map(|dir| dir.join(file_name))
        .find(NormalizedPath::is_file)
}

/// Default locator: ascends the real filesystem looking for `package.json`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestManifestLocator {
    store: ConfigStore,
}

impl NearestManifestLocator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ManifestLocator for NearestManifestLocator {
    fn locate(&self, cwd: &NormalizedPath) -> Result<PackageManifest> {
        // Relative or symlinked working directories would stop the walk early
        let start = dunce::canonicalize(cwd.to_native())
            .map(NormalizedPath::new)
            .unwrap_or_else(|_| cwd.clone());

        let Some(path) = find_nearest(&start, PACKAGE_JSON) else {
            tracing::debug!(%start, "No package manifest found");
            return Err(Error::ManifestNotFound {
                start: start.to_native(),
            });
        };

        tracing::debug!(%path, "Loading nearest package manifest");
        let document: Value = self.store.load(&path)?;
        Ok(PackageManifest::new(path, document))
    }
}
