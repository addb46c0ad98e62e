//! [`TestProject`] builder for module directories with a `package.json`.

use bundler_fs::{NormalizedPath, PACKAGE_JSON};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary module directory.
///
/// # Example
///
/// ```rust,no_run
/// use bundler_test_utils::project::TestProject;
/// use serde_json::json;
///
/// let project = TestProject::new();
/// project.write_bundler_options(json!({ "requiredExternals": ["lodash"] }), Some("^5.0.0"));
/// let cwd = project.mkdir("src/components");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The root as a [`NormalizedPath`], ready to hand to a resolver.
    pub fn cwd(&self) -> NormalizedPath {
        NormalizedPath::new(self.root())
    }

    /// Create `relative` (and any parents) under the root.
    pub fn mkdir(&self, relative: &str) -> NormalizedPath {
        let dir = self.root().join(relative);
        fs::create_dir_all(&dir)
            .unwrap_or_else(|e| panic!("Could not create {}: {e}", dir.display()));
        NormalizedPath::new(dir)
    }

    /// Write `manifest` as `package.json` inside `relative` (`""` for the root).
    pub fn write_manifest_in(&self, relative: &str, manifest: &Value) -> PathBuf {
        let dir = self.mkdir(relative).to_native();
        let path = dir.join(PACKAGE_JSON);
        let content = serde_json::to_string_pretty(manifest).unwrap();
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Could not write {}: {e}", path.display()));
        path
    }

    /// Write `manifest` as the root `package.json`.
    pub fn write_manifest(&self, manifest: &Value) -> PathBuf {
        self.write_manifest_in("", manifest)
    }

    /// Write a root `package.json` with `one-amex.bundler` set to `bundler`
    /// and, when given, `one-amex.app.compatibility`.
    pub fn write_bundler_options(&self, bundler: Value, compatibility: Option<&str>) -> PathBuf {
        let mut one_amex = json!({ "bundler": bundler });
        if let Some(version) = compatibility {
            one_amex["app"] = json!({ "compatibility": version });
        }
        self.write_manifest(&json!({
            "name": "test-module",
            "version": "1.0.0",
            "one-amex": one_amex,
        }))
    }
}
