//! Resolve-once access to bundler options
//!
//! `LazyConfigOptions` owns a resolver and resolves on the first `get()`.
//! Later calls return the cached `Arc` without reading the manifest again.
//! A failed resolution is not cached, so the error surfaces to every caller
//! until a resolution succeeds.
//!
//! Concurrent first calls are serialized: one thread resolves while the
//! others wait, then read the cached value.

use crate::{BundlerOptions, ConfigResolver, Result};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// Lazily resolved, then immutable, bundler options.
#[derive(Debug)]
pub struct LazyConfigOptions {
    resolver: ConfigResolver,
    options: OnceLock<Arc<BundlerOptions>>,
    init: Mutex<()>,
}

impl LazyConfigOptions {
    pub fn new(resolver: ConfigResolver) -> Self {
        Self {
            resolver,
            options: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    /// Return the options, resolving them on first use.
    pub fn get(&self) -> Result<Arc<BundlerOptions>> {
        resolve_once(&self.options, &self.init, || self.resolver.resolve())
    }

    pub fn is_resolved(&self) -> bool {
        self.options.get().is_some()
    }
}

static CONFIG_OPTIONS: OnceLock<Arc<BundlerOptions>> = OnceLock::new();
static CONFIG_INIT: Mutex<()> = Mutex::new(());

/// Process-wide bundler options for the current working directory.
///
/// The first successful call resolves from `std::env::current_dir()`;
/// every later call returns the same `Arc`.
pub fn config_options() -> Result<Arc<BundlerOptions>> {
    resolve_once(&CONFIG_OPTIONS, &CONFIG_INIT, || {
        ConfigResolver::from_current_dir()?.resolve()
    })
}

fn resolve_once(
    cell: &OnceLock<Arc<BundlerOptions>>,
    init: &Mutex<()>,
    resolve: impl FnOnce() -> Result<BundlerOptions>,
) -> Result<Arc<BundlerOptions>> {
    if let Some(options) = cell.get() {
        return Ok(Arc::clone(options));
    }

    // A resolver that panicked cached nothing
    let _guard = init.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(options) = cell.get() {
        return Ok(Arc::clone(options));
    }

    let resolved = Arc::new(resolve()?);
    Ok(Arc::clone(cell.get_or_init(|| resolved)))
}
