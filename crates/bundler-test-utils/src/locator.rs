//! Manifest locator that records how often it was asked to read.

use bundler_fs::{ManifestLocator, NearestManifestLocator, NormalizedPath, PackageManifest};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Wraps [`NearestManifestLocator`] and counts `locate` calls.
///
/// Clone the handle from [`CountingLocator::calls`] before moving the
/// locator into a resolver.
#[derive(Debug, Default)]
pub struct CountingLocator {
    inner: NearestManifestLocator,
    calls: Arc<AtomicUsize>,
    delay: Option<Duration>,
}

impl CountingLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep for `delay` on every `locate`, widening the window in which
    /// concurrent callers can race.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> CallCount {
        CallCount(Arc::clone(&self.calls))
    }
}

impl ManifestLocator for CountingLocator {
    fn locate(&self, cwd: &NormalizedPath) -> bundler_fs::Result<PackageManifest> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        self.inner.locate(cwd)
    }
}

/// Shared view of a [`CountingLocator`]'s call count.
#[derive(Debug, Clone)]
pub struct CallCount(Arc<AtomicUsize>);

impl CallCount {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}
