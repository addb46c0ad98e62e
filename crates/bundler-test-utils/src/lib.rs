//! Shared test utilities for the bundler-config workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`project`] — [`project::TestProject`] builder for `package.json` fixtures
//! - [`locator`] — [`locator::CountingLocator`] for asserting manifest reads

pub mod locator;
pub mod project;
