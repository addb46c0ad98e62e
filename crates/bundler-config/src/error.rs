//! Error types for bundler-config

use std::path::PathBuf;

/// Result type for bundler-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while resolving bundler options.
///
/// Every variant is fatal for resolution; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No `package.json` in the working directory or any ancestor
    #[error("No package.json found in {start} or any parent directory")]
    ManifestNotFound { start: PathBuf },

    /// Unrecognized key, or a recognized key with a value of the wrong shape
    #[error("one-app-bundler: Wrong syntax used for bundler options: {message}")]
    InvalidOptionSyntax { message: String },

    #[error(
        "one-app-bundler: Modules cannot configure both requiredExternals and providedExternals. See README for details."
    )]
    ConflictingExternalsDeclaration,

    #[error("one-app-bundler: {key} must be an array of module name strings")]
    InvalidExternalsType { key: &'static str },

    /// Declared externals that the host already provides, in registry order
    #[error(
        "one-app-bundler: Attempted to bundle {}, but modules cannot provide externals that One App includes.",
        .names.join(", ")
    )]
    ReservedExternalName { names: Vec<String> },

    #[error(
        "one-app-bundler: Modules cannot configure both webpackConfigPath and webpackClientConfigPath or webpackServerConfigPath. See README for details."
    )]
    ConflictingWebpackConfigPath,

    /// Filesystem error from bundler-fs
    #[error(transparent)]
    Fs(bundler_fs::Error),
}

/// Discriminant of [`Error`] for callers that branch on the failure type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ManifestNotFound,
    InvalidOptionSyntax,
    ConflictingExternalsDeclaration,
    InvalidExternalsType,
    ReservedExternalName,
    ConflictingWebpackConfigPath,
    Fs,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ManifestNotFound { .. } => ErrorKind::ManifestNotFound,
            Self::InvalidOptionSyntax { .. } => ErrorKind::InvalidOptionSyntax,
            Self::ConflictingExternalsDeclaration => ErrorKind::ConflictingExternalsDeclaration,
            Self::InvalidExternalsType { .. } => ErrorKind::InvalidExternalsType,
            Self::ReservedExternalName { .. } => ErrorKind::ReservedExternalName,
            Self::ConflictingWebpackConfigPath => ErrorKind::ConflictingWebpackConfigPath,
            Self::Fs(_) => ErrorKind::Fs,
        }
    }

    pub(crate) fn syntax(message: impl Into<String>) -> Self {
        Self::InvalidOptionSyntax {
            message: message.into(),
        }
    }
}

impl From<bundler_fs::Error> for Error {
    fn from(error: bundler_fs::Error) -> Self {
        match error {
            bundler_fs::Error::ManifestNotFound { start } => Self::ManifestNotFound { start },
            other => Self::Fs(other),
        }
    }
}
