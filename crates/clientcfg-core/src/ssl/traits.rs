//! Registry trait and errors for TLS bundles

use std::sync::Arc;

use thiserror::Error;

use super::bundle::SslBundle;

/// Errors that can occur while registering or looking up bundles
#[derive(Error, Debug)]
pub enum SslBundleError {
    #[error("SSL bundle name '{0}' cannot be found")]
    NoSuchBundle(String),

    #[error("SSL bundle name '{0}' is already registered")]
    DuplicateBundle(String),

    #[error("Failed to read PEM material from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type SslBundleResult<T> = Result<T, SslBundleError>;

/// Lookup of TLS bundles by name
///
/// Implementations:
/// - `SslBundleRegistry`: in-memory, for applications and tests
/// - Custom implementations backed by a secret manager
pub trait SslBundles: Send + Sync {
    /// Get the bundle registered under `name`
    ///
    /// Returns `Err(SslBundleError::NoSuchBundle)` if nothing is registered.
    fn get_bundle(&self, name: &str) -> SslBundleResult<Arc<SslBundle>>;

    /// Names of all registered bundles
    fn bundle_names(&self) -> Vec<String>;

    /// Check if a bundle exists
    fn has_bundle(&self, name: &str) -> bool {
        self.get_bundle(name).is_ok()
    }
}
