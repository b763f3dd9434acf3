//! TLS bundle abstractions
//!
//! A TLS bundle is a named set of PEM material. Property sources refer to
//! bundles by name; the resolver looks the name up through the `SslBundles`
//! trait:
//! - `SslBundleRegistry`: thread-safe in-memory registry
//! - Custom implementations (vault, file watcher, etc.)

mod traits;
mod bundle;
mod registry;

pub use traits::{SslBundles, SslBundleError, SslBundleResult};
pub use bundle::{SslBundle, PemLocations};
pub use registry::SslBundleRegistry;
