//! clientcfg core
//!
//! Picks the HTTP client transport and its redirect, timeout and TLS
//! settings from a prioritized list of property sources.
//!
//! ## Resolution
//!
//! Sources are ordered highest priority first. For every setting the first
//! source that defines it wins; later sources only fill the gaps.
//!
//! ```rust,ignore
//! use clientcfg_core::{ClientSettingsResolver, AvailableTransports};
//!
//! let resolver = ClientSettingsResolver::new(bundles, vec![service, workspace, user, env]);
//! let settings = resolver.settings()?;
//! let transport = resolver.builder(&AvailableTransports::all()).build(&settings)?;
//! ```

pub mod types;
pub mod properties;
pub mod ssl;
pub mod resolver;
pub mod transport;

// Re-export commonly used types
pub use types::{ClientSettings, Redirects, SslProperties, TransportKind, ParseVariantError};

pub use properties::{
    HttpClientProperties, PropertiesError, PropertiesResult,
    ClientProperties, FileProperties, PropertiesLevel, EnvProperties,
};

pub use ssl::{SslBundle, SslBundles, SslBundleRegistry, SslBundleError, SslBundleResult, PemLocations};

pub use resolver::{OrderedProperties, ClientSettingsResolver, BundleNamePolicy};

pub use transport::{
    TransportBuilder, TransportDetector, AvailableTransports,
    HttpTransport, HyperClient, TransportError, TransportResult,
};
