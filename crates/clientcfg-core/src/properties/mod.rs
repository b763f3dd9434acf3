//! HTTP client property sources
//!
//! Every source exposes the same accessors through `HttpClientProperties`:
//! - `ClientProperties`: in-memory snapshot, also the serialized file shape
//! - `FileProperties`: YAML/JSON file (user or workspace level)
//! - `EnvProperties`: environment variables under a prefix

/// Implement `HttpClientProperties` for a source that wraps a parsed
/// `ClientProperties` snapshot in a `properties` field and carries its own
/// `name`.
macro_rules! snapshot_properties {
    ($source:ty) => {
        impl $crate::properties::HttpClientProperties for $source {
            fn name(&self) -> &str {
                &self.name
            }

            fn redirects(&self) -> Option<$crate::types::Redirects> {
                $crate::properties::HttpClientProperties::redirects(&self.properties)
            }

            fn connect_timeout(&self) -> Option<std::time::Duration> {
                $crate::properties::HttpClientProperties::connect_timeout(&self.properties)
            }

            fn read_timeout(&self) -> Option<std::time::Duration> {
                $crate::properties::HttpClientProperties::read_timeout(&self.properties)
            }

            fn ssl(&self) -> Option<&$crate::types::SslProperties> {
                $crate::properties::HttpClientProperties::ssl(&self.properties)
            }

            fn transport(&self) -> Option<$crate::types::TransportKind> {
                $crate::properties::HttpClientProperties::transport(&self.properties)
            }
        }
    };
}

mod traits;
mod memory;
mod file;
mod env;
pub mod duration;

pub use traits::{HttpClientProperties, PropertiesError, PropertiesResult};
pub use memory::ClientProperties;
pub use file::{FileProperties, PropertiesLevel};
pub use env::EnvProperties;
