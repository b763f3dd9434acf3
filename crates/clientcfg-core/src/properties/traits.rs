//! Property source trait

use std::time::Duration;

use crate::types::{Redirects, SslProperties, TransportKind};

/// A single layer of HTTP client configuration
///
/// Each accessor returns `None` when the layer does not define the setting,
/// letting the resolver fall through to the next layer.
///
/// Implementations:
/// - `ClientProperties`: In-memory snapshot
/// - `FileProperties`: YAML or JSON file
/// - `EnvProperties`: Environment variables
pub trait HttpClientProperties: Send + Sync {
    /// Human-readable name of this layer, used in logs
    fn name(&self) -> &str;

    /// Redirect policy
    fn redirects(&self) -> Option<Redirects>;

    /// Timeout for establishing a connection
    fn connect_timeout(&self) -> Option<Duration>;

    /// Timeout for reading from an established connection
    fn read_timeout(&self) -> Option<Duration>;

    /// SSL section, which may itself leave the bundle unset
    fn ssl(&self) -> Option<&SslProperties>;

    /// Explicit transport selection
    fn transport(&self) -> Option<TransportKind>;
}

/// Errors that can occur while loading a property source
#[derive(Debug, thiserror::Error)]
pub enum PropertiesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

impl PropertiesError {
    pub fn invalid_value(key: impl Into<String>, value: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

pub type PropertiesResult<T> = Result<T, PropertiesError>;
