//! Transport construction errors

use thiserror::Error;

use crate::types::TransportKind;

/// Errors that can occur while building a transport
#[derive(Error, Debug)]
pub enum TransportError {
    /// The transport cannot honour a resolved setting
    #[error("{transport} transport does not support {setting}")]
    UnsupportedSetting {
        transport: TransportKind,
        setting: &'static str,
    },

    /// PEM material in a TLS bundle could not be parsed
    #[error("Invalid PEM material in SSL bundle '{bundle}': {source}")]
    InvalidPem {
        bundle: String,
        #[source]
        source: reqwest::Error,
    },

    /// The reqwest client builder failed
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

impl TransportError {
    pub fn unsupported(transport: TransportKind, setting: &'static str) -> Self {
        Self::UnsupportedSetting { transport, setting }
    }
}

pub type TransportResult<T> = Result<T, TransportError>;
