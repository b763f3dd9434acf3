//! Explicit transport selector

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{normalize_variant, ParseVariantError};
use crate::transport::TransportBuilder;

/// A concrete HTTP client implementation a property source can pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum TransportKind {
    /// `reqwest::Client`
    Reqwest,
    /// `hyper_util` legacy client over a plain `HttpConnector`
    Hyper,
}

impl TransportKind {
    /// All built-in transports, most preferred first
    pub const ALL: [TransportKind; 2] = [TransportKind::Reqwest, TransportKind::Hyper];

    /// Builder for this transport
    pub fn builder(self) -> TransportBuilder {
        TransportBuilder::new(self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportKind::Reqwest => "reqwest",
            TransportKind::Hyper => "hyper",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportKind {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_variant(s).as_str() {
            "reqwest" => Ok(TransportKind::Reqwest),
            "hyper" => Ok(TransportKind::Hyper),
            _ => Err(ParseVariantError::new("transport", s)),
        }
    }
}

impl TryFrom<String> for TransportKind {
    type Error = ParseVariantError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
