//! Core value types shared by property sources, the resolver and transports

mod redirects;
mod settings;
mod transport;

pub use redirects::Redirects;
pub use settings::{ClientSettings, SslProperties};
pub use transport::TransportKind;

/// Error returned when a textual setting does not name a known variant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseVariantError {
    /// What was being parsed (e.g. "redirect policy")
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
}

impl ParseVariantError {
    pub(crate) fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Lowercase a setting and fold `_` into `-` so `DONT_FOLLOW` and `dont-follow` compare equal
pub(crate) fn normalize_variant(value: &str) -> String {
    value.trim().to_lowercase().replace('_', "-")
}
