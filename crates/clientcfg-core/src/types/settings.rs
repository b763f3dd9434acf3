//! Source-side SSL reference and the resolved settings bundle

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::Redirects;
use crate::ssl::SslBundle;

/// SSL section of a property source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SslProperties {
    /// Name of the TLS bundle to look up in the registry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle: Option<String>,
}

impl SslProperties {
    pub fn bundle(name: impl Into<String>) -> Self {
        Self {
            bundle: Some(name.into()),
        }
    }
}

/// Settings resolved across all property sources
///
/// Every field is optional: `None` means no source defined it and the
/// transport keeps its own default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientSettings {
    pub redirects: Option<Redirects>,
    pub connect_timeout: Option<Duration>,
    pub read_timeout: Option<Duration>,
    pub ssl_bundle: Option<Arc<SslBundle>>,
}

impl ClientSettings {
    pub fn new(
        redirects: Option<Redirects>,
        connect_timeout: Option<Duration>,
        read_timeout: Option<Duration>,
        ssl_bundle: Option<Arc<SslBundle>>,
    ) -> Self {
        Self {
            redirects,
            connect_timeout,
            read_timeout,
            ssl_bundle,
        }
    }

    /// The redirect policy to apply, `FollowWhenPossible` when none resolved
    pub fn effective_redirects(&self) -> Redirects {
        Redirects::of(self.redirects)
    }

    /// Name of the resolved TLS bundle, if any
    pub fn ssl_bundle_name(&self) -> Option<&str> {
        self.ssl_bundle.as_deref().map(|b| b.name.as_str())
    }
}
