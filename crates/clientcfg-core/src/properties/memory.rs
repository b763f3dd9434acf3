//! In-memory property source

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::traits::HttpClientProperties;
use crate::types::{Redirects, SslProperties, TransportKind};

const DEFAULT_NAME: &str = "memory";

/// A plain snapshot of HTTP client properties
///
/// This is also the document shape read by `FileProperties`:
///
/// ```yaml
/// redirects: dont-follow
/// connect-timeout: 5s
/// read-timeout: 30s
/// ssl:
///   bundle: mtls
/// transport: reqwest
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClientProperties {
    /// Layer name used in logs (not serialized)
    #[serde(skip)]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirects: Option<Redirects>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "super::duration::option")]
    pub connect_timeout: Option<Duration>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "super::duration::option")]
    pub read_timeout: Option<Duration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl: Option<SslProperties>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport: Option<TransportKind>,
}

impl ClientProperties {
    /// Create an empty, named layer
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_redirects(mut self, redirects: Redirects) -> Self {
        self.redirects = Some(redirects);
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Reference a TLS bundle by name
    pub fn with_ssl_bundle(mut self, bundle: impl Into<String>) -> Self {
        self.ssl = Some(SslProperties::bundle(bundle));
        self
    }

    pub fn with_ssl(mut self, ssl: SslProperties) -> Self {
        self.ssl = Some(ssl);
        self
    }

    pub fn with_transport(mut self, transport: TransportKind) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Whether this layer defines no setting at all
    pub fn is_empty(&self) -> bool {
        self.redirects.is_none()
            && self.connect_timeout.is_none()
            && self.read_timeout.is_none()
            && self.ssl.is_none()
            && self.transport.is_none()
    }
}

impl HttpClientProperties for ClientProperties {
    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_NAME)
    }

    fn redirects(&self) -> Option<Redirects> {
        self.redirects
    }

    fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout
    }

    fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout
    }

    fn ssl(&self) -> Option<&SslProperties> {
        self.ssl.as_ref()
    }

    fn transport(&self) -> Option<TransportKind> {
        self.transport
    }
}
