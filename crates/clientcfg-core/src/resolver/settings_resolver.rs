//! Resolution of client settings and transport selection

use std::sync::Arc;

use super::ordered::{has_length, has_text, is_present, OrderedProperties};
use crate::properties::HttpClientProperties;
use crate::ssl::{SslBundleResult, SslBundles};
use crate::transport::{TransportBuilder, TransportDetector};
use crate::types::{ClientSettings, TransportKind};

/// Which bundle names count as "set" during resolution
///
/// A name that does not count is skipped and resolution moves on to the
/// next source, so an explicit empty override never blocks a lower layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BundleNamePolicy {
    /// Skip only empty names
    #[default]
    NonEmpty,
    /// Skip empty and whitespace-only names
    NonBlank,
}

impl BundleNamePolicy {
    fn accepts(self, name: &Option<&str>) -> bool {
        match self {
            BundleNamePolicy::NonEmpty => has_length(name),
            BundleNamePolicy::NonBlank => has_text(name),
        }
    }
}

/// Resolves `ClientSettings` and the transport builder from ordered sources
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
/// use clientcfg_core::properties::{ClientProperties, HttpClientProperties};
/// use clientcfg_core::resolver::ClientSettingsResolver;
/// use clientcfg_core::ssl::SslBundleRegistry;
///
/// let sources: Vec<Arc<dyn HttpClientProperties>> = vec![
///     Arc::new(ClientProperties::new("service").with_connect_timeout(Duration::from_secs(5))),
///     Arc::new(ClientProperties::new("global").with_connect_timeout(Duration::from_secs(10))),
/// ];
/// let resolver = ClientSettingsResolver::new(Arc::new(SslBundleRegistry::new()), sources);
///
/// let settings = resolver.settings().unwrap();
/// assert_eq!(settings.connect_timeout, Some(Duration::from_secs(5)));
/// ```
#[derive(Clone)]
pub struct ClientSettingsResolver {
    ssl_bundles: Arc<dyn SslBundles>,
    properties: OrderedProperties,
    bundle_name_policy: BundleNamePolicy,
}

impl ClientSettingsResolver {
    /// Create a resolver over `sources`, highest priority first
    pub fn new(ssl_bundles: Arc<dyn SslBundles>, sources: Vec<Arc<dyn HttpClientProperties>>) -> Self {
        Self {
            ssl_bundles,
            properties: OrderedProperties::new(sources),
            bundle_name_policy: BundleNamePolicy::default(),
        }
    }

    /// Use a different bundle name policy
    pub fn with_bundle_name_policy(mut self, policy: BundleNamePolicy) -> Self {
        self.bundle_name_policy = policy;
        self
    }

    pub fn properties(&self) -> &OrderedProperties {
        &self.properties
    }

    pub fn bundle_name_policy(&self) -> BundleNamePolicy {
        self.bundle_name_policy
    }

    /// The explicitly selected transport, if any source names one
    pub fn transport_selector(&self) -> Option<TransportKind> {
        self.traced("transport", self.properties.resolve_entry(|p| p.transport(), Some, is_present))
    }

    /// Builder for the selected transport, or the detector's choice
    ///
    /// `detector` is consulted only when no source selects a transport.
    pub fn builder(&self, detector: &dyn TransportDetector) -> TransportBuilder {
        match self.transport_selector() {
            Some(kind) => kind.builder(),
            None => detector.detect(),
        }
    }

    /// Resolve all settings
    ///
    /// The TLS bundle registry is queried only when a bundle name resolves;
    /// its errors are returned unchanged.
    pub fn settings(&self) -> SslBundleResult<ClientSettings> {
        let props = &self.properties;
        let redirects = self.traced("redirects", props.resolve_entry(|p| p.redirects(), Some, is_present));
        let connect_timeout = self.traced(
            "connect-timeout",
            props.resolve_entry(|p| p.connect_timeout(), Some, is_present),
        );
        let read_timeout = self.traced(
            "read-timeout",
            props.resolve_entry(|p| p.read_timeout(), Some, is_present),
        );

        let policy = self.bundle_name_policy;
        let bundle_name = self.traced(
            "ssl.bundle",
            props.resolve_entry(|p| p.ssl(), |ssl| ssl.bundle.as_deref(), |name| policy.accepts(name)),
        );
        let ssl_bundle = match bundle_name {
            Some(name) if !name.is_empty() => Some(self.ssl_bundles.get_bundle(name)?),
            _ => None,
        };

        Ok(ClientSettings::new(redirects, connect_timeout, read_timeout, ssl_bundle))
    }

    fn traced<T: std::fmt::Debug>(&self, setting: &'static str, entry: Option<(usize, T)>) -> Option<T> {
        match entry {
            Some((index, value)) => {
                let source = self.properties.sources()[index].name();
                tracing::debug!(setting, source, ?value, "resolved HTTP client setting");
                Some(value)
            }
            None => {
                tracing::trace!(setting, sources = self.properties.len(), "HTTP client setting not defined");
                None
            }
        }
    }
}

impl std::fmt::Debug for ClientSettingsResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientSettingsResolver")
            .field("properties", &self.properties)
            .field("bundle_name_policy", &self.bundle_name_policy)
            .finish()
    }
}
