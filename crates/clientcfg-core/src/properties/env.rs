//! Environment variable property source

use std::collections::HashMap;
use std::env;
use std::time::Duration;

use super::duration::parse_duration;
use super::memory::ClientProperties;
use super::traits::{PropertiesError, PropertiesResult};
use crate::types::{Redirects, SslProperties, TransportKind};

const REDIRECTS: &str = "REDIRECTS";
const CONNECT_TIMEOUT: &str = "CONNECT_TIMEOUT";
const READ_TIMEOUT: &str = "READ_TIMEOUT";
const SSL_BUNDLE: &str = "SSL_BUNDLE";
const TRANSPORT: &str = "TRANSPORT";

/// Property source read from environment variables
///
/// Variables are read once, at construction. With prefix `APP_HTTP` the
/// source looks at:
/// - `APP_HTTP_REDIRECTS` → `follow`, `dont-follow`, `follow-when-possible`
/// - `APP_HTTP_CONNECT_TIMEOUT` / `APP_HTTP_READ_TIMEOUT` → `5s`, `250ms`, ...
/// - `APP_HTTP_SSL_BUNDLE` → bundle name
/// - `APP_HTTP_TRANSPORT` → `reqwest` or `hyper`
///
/// Empty variables count as unset, except the bundle name: an empty
/// `_SSL_BUNDLE` is kept so the resolver's presence policy decides.
///
/// # Example
///
/// ```
/// use clientcfg_core::properties::{EnvProperties, HttpClientProperties};
///
/// let props = EnvProperties::from_vars(
///     "APP_HTTP",
///     [("APP_HTTP_CONNECT_TIMEOUT", "5s")],
/// ).unwrap();
/// assert!(props.connect_timeout().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct EnvProperties {
    prefix: String,
    name: String,
    properties: ClientProperties,
}

impl EnvProperties {
    /// Snapshot the process environment
    pub fn from_env(prefix: impl Into<String>) -> PropertiesResult<Self> {
        Self::from_vars(prefix, env::vars())
    }

    /// Snapshot an explicit set of variables
    pub fn from_vars<I, K, V>(prefix: impl Into<String>, vars: I) -> PropertiesResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let prefix = prefix.into();
        let key_prefix = format!("{}_", prefix);
        let vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| k.starts_with(&key_prefix))
            .collect();

        let lookup = |suffix: &str| {
            let key = format!("{}{}", key_prefix, suffix);
            vars.get(&key).map(|v| (key, v))
        };
        let non_empty = |suffix: &str| lookup(suffix).filter(|(_, v)| !v.trim().is_empty());

        let mut properties = ClientProperties::new(format!("env:{}", prefix));

        if let Some((key, value)) = non_empty(REDIRECTS) {
            properties.redirects = Some(
                value
                    .parse::<Redirects>()
                    .map_err(|e| PropertiesError::invalid_value(key, value.as_str(), e))?,
            );
        }
        if let Some((key, value)) = non_empty(CONNECT_TIMEOUT) {
            properties.connect_timeout = Some(duration(key, value)?);
        }
        if let Some((key, value)) = non_empty(READ_TIMEOUT) {
            properties.read_timeout = Some(duration(key, value)?);
        }
        if let Some((_, value)) = lookup(SSL_BUNDLE) {
            properties.ssl = Some(SslProperties::bundle(value.as_str()));
        }
        if let Some((key, value)) = non_empty(TRANSPORT) {
            properties.transport = Some(
                value
                    .parse::<TransportKind>()
                    .map_err(|e| PropertiesError::invalid_value(key, value.as_str(), e))?,
            );
        }

        tracing::trace!(prefix = %prefix, vars = vars.len(), "read HTTP client properties from environment");

        Ok(Self {
            name: format!("env:{}", prefix),
            prefix,
            properties,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The parsed snapshot
    pub fn properties(&self) -> &ClientProperties {
        &self.properties
    }
}

fn duration(key: String, value: &str) -> PropertiesResult<Duration> {
    parse_duration(value).map_err(|reason| PropertiesError::invalid_value(key, value, reason))
}

snapshot_properties!(EnvProperties);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::HttpClientProperties;

    #[test]
    fn test_reads_all_fields() {
        let props = EnvProperties::from_vars(
            "APP_HTTP",
            [
                ("APP_HTTP_REDIRECTS", "DONT_FOLLOW"),
                ("APP_HTTP_CONNECT_TIMEOUT", "5s"),
                ("APP_HTTP_READ_TIMEOUT", "750"),
                ("APP_HTTP_SSL_BUNDLE", "mtls"),
                ("APP_HTTP_TRANSPORT", "hyper"),
                ("OTHER_HTTP_READ_TIMEOUT", "1s"),
            ],
        )
        .unwrap();

        assert_eq!(props.name(), "env:APP_HTTP");
        assert_eq!(props.prefix(), "APP_HTTP");
        assert_eq!(props.redirects(), Some(Redirects::DontFollow));
        assert_eq!(props.connect_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(props.read_timeout(), Some(Duration::from_millis(750)));
        assert_eq!(props.ssl().and_then(|s| s.bundle.as_deref()), Some("mtls"));
        assert_eq!(props.transport(), Some(TransportKind::Hyper));
    }

    #[test]
    fn test_empty_vars_are_unset() {
        let props = EnvProperties::from_vars(
            "APP_HTTP",
            [("APP_HTTP_CONNECT_TIMEOUT", ""), ("APP_HTTP_TRANSPORT", "  ")],
        )
        .unwrap();

        assert!(props.connect_timeout().is_none());
        assert!(props.transport().is_none());
        assert!(props.properties().is_empty());
    }

    #[test]
    fn test_empty_bundle_name_is_kept() {
        let props = EnvProperties::from_vars("APP_HTTP", [("APP_HTTP_SSL_BUNDLE", "")]).unwrap();
        assert_eq!(props.ssl().and_then(|s| s.bundle.as_deref()), Some(""));
    }

    #[test]
    fn test_invalid_duration() {
        let err = EnvProperties::from_vars("APP_HTTP", [("APP_HTTP_READ_TIMEOUT", "soon")]).unwrap_err();
        match err {
            PropertiesError::InvalidValue { key, value, .. } => {
                assert_eq!(key, "APP_HTTP_READ_TIMEOUT");
                assert_eq!(value, "soon");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_transport() {
        let err = EnvProperties::from_vars("APP_HTTP", [("APP_HTTP_TRANSPORT", "curl")]).unwrap_err();
        assert!(matches!(err, PropertiesError::InvalidValue { .. }));
    }

    #[test]
    fn test_from_env_reads_process_environment() {
        // Unique prefix so parallel tests never collide
        env::set_var("CLIENTCFG_ENV_TEST_CONNECT_TIMEOUT", "2s");
        let props = EnvProperties::from_env("CLIENTCFG_ENV_TEST").unwrap();
        env::remove_var("CLIENTCFG_ENV_TEST_CONNECT_TIMEOUT");

        assert_eq!(props.connect_timeout(), Some(Duration::from_secs(2)));
    }
}
