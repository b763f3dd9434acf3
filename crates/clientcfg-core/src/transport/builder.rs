//! Building configured clients from resolved settings

use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

use super::error::{TransportError, TransportResult};
use crate::ssl::SslBundle;
use crate::types::{ClientSettings, Redirects, TransportKind};

/// Redirect hop limit applied when a transport follows redirects
pub const MAX_REDIRECTS: usize = 10;

const PEM_CERTIFICATE_END: &str = "-----END CERTIFICATE-----";

/// Legacy hyper client over a plain TCP connector with `String` request bodies
pub type HyperClient = Client<HttpConnector, String>;

/// A client built from resolved settings
#[derive(Debug, Clone)]
pub enum HttpTransport {
    Reqwest(reqwest::Client),
    Hyper(HyperClient),
}

impl HttpTransport {
    pub fn kind(&self) -> TransportKind {
        match self {
            HttpTransport::Reqwest(_) => TransportKind::Reqwest,
            HttpTransport::Hyper(_) => TransportKind::Hyper,
        }
    }
}

/// Builds a specific transport
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use clientcfg_core::types::{ClientSettings, TransportKind};
///
/// let settings = ClientSettings {
///     connect_timeout: Some(Duration::from_secs(5)),
///     ..Default::default()
/// };
/// let transport = TransportKind::Reqwest.builder().build(&settings).unwrap();
/// assert_eq!(transport.kind(), TransportKind::Reqwest);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportBuilder {
    kind: TransportKind,
}

impl TransportBuilder {
    pub fn new(kind: TransportKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> TransportKind {
        self.kind
    }

    /// Build a client applying `settings`
    ///
    /// Settings left unset keep the transport's own defaults.
    pub fn build(&self, settings: &ClientSettings) -> TransportResult<HttpTransport> {
        tracing::debug!(
            transport = %self.kind,
            redirects = %settings.effective_redirects(),
            connect_timeout = ?settings.connect_timeout,
            read_timeout = ?settings.read_timeout,
            ssl_bundle = ?settings.ssl_bundle_name(),
            "building HTTP transport"
        );
        match self.kind {
            TransportKind::Reqwest => build_reqwest(settings).map(HttpTransport::Reqwest),
            TransportKind::Hyper => build_hyper(settings).map(HttpTransport::Hyper),
        }
    }
}

fn build_reqwest(settings: &ClientSettings) -> TransportResult<reqwest::Client> {
    let policy = match settings.effective_redirects() {
        Redirects::DontFollow => reqwest::redirect::Policy::none(),
        Redirects::Follow | Redirects::FollowWhenPossible => reqwest::redirect::Policy::limited(MAX_REDIRECTS),
    };
    let mut builder = reqwest::Client::builder().redirect(policy);

    if let Some(timeout) = settings.connect_timeout {
        builder = builder.connect_timeout(timeout);
    }
    if let Some(timeout) = settings.read_timeout {
        builder = builder.read_timeout(timeout);
    }
    if let Some(bundle) = settings.ssl_bundle.as_deref() {
        builder = apply_bundle(builder, bundle)?;
    }

    Ok(builder.build()?)
}

fn apply_bundle(
    mut builder: reqwest::ClientBuilder,
    bundle: &SslBundle,
) -> TransportResult<reqwest::ClientBuilder> {
    let invalid = |source: reqwest::Error| TransportError::InvalidPem {
        bundle: bundle.name.clone(),
        source,
    };

    // PEM identities are only understood by the rustls backend
    builder = builder.use_rustls_tls();

    if let Some(version) = min_tls_version(&bundle.protocol) {
        builder = builder.min_tls_version(version);
    }

    if let Some(trust) = bundle.trust_certificates.as_deref() {
        for pem in split_certificates(trust) {
            let certificate = reqwest::Certificate::from_pem(pem.as_bytes()).map_err(invalid)?;
            builder = builder.add_root_certificate(certificate);
        }
    }

    if let (Some(chain), Some(key)) = (bundle.certificate_chain.as_deref(), bundle.private_key.as_deref()) {
        let pem = format!("{}\n{}", chain.trim_end(), key);
        let identity = reqwest::Identity::from_pem(pem.as_bytes()).map_err(invalid)?;
        builder = builder.identity(identity);
    }

    Ok(builder)
}

fn min_tls_version(protocol: &str) -> Option<reqwest::tls::Version> {
    match protocol.to_ascii_uppercase().as_str() {
        "TLSV1.2" => Some(reqwest::tls::Version::TLS_1_2),
        "TLSV1.3" => Some(reqwest::tls::Version::TLS_1_3),
        _ => None,
    }
}

/// Split a PEM bundle into one string per certificate
fn split_certificates(pem: &str) -> Vec<String> {
    pem.split_inclusive(PEM_CERTIFICATE_END)
        .map(str::trim)
        .filter(|block| block.ends_with(PEM_CERTIFICATE_END))
        .map(str::to_string)
        .collect()
}

fn build_hyper(settings: &ClientSettings) -> TransportResult<HyperClient> {
    let kind = TransportKind::Hyper;
    if settings.redirects == Some(Redirects::Follow) {
        return Err(TransportError::unsupported(kind, "following redirects"));
    }
    if settings.read_timeout.is_some() {
        return Err(TransportError::unsupported(kind, "a read timeout"));
    }
    if settings.ssl_bundle.is_some() {
        return Err(TransportError::unsupported(kind, "SSL bundles"));
    }

    let mut connector = HttpConnector::new();
    connector.set_connect_timeout(settings.connect_timeout);
    Ok(Client::builder(TokioExecutor::new()).build(connector))
}
