//! TLS bundle material

use std::fs;
use std::path::{Path, PathBuf};

use super::traits::{SslBundleError, SslBundleResult};

/// Protocol used when a bundle does not name one
pub const DEFAULT_PROTOCOL: &str = "TLS";

/// A named collection of PEM encoded certificate and key material
#[derive(Clone, PartialEq, Eq)]
pub struct SslBundle {
    /// Registry name
    pub name: String,
    /// SSL protocol (e.g. "TLS", "TLSv1.3")
    pub protocol: String,
    /// Client certificate chain presented to the server
    pub certificate_chain: Option<String>,
    /// Private key for `certificate_chain`
    pub private_key: Option<String>,
    /// Certificates trusted in addition to the transport's roots
    pub trust_certificates: Option<String>,
}

impl SslBundle {
    /// Create an empty bundle using the default protocol
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            protocol: DEFAULT_PROTOCOL.to_string(),
            certificate_chain: None,
            private_key: None,
            trust_certificates: None,
        }
    }

    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = protocol.into();
        self
    }

    /// Set the client identity (certificate chain and matching key)
    pub fn with_identity(mut self, certificate_chain: impl Into<String>, private_key: impl Into<String>) -> Self {
        self.certificate_chain = Some(certificate_chain.into());
        self.private_key = Some(private_key.into());
        self
    }

    pub fn with_trust_certificates(mut self, pem: impl Into<String>) -> Self {
        self.trust_certificates = Some(pem.into());
        self
    }

    /// Whether this bundle carries a client identity
    pub fn has_identity(&self) -> bool {
        self.certificate_chain.is_some() && self.private_key.is_some()
    }

    /// Build a bundle by reading the PEM files in `locations`
    pub fn from_pem_files(name: impl Into<String>, locations: &PemLocations) -> SslBundleResult<Self> {
        let mut bundle = Self::new(name);
        bundle.certificate_chain = read_optional(locations.certificate.as_deref())?;
        bundle.private_key = read_optional(locations.private_key.as_deref())?;
        bundle.trust_certificates = read_optional(locations.trust_certificates.as_deref())?;
        Ok(bundle)
    }
}

// Key material must never reach logs
impl std::fmt::Debug for SslBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SslBundle")
            .field("name", &self.name)
            .field("protocol", &self.protocol)
            .field("has_certificate_chain", &self.certificate_chain.is_some())
            .field("has_private_key", &self.private_key.is_some())
            .field("has_trust_certificates", &self.trust_certificates.is_some())
            .finish()
    }
}

/// File locations of PEM material for `SslBundle::from_pem_files`
#[derive(Debug, Clone, Default)]
pub struct PemLocations {
    pub certificate: Option<PathBuf>,
    pub private_key: Option<PathBuf>,
    pub trust_certificates: Option<PathBuf>,
}

fn read_optional(path: Option<&Path>) -> SslBundleResult<Option<String>> {
    let Some(path) = path else {
        return Ok(None);
    };
    fs::read_to_string(path)
        .map(Some)
        .map_err(|source| SslBundleError::Io {
            path: path.display().to_string(),
            source,
        })
}
