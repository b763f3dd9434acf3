//! In-memory TLS bundle registry

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::bundle::SslBundle;
use super::traits::{SslBundles, SslBundleError, SslBundleResult};

/// Thread-safe registry of TLS bundles keyed by name
///
/// # Example
///
/// ```
/// use clientcfg_core::ssl::{SslBundle, SslBundleRegistry, SslBundles};
///
/// let registry = SslBundleRegistry::new();
/// registry.register_bundle(SslBundle::new("mtls")).unwrap();
/// assert!(registry.get_bundle("mtls").is_ok());
/// ```
#[derive(Debug, Default)]
pub struct SslBundleRegistry {
    bundles: RwLock<HashMap<String, Arc<SslBundle>>>,
}

impl SslBundleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            bundles: RwLock::new(HashMap::new()),
        }
    }

    /// Create a registry with initial bundles
    ///
    /// Later bundles replace earlier ones with the same name.
    pub fn with_bundles(bundles: impl IntoIterator<Item = SslBundle>) -> Self {
        let map = bundles
            .into_iter()
            .map(|b| (b.name.clone(), Arc::new(b)))
            .collect();
        Self {
            bundles: RwLock::new(map),
        }
    }

    /// Register a new bundle, failing if the name is taken
    pub fn register_bundle(&self, bundle: SslBundle) -> SslBundleResult<()> {
        let mut bundles = self.bundles.write();
        if bundles.contains_key(&bundle.name) {
            return Err(SslBundleError::DuplicateBundle(bundle.name));
        }
        tracing::debug!(bundle = %bundle.name, "registered SSL bundle");
        bundles.insert(bundle.name.clone(), Arc::new(bundle));
        Ok(())
    }

    /// Replace an existing bundle
    pub fn update_bundle(&self, bundle: SslBundle) -> SslBundleResult<()> {
        let mut bundles = self.bundles.write();
        match bundles.get_mut(&bundle.name) {
            Some(existing) => {
                tracing::debug!(bundle = %bundle.name, "updated SSL bundle");
                *existing = Arc::new(bundle);
                Ok(())
            }
            None => Err(SslBundleError::NoSuchBundle(bundle.name)),
        }
    }

    pub fn len(&self) -> usize {
        self.bundles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SslBundles for SslBundleRegistry {
    fn get_bundle(&self, name: &str) -> SslBundleResult<Arc<SslBundle>> {
        self.bundles
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| SslBundleError::NoSuchBundle(name.to_string()))
    }

    fn bundle_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.bundles.read().keys().cloned().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let registry = SslBundleRegistry::new();
        assert!(registry.is_empty());

        registry.register_bundle(SslBundle::new("mtls")).unwrap();

        let bundle = registry.get_bundle("mtls").unwrap();
        assert_eq!(bundle.name, "mtls");
        assert!(registry.has_bundle("mtls"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_bundle() {
        let registry = SslBundleRegistry::new();
        let err = registry.get_bundle("nope").unwrap_err();
        assert!(matches!(err, SslBundleError::NoSuchBundle(ref n) if n == "nope"));
        assert!(!registry.has_bundle("nope"));
    }

    #[test]
    fn test_duplicate_rejected() {
        let registry = SslBundleRegistry::new();
        registry.register_bundle(SslBundle::new("mtls")).unwrap();

        assert!(matches!(
            registry.register_bundle(SslBundle::new("mtls")),
            Err(SslBundleError::DuplicateBundle(_))
        ));
    }

    #[test]
    fn test_update_bundle() {
        let registry = SslBundleRegistry::new();
        registry.register_bundle(SslBundle::new("mtls")).unwrap();

        registry
            .update_bundle(SslBundle::new("mtls").with_protocol("TLSv1.3"))
            .unwrap();
        assert_eq!(registry.get_bundle("mtls").unwrap().protocol, "TLSv1.3");

        assert!(matches!(
            registry.update_bundle(SslBundle::new("other")),
            Err(SslBundleError::NoSuchBundle(_))
        ));
    }

    #[test]
    fn test_bundle_names_sorted() {
        let registry = SslBundleRegistry::with_bundles(vec![
            SslBundle::new("zeta"),
            SslBundle::new("alpha"),
        ]);
        assert_eq!(registry.bundle_names(), vec!["alpha".to_string(), "zeta".to_string()]);
    }

    #[test]
    fn test_registry_thread_safety() {
        use std::thread;

        let registry = Arc::new(SslBundleRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    registry.register_bundle(SslBundle::new(format!("b{}", i))).unwrap();
                    registry.get_bundle(&format!("b{}", i)).unwrap();
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(registry.len(), 8);
    }
}
