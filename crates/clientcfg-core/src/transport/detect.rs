//! Fallback transport detection

use super::builder::TransportBuilder;
use crate::types::TransportKind;

/// Picks a transport when no property source selects one
pub trait TransportDetector: Send + Sync {
    fn detect(&self) -> TransportBuilder;
}

impl<F> TransportDetector for F
where
    F: Fn() -> TransportBuilder + Send + Sync,
{
    fn detect(&self) -> TransportBuilder {
        self()
    }
}

/// Detects the most preferred transport available to this application
///
/// Preference follows `TransportKind::ALL` (reqwest first). An empty set
/// still detects reqwest, the transport every build links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableTransports {
    available: Vec<TransportKind>,
}

impl AvailableTransports {
    /// Every built-in transport
    pub fn all() -> Self {
        Self {
            available: TransportKind::ALL.to_vec(),
        }
    }

    /// Only the given transports
    pub fn only(kinds: impl IntoIterator<Item = TransportKind>) -> Self {
        Self {
            available: kinds.into_iter().collect(),
        }
    }

    pub fn is_available(&self, kind: TransportKind) -> bool {
        self.available.contains(&kind)
    }
}

impl Default for AvailableTransports {
    fn default() -> Self {
        Self::all()
    }
}

impl TransportDetector for AvailableTransports {
    fn detect(&self) -> TransportBuilder {
        let kind = TransportKind::ALL
            .into_iter()
            .find(|kind| self.is_available(*kind))
            .unwrap_or(TransportKind::Reqwest);
        tracing::debug!(transport = %kind, "detected HTTP transport");
        kind.builder()
    }
}
