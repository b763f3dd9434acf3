//! Transport selection and construction
//!
//! A `TransportBuilder` turns resolved `ClientSettings` into a configured
//! client. The builder comes either from an explicit `TransportKind` in a
//! property source or from a `TransportDetector`.

mod error;
mod builder;
mod detect;

pub use error::{TransportError, TransportResult};
pub use builder::{TransportBuilder, HttpTransport, HyperClient, MAX_REDIRECTS};
pub use detect::{TransportDetector, AvailableTransports};
