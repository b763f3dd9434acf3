//! Ordered resolution of HTTP client settings
//!
//! Property sources are consulted in the order given (index 0 first); for
//! each setting the first source that defines it wins.

mod ordered;
mod settings_resolver;

pub use ordered::{OrderedProperties, has_length, has_text, is_present};
pub use settings_resolver::{ClientSettingsResolver, BundleNamePolicy};
