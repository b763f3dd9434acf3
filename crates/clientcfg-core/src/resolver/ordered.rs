//! Generic first-match lookup over ordered property sources

use std::sync::Arc;

use crate::properties::HttpClientProperties;

/// Presence predicate: the value exists
pub fn is_present<T>(value: &Option<T>) -> bool {
    value.is_some()
}

/// Presence predicate: the string exists and is not empty
pub fn has_length<S: AsRef<str>>(value: &Option<S>) -> bool {
    value.as_ref().is_some_and(|s| !s.as_ref().is_empty())
}

/// Presence predicate: the string contains at least one non-whitespace character
pub fn has_text<S: AsRef<str>>(value: &Option<S>) -> bool {
    value
        .as_ref()
        .is_some_and(|s| s.as_ref().chars().any(|c| !c.is_whitespace()))
}

/// An ordered list of property sources, highest priority first
///
/// The order is fixed at construction and never re-sorted.
#[derive(Clone, Default)]
pub struct OrderedProperties {
    sources: Vec<Arc<dyn HttpClientProperties>>,
}

impl OrderedProperties {
    pub fn new(sources: Vec<Arc<dyn HttpClientProperties>>) -> Self {
        Self { sources }
    }

    pub fn sources(&self) -> &[Arc<dyn HttpClientProperties>] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// First value defined by any source
    pub fn resolve<T, A>(&self, accessor: A) -> Option<T>
    where
        A: Fn(&dyn HttpClientProperties) -> Option<T>,
    {
        self.resolve_value(accessor, |value| Some(value), is_present)
    }

    /// First extracted value accepted by `presence`
    ///
    /// For each source, `accessor` yields an optional intermediate;
    /// `extractor` runs only when it is present. The first extracted value
    /// for which `presence` holds is returned; if `presence` accepts an
    /// absent value, the result is `None` and later sources are not consulted.
    pub fn resolve_value<'s, P, T, A, E, F>(&'s self, accessor: A, extractor: E, presence: F) -> Option<T>
    where
        A: Fn(&'s dyn HttpClientProperties) -> Option<P>,
        E: Fn(P) -> Option<T>,
        F: Fn(&Option<T>) -> bool,
    {
        self.resolve_entry(accessor, extractor, presence)
            .map(|(_, value)| value)
    }

    /// Like `resolve_value`, also returning the index of the winning source
    pub fn resolve_entry<'s, P, T, A, E, F>(
        &'s self,
        accessor: A,
        extractor: E,
        presence: F,
    ) -> Option<(usize, T)>
    where
        A: Fn(&'s dyn HttpClientProperties) -> Option<P>,
        E: Fn(P) -> Option<T>,
        F: Fn(&Option<T>) -> bool,
    {
        // The first accepted source ends the search, even if its value is absent
        self.sources
            .iter()
            .enumerate()
            .find_map(|(index, source)| {
                let extracted = accessor(source.as_ref()).and_then(&extractor);
                presence(&extracted).then(|| extracted.map(|value| (index, value)))
            })
            .flatten()
    }
}

impl std::fmt::Debug for OrderedProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.sources.iter().map(|s| s.name()).collect();
        f.debug_struct("OrderedProperties")
            .field("sources", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::ClientProperties;
    use std::time::Duration;

    fn ordered(layers: Vec<ClientProperties>) -> OrderedProperties {
        OrderedProperties::new(
            layers
                .into_iter()
                .map(|p| Arc::new(p) as Arc<dyn HttpClientProperties>)
                .collect(),
        )
    }

    #[test]
    fn test_presence_predicates() {
        assert!(is_present(&Some(0)));
        assert!(!is_present::<u8>(&None));

        assert!(has_length(&Some("a")));
        assert!(has_length(&Some(" ")));
        assert!(!has_length(&Some("")));
        assert!(!has_length::<&str>(&None));

        assert!(has_text(&Some(" a ")));
        assert!(!has_text(&Some(" \t")));
        assert!(!has_text(&Some("")));
    }

    #[test]
    fn test_first_source_wins() {
        let props = ordered(vec![
            ClientProperties::new("a").with_connect_timeout(Duration::from_secs(5)),
            ClientProperties::new("b").with_connect_timeout(Duration::from_secs(10)),
        ]);

        assert_eq!(props.resolve(|p| p.connect_timeout()), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_falls_through_to_later_source() {
        let props = ordered(vec![
            ClientProperties::new("a"),
            ClientProperties::new("b").with_read_timeout(Duration::from_secs(3)),
        ]);

        assert_eq!(
            props.resolve_entry(|p| p.read_timeout(), Some, is_present),
            Some((1, Duration::from_secs(3)))
        );
    }

    #[test]
    fn test_absent_everywhere() {
        let props = ordered(vec![ClientProperties::new("a"), ClientProperties::new("b")]);
        assert!(props.resolve(|p| p.transport()).is_none());
        assert!(OrderedProperties::default().resolve(|p| p.redirects()).is_none());
    }

    #[test]
    fn test_extractor_skips_missing_intermediate() {
        let props = ordered(vec![
            ClientProperties::new("no-ssl"),
            ClientProperties::new("ssl-without-bundle").with_ssl(Default::default()),
            ClientProperties::new("empty").with_ssl_bundle(""),
            ClientProperties::new("named").with_ssl_bundle("mtls"),
        ]);

        let name = props.resolve_entry(|p| p.ssl(), |ssl| ssl.bundle.as_deref(), has_length);
        assert_eq!(name, Some((3, "mtls")));
    }

    #[test]
    fn test_accepted_absent_value_stops_search() {
        let props = ordered(vec![
            ClientProperties::new("a"),
            ClientProperties::new("b").with_connect_timeout(Duration::from_secs(5)),
        ]);

        assert_eq!(props.resolve_entry(|p| p.connect_timeout(), Some, |_| true), None);
        assert_eq!(props.resolve_value(|p| p.connect_timeout(), Some, |_| true), None);
    }

    #[test]
    fn test_rejected_value_continues_search() {
        let props = ordered(vec![
            ClientProperties::new("a").with_connect_timeout(Duration::from_secs(1)),
            ClientProperties::new("b").with_connect_timeout(Duration::from_secs(5)),
        ]);

        let at_least_two_seconds = |v: &Option<Duration>| v.is_some_and(|d| d >= Duration::from_secs(2));
        assert_eq!(
            props.resolve_entry(|p| p.connect_timeout(), Some, at_least_two_seconds),
            Some((1, Duration::from_secs(5)))
        );
    }

    #[test]
    fn test_debug_lists_source_names() {
        let props = ordered(vec![ClientProperties::new("first"), ClientProperties::new("second")]);
        let debug = format!("{:?}", props);
        assert!(debug.contains("first"));
        assert!(debug.contains("second"));
        assert_eq!(props.len(), 2);
        assert!(!props.is_empty());
    }
}
