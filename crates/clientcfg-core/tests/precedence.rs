//! Property-based tests for ordered property resolution.
use std::sync::Arc;
use std::time::Duration;

use clientcfg_core::properties::{ClientProperties, HttpClientProperties};
use clientcfg_core::resolver::{has_length, is_present, ClientSettingsResolver, OrderedProperties};
use clientcfg_core::ssl::{SslBundle, SslBundleRegistry};
use proptest::prelude::*;

fn layer(index: usize, timeout: Option<u64>, bundle: Option<String>) -> ClientProperties {
    let mut props = ClientProperties::new(format!("layer-{index}"));
    props.connect_timeout = timeout.map(Duration::from_millis);
    if let Some(name) = bundle {
        props = props.with_ssl_bundle(name);
    }
    props
}

fn layers_strategy() -> impl Strategy<Value = Vec<(Option<u64>, Option<String>)>> {
    prop::collection::vec(
        (
            prop::option::of(0u64..10_000),
            prop::option::of(prop::sample::select(vec![
                String::new(),
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
            ])),
        ),
        0..8,
    )
}

fn build(raw: &[(Option<u64>, Option<String>)]) -> Vec<Arc<dyn HttpClientProperties>> {
    raw.iter()
        .enumerate()
        .map(|(i, (t, b))| Arc::new(layer(i, *t, b.clone())) as Arc<dyn HttpClientProperties>)
        .collect()
}

proptest! {
    #[test]
    fn first_defined_timeout_wins(raw in layers_strategy()) {
        let ordered = OrderedProperties::new(build(&raw));
        let expected = raw.iter().find_map(|(t, _)| *t).map(Duration::from_millis);

        prop_assert_eq!(ordered.resolve(|p| p.connect_timeout()), expected);
    }

    #[test]
    fn first_non_empty_bundle_name_wins(raw in layers_strategy()) {
        let ordered = OrderedProperties::new(build(&raw));
        let expected = raw
            .iter()
            .enumerate()
            .find(|(_, (_, b))| b.as_deref().is_some_and(|n| !n.is_empty()))
            .map(|(i, (_, b))| (i, b.clone().unwrap_or_default()));

        let resolved = ordered
            .resolve_entry(|p| p.ssl(), |ssl| ssl.bundle.as_deref(), has_length)
            .map(|(i, name)| (i, name.to_string()));
        prop_assert_eq!(resolved, expected);
    }

    #[test]
    fn resolved_index_is_lowest_present(raw in layers_strategy()) {
        let ordered = OrderedProperties::new(build(&raw));
        if let Some((index, _)) = ordered.resolve_entry(|p| p.connect_timeout(), Some, is_present) {
            prop_assert!(raw[..index].iter().all(|(t, _)| t.is_none()));
            prop_assert!(raw[index].0.is_some());
        } else {
            prop_assert!(raw.iter().all(|(t, _)| t.is_none()));
        }
    }

    #[test]
    fn first_accepted_source_ends_search(
        raw in layers_strategy(),
        accept_absent in any::<bool>(),
        threshold in 0u64..10_000,
    ) {
        let ordered = OrderedProperties::new(build(&raw));
        let accepts = |value: &Option<u64>| match value {
            None => accept_absent,
            Some(ms) => *ms >= threshold,
        };
        let expected = raw
            .iter()
            .map(|(t, _)| *t)
            .find(|t| accepts(t))
            .flatten()
            .map(Duration::from_millis);

        let resolved = ordered.resolve_value(
            |p| p.connect_timeout(),
            |d| Some(d.as_millis() as u64),
            |v| accepts(v),
        );
        prop_assert_eq!(resolved.map(Duration::from_millis), expected);
    }

    #[test]
    fn settings_are_stable_across_calls(raw in layers_strategy()) {
        let registry = SslBundleRegistry::with_bundles(
            ["a", "b", "c"].into_iter().map(SslBundle::new),
        );
        let resolver = ClientSettingsResolver::new(Arc::new(registry), build(&raw));

        let first = resolver.settings().unwrap();
        let second = resolver.settings().unwrap();
        prop_assert_eq!(first, second);
    }
}
