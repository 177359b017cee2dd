//! Relay and diagnostic-gate properties of the listing adapter.

use std::thread;

use musap_bridge_core::diagnostics::LOG_TAG;
use musap_bridge_core::{BridgeConfig, BridgeError, SscdListingAdapter};
use musap_sscd::{FixedPlatform, ProviderError, Sscd, StaticSscdProvider};
use proptest::prelude::*;

use crate::support::{sscds, RecordingSink, ScriptedProvider};

fn id_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z0-9_-]{0,12}", 0..16)
}

fn to_sscds(ids: &[String]) -> Vec<Sscd> {
    ids.iter().map(|id| Sscd::new(id.clone())).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    /// Output equals provider output: length, order, identifiers, duplicates.
    #[test]
    fn relay_is_identity(ids in id_list(), api in 0u32..40) {
        let expected = to_sscds(&ids);
        let adapter = SscdListingAdapter::new(StaticSscdProvider::new(expected.clone()))
            .with_platform(FixedPlatform::api(api))
            .with_sink(RecordingSink::default());

        prop_assert_eq!(adapter.list_sscds().unwrap(), expected);
    }

    /// At or above the threshold: one line, the ", " join of the ids.
    #[test]
    fn log_line_is_join_at_or_above_threshold(ids in id_list(), api in 24u32..100) {
        let sink = RecordingSink::default();
        let adapter = SscdListingAdapter::new(StaticSscdProvider::new(to_sscds(&ids)))
            .with_platform(FixedPlatform::api(api))
            .with_sink(sink.clone());

        adapter.list_sscds().unwrap();
        prop_assert_eq!(sink.lines(), vec![ids.join(", ")]);
        prop_assert_eq!(sink.tags(), vec![LOG_TAG.to_string()]);
    }

    /// Below the threshold: never a line.
    #[test]
    fn no_log_below_threshold(ids in id_list(), api in 0u32..24) {
        let sink = RecordingSink::default();
        let adapter = SscdListingAdapter::new(StaticSscdProvider::new(to_sscds(&ids)))
            .with_platform(FixedPlatform::api(api))
            .with_sink(sink.clone());

        adapter.list_sscds().unwrap();
        prop_assert!(sink.lines().is_empty());
    }
}

#[test]
fn scenario_two_sscds_logged() {
    let sink = RecordingSink::default();
    let adapter = SscdListingAdapter::new(StaticSscdProvider::new(sscds(&["sscd-1", "sscd-2"])))
        .with_platform(FixedPlatform::api(24))
        .with_sink(sink.clone());

    assert_eq!(adapter.list_sscds().unwrap(), sscds(&["sscd-1", "sscd-2"]));
    assert_eq!(sink.lines(), vec!["sscd-1, sscd-2"]);
}

#[test]
fn scenario_empty_list_logged_empty() {
    let sink = RecordingSink::default();
    let adapter = SscdListingAdapter::new(StaticSscdProvider::new(vec![]))
        .with_platform(FixedPlatform::api(28))
        .with_sink(sink.clone());

    assert!(adapter.list_sscds().unwrap().is_empty());
    assert_eq!(sink.lines(), vec![""]);
}

#[test]
fn scenario_below_threshold_silent() {
    let sink = RecordingSink::default();
    let adapter = SscdListingAdapter::new(StaticSscdProvider::new(sscds(&["sscd-1"])))
        .with_platform(FixedPlatform::api(21))
        .with_sink(sink.clone());

    assert_eq!(adapter.list_sscds().unwrap(), sscds(&["sscd-1"]));
    assert!(sink.lines().is_empty());
}

#[test]
fn custom_threshold_from_config() {
    let sink = RecordingSink::default();
    let config = BridgeConfig::default().min_diagnostic_api_level(30);
    let adapter = SscdListingAdapter::with_config(StaticSscdProvider::new(sscds(&["a"])), config)
        .with_platform(FixedPlatform::api(29))
        .with_sink(sink.clone());

    adapter.list_sscds().unwrap();
    assert!(sink.lines().is_empty());
}

#[test]
fn provider_failure_is_an_error_not_empty() {
    let sink = RecordingSink::default();
    let provider = ScriptedProvider::new(vec![Err("SIM applet not responding".into())]);
    let adapter = SscdListingAdapter::new(provider.clone())
        .with_platform(FixedPlatform::api(24))
        .with_sink(sink.clone());

    match adapter.list_sscds() {
        Err(BridgeError::Provider(ProviderError::EnumerationFailed { reason })) => {
            assert_eq!(reason, "SIM applet not responding");
        }
        other => panic!("expected provider error, got {:?}", other),
    }
    assert_eq!(provider.calls(), 1);
    assert!(sink.lines().is_empty());
}

#[test]
fn consecutive_calls_are_independent() {
    let sink = RecordingSink::default();
    let provider = ScriptedProvider::new(vec![Ok(sscds(&["a", "b"])), Ok(sscds(&["c"]))]);
    let adapter = SscdListingAdapter::new(provider.clone())
        .with_platform(FixedPlatform::api(24))
        .with_sink(sink.clone());

    assert_eq!(adapter.list_sscds().unwrap(), sscds(&["a", "b"]));
    assert_eq!(adapter.list_sscds().unwrap(), sscds(&["c"]));
    assert_eq!(provider.calls(), 2);
    assert_eq!(sink.lines(), vec!["a, b", "c"]);
}

#[test]
fn concurrent_calls_each_reach_provider() {
    let sink = RecordingSink::default();
    let provider = ScriptedProvider::new(vec![Ok(sscds(&["TEE", "YUBI"]))]);
    let adapter = SscdListingAdapter::new(provider.clone())
        .with_platform(FixedPlatform::api(24))
        .with_sink(sink.clone());

    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                assert_eq!(adapter.list_sscds().unwrap(), sscds(&["TEE", "YUBI"]));
            });
        }
    });

    assert_eq!(provider.calls(), 8);
    assert_eq!(sink.lines().len(), 8);
}
