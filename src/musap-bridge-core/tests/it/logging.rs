//! What the default sink hands to the platform logger.

use musap_bridge_core::diagnostics::LOG_TAG;
use musap_bridge_core::{BridgeDispatcher, BridgeRequest, SscdListingAdapter};
use musap_sscd::{FixedPlatform, Sscd, StaticSscdProvider};

use crate::support::{capture_logs, sscds, take_logs, LoggedRecord};

fn adapter(list: Vec<Sscd>, api: u32) -> SscdListingAdapter {
    SscdListingAdapter::new(StaticSscdProvider::new(list)).with_platform(FixedPlatform::api(api))
}

fn tagged(records: Vec<LoggedRecord>) -> Vec<LoggedRecord> {
    records
        .into_iter()
        .filter(|record| record.target == LOG_TAG)
        .collect()
}

fn diagnostic(message: &str) -> LoggedRecord {
    LoggedRecord {
        level: log::Level::Debug,
        target: LOG_TAG.to_string(),
        message: message.to_string(),
    }
}

#[test]
fn default_sink_logs_exact_join_at_debug() {
    capture_logs();
    let adapter = adapter(sscds(&["sscd-1", "sscd-2"]), 24);

    adapter.list_sscds().unwrap();

    assert_eq!(tagged(take_logs()), vec![diagnostic("sscd-1, sscd-2")]);
}

#[test]
fn default_sink_logs_empty_message_for_empty_list() {
    capture_logs();
    let adapter = adapter(vec![], 30);

    adapter.list_sscds().unwrap();

    assert_eq!(tagged(take_logs()), vec![diagnostic("")]);
}

#[test]
fn below_threshold_dispatch_logs_nothing_at_debug_or_above() {
    capture_logs();
    let dispatcher = BridgeDispatcher::new(adapter(sscds(&["sscd-1"]), 21));
    take_logs();

    let response = dispatcher.dispatch(&BridgeRequest::new("listSscds"));

    assert!(response.is_ok());
    let loud: Vec<_> = take_logs()
        .into_iter()
        .filter(|record| record.level <= log::Level::Debug)
        .collect();
    assert!(loud.is_empty(), "unexpected records: {:?}", loud);
}
