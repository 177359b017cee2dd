//! Bridge dispatch over JSON.

use musap_bridge_core::{BridgeDispatcher, BridgeErrorCode, BridgeResponse, SscdListingAdapter};
use musap_sscd::{FixedPlatform, KeyAlgorithm, Sscd, SscdInfo, StaticSscdProvider};
use serde_json::{json, Value};

use crate::support::{sscds, RecordingSink, ScriptedProvider};

fn call(dispatcher: &BridgeDispatcher, request: &str) -> Value {
    let bytes = dispatcher.dispatch_json(request.as_bytes()).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn empty_list_and_failure_are_distinguishable() {
    let provider = ScriptedProvider::new(vec![Ok(vec![]), Err("keystore locked".into())]);
    let dispatcher = BridgeDispatcher::new(
        SscdListingAdapter::new(provider).with_platform(FixedPlatform::api(24)),
    );

    let empty = call(&dispatcher, r#"{"method": "listSscds", "args": []}"#);
    assert_eq!(empty, json!({"status": "ok", "value": []}));

    let failed = call(&dispatcher, r#"{"method": "listSscds"}"#);
    assert_eq!(failed["status"], "error");
    assert_eq!(failed["code"], "provider_failed");
    assert_eq!(failed["message"], "SSCD enumeration failed: keystore locked");
}

#[test]
fn list_preserves_records_through_json() {
    let tee = Sscd::new("TEE").with_info(SscdInfo {
        sscd_type: Some("TEE".into()),
        key_gen_supported: true,
        supported_algorithms: vec![KeyAlgorithm::ec("secp256r1", 256)],
        ..Default::default()
    });
    let sink = RecordingSink::default();
    let dispatcher = BridgeDispatcher::new(
        SscdListingAdapter::new(StaticSscdProvider::new(vec![tee.clone(), Sscd::new("SIM")]))
            .with_platform(FixedPlatform::api(33))
            .with_sink(sink.clone()),
    );

    match dispatcher.dispatch(&musap_bridge_core::BridgeRequest::new("listSscds")) {
        BridgeResponse::Ok { value } => {
            let decoded: Vec<Sscd> = serde_json::from_value(value).unwrap();
            assert_eq!(decoded, vec![tee, Sscd::new("SIM")]);
        }
        other => panic!("unexpected response {:?}", other),
    }
    assert_eq!(sink.lines(), vec!["TEE, SIM"]);
}

#[test]
fn algorithm_flags_are_filled_in_for_the_app_layer() {
    let provider_json = r#"[{"sscdId": "TEE", "sscdInfo": {"supportedAlgorithms": [
        {"primitive": "RSA", "bits": 2048},
        {"primitive": "EC", "curve": "secp256r1", "bits": 256}
    ]}}]"#;
    let from_sdk: Vec<Sscd> = serde_json::from_str(provider_json).unwrap();
    let dispatcher = BridgeDispatcher::new(
        SscdListingAdapter::new(StaticSscdProvider::new(from_sdk))
            .with_platform(FixedPlatform::api(24))
            .with_sink(RecordingSink::default()),
    );

    let listed = call(&dispatcher, r#"{"method": "listSscds"}"#);
    let algorithms = &listed["value"][0]["sscdInfo"]["supportedAlgorithms"];
    assert_eq!(
        algorithms[0],
        json!({"primitive": "RSA", "bits": 2048, "isRsa": true, "isEc": false})
    );
    assert_eq!(
        algorithms[1],
        json!({"primitive": "EC", "curve": "secp256r1", "bits": 256, "isRsa": false, "isEc": true})
    );
}

#[test]
fn lookup_methods() {
    let enabled = vec![
        Sscd::new("TEE").with_setting("alias", "musap"),
        Sscd::new("YUBI").with_info(SscdInfo {
            sscd_name: Some("YubiKey".into()),
            ..Default::default()
        }),
    ];
    let dispatcher = BridgeDispatcher::new(
        SscdListingAdapter::new(StaticSscdProvider::new(sscds(&["TEE"])).with_enabled(enabled))
            .with_platform(FixedPlatform::api(24)),
    );

    let listed = call(&dispatcher, r#"{"method": "listEnabledSscds"}"#);
    assert_eq!(listed["value"].as_array().map(Vec::len), Some(2));

    let info = call(&dispatcher, r#"{"method": "getSscdInfo", "args": ["YUBI"]}"#);
    assert_eq!(info["value"]["sscdName"], "YubiKey");

    let settings = call(&dispatcher, r#"{"method": "getSettings", "args": ["TEE"]}"#);
    assert_eq!(settings["value"], json!({"alias": "musap"}));

    let missing = call(&dispatcher, r#"{"method": "getSscdInfo", "args": ["TEE"]}"#);
    assert_eq!(missing["code"], "sscd_not_found");
}

#[test]
fn schema_matches_dispatchable_methods() {
    let dispatcher = BridgeDispatcher::new(SscdListingAdapter::new(StaticSscdProvider::default()));
    for method in &dispatcher.schema().methods {
        let args: Vec<Value> = method.params.iter().map(|_| json!("x")).collect();
        let request = musap_bridge_core::BridgeRequest {
            method: method.name.clone(),
            args,
        };
        if let BridgeResponse::Error { code, .. } = dispatcher.dispatch(&request) {
            assert_ne!(code, BridgeErrorCode::UnknownMethod, "{}", method.name);
            assert_ne!(code, BridgeErrorCode::InvalidArguments, "{}", method.name);
        }
    }
}
