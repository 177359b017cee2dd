//! Android JNI bindings.
//!
//! Exposes the bridge to `com.sphereon.musap.MusapBridge`. The Kotlin side
//! passes an object implementing
//!
//! ```kotlin
//! interface SscdSource { fun listSscds(query: Int): String }
//! ```
//!
//! whose `listSscds` runs `MusapClient.listActiveSscds()` (query 0) or
//! `MusapClient.listEnabledSscds()` (query 1) and returns the list as JSON.
//! Responses go back to Kotlin as JSON envelope strings.

use jni::objects::{GlobalRef, JClass, JObject, JString, JValue};
use jni::sys::{jint, jlong, jstring};
use jni::{JNIEnv, JavaVM};
use musap_bridge_core::{
    BridgeDispatcher, BridgeError, BridgeRequest, BridgeResponse, SscdListingAdapter,
};
use musap_sscd::{ProviderError, Sscd, SscdProvider, SscdQuery};
use tracing::{error, info, trace};

use super::{init_logging, MusapBridgeHandle};

/// [`SscdProvider`] that calls a Kotlin `SscdSource`.
struct JniProvider {
    vm: JavaVM,
    source: GlobalRef,
}

impl JniProvider {
    fn enumerate(&self, query: SscdQuery) -> Result<Vec<Sscd>, ProviderError> {
        let mut env = self.vm.attach_current_thread().map_err(|e| {
            error!("JniProvider: failed to attach thread: {}", e);
            ProviderError::platform(format!("JNI attach failed: {}", e))
        })?;

        let result = env.call_method(
            &self.source,
            "listSscds",
            "(I)Ljava/lang/String;",
            &[JValue::Int(query as jint)],
        );

        let value = match result {
            Ok(value) => value,
            Err(e) => {
                // Surface SDK exceptions as enumeration failures
                if env.exception_check().unwrap_or(false) {
                    let _ = env.exception_describe();
                    let _ = env.exception_clear();
                }
                return Err(ProviderError::enumeration(format!("listSscds threw: {}", e)));
            }
        };

        let obj = value.l().map_err(|e| {
            ProviderError::platform(format!("listSscds result conversion failed: {}", e))
        })?;
        if obj.is_null() {
            return Err(ProviderError::SerializationError(
                "listSscds returned null".to_string(),
            ));
        }

        let json: String = env
            .get_string(&JString::from(obj))
            .map_err(|e| ProviderError::platform(format!("JNI string read failed: {}", e)))?
            .into();
        trace!(?query, bytes = json.len(), "JniProvider: received SSCD list");

        Ok(serde_json::from_str(&json)?)
    }
}

impl SscdProvider for JniProvider {
    fn list_active_sscds(&self) -> Result<Vec<Sscd>, ProviderError> {
        self.enumerate(SscdQuery::Active)
    }

    fn list_enabled_sscds(&self) -> Result<Vec<Sscd>, ProviderError> {
        self.enumerate(SscdQuery::Enabled)
    }
}

fn to_jstring(env: &mut JNIEnv, response: &BridgeResponse) -> jstring {
    let json = match serde_json::to_string(response) {
        Ok(json) => json,
        Err(e) => {
            error!("Failed to serialize response: {}", e);
            return std::ptr::null_mut();
        }
    };
    match env.new_string(json) {
        Ok(s) => s.into_raw(),
        Err(e) => {
            error!("Failed to create Java string: {}", e);
            std::ptr::null_mut()
        }
    }
}

#[no_mangle]
pub extern "system" fn Java_com_sphereon_musap_MusapBridge_nativeInit(
    env: JNIEnv,
    _class: JClass,
    source: JObject,
) -> jlong {
    init_logging();

    let vm = match env.get_java_vm() {
        Ok(vm) => vm,
        Err(e) => {
            error!("nativeInit: failed to get JavaVM: {}", e);
            return 0;
        }
    };
    let source = match env.new_global_ref(source) {
        Ok(r) => r,
        Err(e) => {
            error!("nativeInit: failed to pin SSCD source: {}", e);
            return 0;
        }
    };

    info!(api_level = ?musap_sscd::detect_platform().api_level, "nativeInit");
    let adapter = SscdListingAdapter::new(JniProvider { vm, source });
    let handle = Box::new(MusapBridgeHandle {
        dispatcher: BridgeDispatcher::new(adapter),
    });
    Box::into_raw(handle) as jlong
}

#[no_mangle]
pub unsafe extern "system" fn Java_com_sphereon_musap_MusapBridge_nativeListSscds(
    mut env: JNIEnv,
    _class: JClass,
    handle: jlong,
) -> jstring {
    let Some(handle) = (handle as *const MusapBridgeHandle).as_ref() else {
        return std::ptr::null_mut();
    };
    let response = handle.dispatcher.dispatch(&BridgeRequest::new("listSscds"));
    to_jstring(&mut env, &response)
}

#[no_mangle]
pub unsafe extern "system" fn Java_com_sphereon_musap_MusapBridge_nativeCall(
    mut env: JNIEnv,
    _class: JClass,
    handle: jlong,
    request: JString,
) -> jstring {
    let Some(handle) = (handle as *const MusapBridgeHandle).as_ref() else {
        return std::ptr::null_mut();
    };

    let request: String = match env.get_string(&request) {
        Ok(s) => s.into(),
        Err(e) => {
            error!("nativeCall: failed to read request: {}", e);
            return std::ptr::null_mut();
        }
    };

    let response = match serde_json::from_str::<BridgeRequest>(&request) {
        Ok(request) => handle.dispatcher.dispatch(&request),
        Err(e) => BridgeResponse::from(Err(BridgeError::from(e))),
    };
    to_jstring(&mut env, &response)
}

#[no_mangle]
pub unsafe extern "system" fn Java_com_sphereon_musap_MusapBridge_nativeDestroy(
    _env: JNIEnv,
    _class: JClass,
    handle: jlong,
) {
    super::musap_bridge_destroy(handle as *mut MusapBridgeHandle);
}
