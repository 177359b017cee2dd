//! # musap-bridge-ffi
//!
//! C-compatible FFI interface for the MUSAP SSCD bridge.
//!
//! The host registers its signing SDK as a callback, then calls the bridge
//! methods. Results are JSON, allocated by the library and released with
//! `musap_bridge_free`.
//!
//! ## Usage
//!
//! ```c
//! #include "musap_bridge.h"
//!
//! static int32_t list_sscds(MusapSscdQuery query, void* ctx, char** out_json) {
//!     *out_json = strdup(sdk_list_as_json(ctx, query));
//!     return 0;
//! }
//!
//! int main() {
//!     MusapBridgeHandle* handle = musap_bridge_init(list_sscds, sdk_context);
//!     if (!handle) {
//!         return 1;
//!     }
//!
//!     uint8_t* data = NULL;
//!     size_t len = 0;
//!     if (musap_bridge_list_sscds(handle, &data, &len) == 0) {
//!         // data holds a JSON array of SSCDs
//!         musap_bridge_free(data);
//!     }
//!
//!     musap_bridge_destroy(handle);
//!     return 0;
//! }
//! ```

#![allow(clippy::missing_safety_doc)] // FFI functions are inherently unsafe

use std::ffi::c_void;
use std::ptr;

use musap_bridge_core::{module_schema, BridgeConfig, BridgeDispatcher, SscdListingAdapter};

mod provider;

#[cfg(target_os = "android")]
mod android;

pub use provider::{CallbackProvider, MusapProviderCallback, MusapSscdQuery};

/// Opaque handle to a bridge instance.
pub struct MusapBridgeHandle {
    dispatcher: BridgeDispatcher,
}

/// Error codes returned by FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusapBridgeError {
    /// Success.
    Success = 0,
    /// Invalid argument.
    InvalidArgument = -1,
    /// Initialization failed.
    InitializationFailed = -2,
    /// Request failed.
    RequestFailed = -3,
    /// Serialization error.
    SerializationError = -4,
    /// Internal error.
    InternalError = -99,
}

fn init_logging() {
    #[cfg(target_os = "android")]
    {
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Debug)
                .with_tag(musap_bridge_core::diagnostics::LOG_TAG),
        );
    }
}

/// Initialize a bridge over the host's SSCD callback.
///
/// Returns NULL if `callback` is NULL.
///
/// # Safety
///
/// `user_data` is passed back to `callback` unchanged, possibly from several
/// threads. The returned handle must be freed with `musap_bridge_destroy`.
#[no_mangle]
pub extern "C" fn musap_bridge_init(
    callback: Option<MusapProviderCallback>,
    user_data: *mut c_void,
) -> *mut MusapBridgeHandle {
    init_logging();

    let Some(callback) = callback else {
        tracing::error!("musap_bridge_init: no provider callback");
        return ptr::null_mut();
    };

    let platform = musap_sscd::detect_platform();
    tracing::info!(
        os = platform.os,
        api_level = ?platform.api_level,
        version = env!("CARGO_PKG_VERSION"),
        "musap_bridge_init"
    );

    let adapter = SscdListingAdapter::new(CallbackProvider::new(callback, user_data));
    let handle = Box::new(MusapBridgeHandle {
        dispatcher: BridgeDispatcher::new(adapter),
    });
    Box::into_raw(handle)
}

/// List the active SSCDs as a JSON array.
///
/// # Returns
///
/// 0 on success, `RequestFailed` if the provider failed.
///
/// # Safety
///
/// - `handle` must be a valid handle from `musap_bridge_init`
/// - `out_data` and `out_len` must be valid pointers
#[no_mangle]
pub unsafe extern "C" fn musap_bridge_list_sscds(
    handle: *mut MusapBridgeHandle,
    out_data: *mut *mut u8,
    out_len: *mut usize,
) -> i32 {
    if handle.is_null() || out_data.is_null() || out_len.is_null() {
        return MusapBridgeError::InvalidArgument as i32;
    }

    let handle = &*handle;

    let sscds = match handle.dispatcher.adapter().list_sscds() {
        Ok(sscds) => sscds,
        Err(e) => {
            tracing::error!("musap_bridge_list_sscds failed: {}", e);
            return MusapBridgeError::RequestFailed as i32;
        }
    };

    let bytes = match serde_json::to_vec(&sscds) {
        Ok(b) => b,
        Err(e) => {
            tracing::error!("Failed to serialize SSCD list: {}", e);
            return MusapBridgeError::SerializationError as i32;
        }
    };

    write_output(&bytes, out_data, out_len)
}

/// Dispatch a JSON request (`{"method": ..., "args": [...]}`).
///
/// On success the output holds a JSON response envelope, which reports
/// method-level failures itself.
///
/// # Safety
///
/// - `handle` must be a valid handle from `musap_bridge_init`
/// - `request_data` must point to `request_len` readable bytes
/// - `out_data` and `out_len` must be valid pointers
#[no_mangle]
pub unsafe extern "C" fn musap_bridge_call(
    handle: *mut MusapBridgeHandle,
    request_data: *const u8,
    request_len: usize,
    out_data: *mut *mut u8,
    out_len: *mut usize,
) -> i32 {
    if handle.is_null() || request_data.is_null() || out_data.is_null() || out_len.is_null() {
        return MusapBridgeError::InvalidArgument as i32;
    }

    let handle = &*handle;
    let request = std::slice::from_raw_parts(request_data, request_len);

    let bytes = match handle.dispatcher.dispatch_json(request) {
        Ok(b) => b,
        Err(e) => {
            tracing::error!("Failed to dispatch request: {}", e);
            return MusapBridgeError::SerializationError as i32;
        }
    };

    write_output(&bytes, out_data, out_len)
}

/// Write the module schema as JSON.
///
/// # Safety
///
/// `out_data` and `out_len` must be valid pointers.
#[no_mangle]
pub unsafe extern "C" fn musap_bridge_schema(out_data: *mut *mut u8, out_len: *mut usize) -> i32 {
    if out_data.is_null() || out_len.is_null() {
        return MusapBridgeError::InvalidArgument as i32;
    }

    match serde_json::to_vec(&module_schema(&BridgeConfig::default())) {
        Ok(bytes) => write_output(&bytes, out_data, out_len),
        Err(e) => {
            tracing::error!("Failed to serialize schema: {}", e);
            MusapBridgeError::SerializationError as i32
        }
    }
}

/// Free memory allocated by bridge functions.
///
/// # Safety
///
/// `data` must be a pointer returned by a bridge function, or NULL.
#[no_mangle]
pub unsafe extern "C" fn musap_bridge_free(data: *mut c_void) {
    if !data.is_null() {
        libc::free(data);
    }
}

/// Destroy the bridge handle.
///
/// # Safety
///
/// `handle` must be a valid handle from `musap_bridge_init`.
/// After this call, the handle is invalid and must not be used.
#[no_mangle]
pub unsafe extern "C" fn musap_bridge_destroy(handle: *mut MusapBridgeHandle) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

/// Get the library version.
#[no_mangle]
pub extern "C" fn musap_bridge_version() -> *const libc::c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const libc::c_char
}

/// Copy `bytes` into a malloc'd buffer owned by the caller.
unsafe fn write_output(bytes: &[u8], out_data: *mut *mut u8, out_len: *mut usize) -> i32 {
    let len = bytes.len();
    // malloc(0) may return NULL; always ask for at least one byte
    let ptr = libc::malloc(len.max(1)) as *mut u8;
    if ptr.is_null() {
        return MusapBridgeError::InternalError as i32;
    }

    ptr::copy_nonoverlapping(bytes.as_ptr(), ptr, len);

    *out_data = ptr;
    *out_len = len;

    MusapBridgeError::Success as i32
}
