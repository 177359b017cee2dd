//! SSCD provider backed by a host callback.
//!
//! The signing SDK lives in the host runtime (Kotlin, Swift, ...). The host
//! registers one C callback; every enumeration calls it synchronously on the
//! current thread and decodes the JSON it hands back.

use std::ffi::{c_void, CStr};
use std::os::raw::c_char;
use std::ptr;

use musap_sscd::{ProviderError, Sscd, SscdProvider, SscdQuery};
use tracing::{trace, warn};

/// Which enumeration the callback must perform.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusapSscdQuery {
    /// `listActiveSscds`
    Active = 0,
    /// `listEnabledSscds`
    Enabled = 1,
}

impl From<SscdQuery> for MusapSscdQuery {
    fn from(query: SscdQuery) -> Self {
        match query {
            SscdQuery::Active => Self::Active,
            SscdQuery::Enabled => Self::Enabled,
        }
    }
}

/// Host enumeration callback.
///
/// Returns 0 and stores a `malloc`-allocated, NUL-terminated JSON array of
/// SSCDs in `out_json` on success. Any other return value is a failure; a
/// message may be stored in `out_json` the same way. The library frees
/// whatever is stored.
pub type MusapProviderCallback = extern "C" fn(
    query: MusapSscdQuery,
    user_data: *mut c_void,
    out_json: *mut *mut c_char,
) -> i32;

/// [`SscdProvider`] that calls into the host.
pub struct CallbackProvider {
    callback: MusapProviderCallback,
    user_data: *mut c_void,
}

// Safety: the host guarantees user_data may be used from any thread that
// calls into the bridge; the pointer is never dereferenced on this side.
unsafe impl Send for CallbackProvider {}
unsafe impl Sync for CallbackProvider {}

impl CallbackProvider {
    /// Wrap a host callback and its context pointer.
    pub fn new(callback: MusapProviderCallback, user_data: *mut c_void) -> Self {
        Self {
            callback,
            user_data,
        }
    }

    fn enumerate(&self, query: SscdQuery) -> Result<Vec<Sscd>, ProviderError> {
        let mut out: *mut c_char = ptr::null_mut();
        let status = (self.callback)(query.into(), self.user_data, &mut out);
        let payload = take_host_string(out);

        trace!(?query, status, "CallbackProvider: host returned");

        if status != 0 {
            let reason = payload
                .ok()
                .flatten()
                .unwrap_or_else(|| format!("host callback returned {}", status));
            warn!(?query, status, "CallbackProvider: enumeration failed: {}", reason);
            return Err(ProviderError::enumeration(reason));
        }

        let json = payload?.ok_or_else(|| {
            ProviderError::SerializationError("host returned no SSCD list".to_string())
        })?;
        Ok(serde_json::from_str(&json)?)
    }
}

impl SscdProvider for CallbackProvider {
    fn list_active_sscds(&self) -> Result<Vec<Sscd>, ProviderError> {
        self.enumerate(SscdQuery::Active)
    }

    fn list_enabled_sscds(&self) -> Result<Vec<Sscd>, ProviderError> {
        self.enumerate(SscdQuery::Enabled)
    }
}

/// Copy and release a string the host allocated with `malloc`.
///
/// The string is released even when it is not valid UTF-8.
fn take_host_string(ptr: *mut c_char) -> Result<Option<String>, ProviderError> {
    if ptr.is_null() {
        return Ok(None);
    }
    // Safety: the callback contract requires a NUL-terminated malloc'd string
    let value = unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map(str::to_owned)
        .map_err(|e| {
            ProviderError::SerializationError(format!("host string is not UTF-8: {}", e))
        });
    unsafe { libc::free(ptr.cast()) };
    value.map(Some)
}
