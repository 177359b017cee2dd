//! Android API level lookup via the system property store.

use std::ffi::CStr;

/// `PROP_VALUE_MAX` from `<sys/system_properties.h>`.
const PROP_VALUE_MAX: usize = 92;

/// Equivalent of `Build.VERSION.SDK_INT`, read without a JNI round trip.
pub(crate) fn sdk_int() -> Option<u32> {
    let mut buf = [0 as libc::c_char; PROP_VALUE_MAX];
    // Safety: name is NUL-terminated and buf holds PROP_VALUE_MAX bytes
    let len = unsafe {
        libc::__system_property_get(c"ro.build.version.sdk".as_ptr(), buf.as_mut_ptr())
    };
    if len <= 0 {
        tracing::warn!("sdk_int: ro.build.version.sdk not readable");
        return None;
    }

    // Safety: __system_property_get NUL-terminates within PROP_VALUE_MAX
    let value = unsafe { CStr::from_ptr(buf.as_ptr()) };
    match value.to_str().ok().and_then(|s| s.trim().parse().ok()) {
        Some(level) => Some(level),
        None => {
            tracing::warn!(value = ?value, "sdk_int: unparseable API level");
            None
        }
    }
}
