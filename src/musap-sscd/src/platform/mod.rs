//! Host platform version queries.
//!
//! The bridge only ever reads the platform version; it never changes it.
//! - Android: `ro.build.version.sdk` system property (API level)
//! - Elsewhere: no version gate, reported as `None`

#[cfg(target_os = "android")]
mod android;

mod detect;

pub use detect::{detect_platform, FixedPlatform, HostPlatform, PlatformInfo, PlatformQuery};

/// Android API level of 7.0 "Nougat".
pub const ANDROID_API_NOUGAT: u32 = 24;
