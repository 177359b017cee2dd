//! Platform detection.

use serde::Serialize;

/// Snapshot of the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformInfo {
    /// Operating system family, from `std::env::consts::OS`.
    pub os: &'static str,
    /// Platform API level, when the host versions its APIs by level.
    pub api_level: Option<u32>,
}

/// Read-only query for the host platform version.
pub trait PlatformQuery: Send + Sync {
    /// The host API level, `None` if the host has no such notion.
    fn api_level(&self) -> Option<u32>;
}

/// Queries the platform the process is running on.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostPlatform;

impl PlatformQuery for HostPlatform {
    fn api_level(&self) -> Option<u32> {
        host_api_level()
    }
}

/// A pinned platform version, for hosts that pass it in at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPlatform(pub Option<u32>);

impl FixedPlatform {
    /// A platform at the given API level.
    #[must_use]
    pub const fn api(level: u32) -> Self {
        Self(Some(level))
    }

    /// A platform without API levels.
    #[must_use]
    pub const fn unversioned() -> Self {
        Self(None)
    }
}

impl PlatformQuery for FixedPlatform {
    fn api_level(&self) -> Option<u32> {
        self.0
    }
}

impl<Q: PlatformQuery + ?Sized> PlatformQuery for Box<Q> {
    fn api_level(&self) -> Option<u32> {
        (**self).api_level()
    }
}

impl<Q: PlatformQuery + ?Sized> PlatformQuery for std::sync::Arc<Q> {
    fn api_level(&self) -> Option<u32> {
        (**self).api_level()
    }
}

/// Detect the current platform.
pub fn detect_platform() -> PlatformInfo {
    let info = PlatformInfo {
        os: std::env::consts::OS,
        api_level: host_api_level(),
    };
    tracing::debug!(os = info.os, api_level = ?info.api_level, "detect_platform");
    info
}

#[cfg(target_os = "android")]
fn host_api_level() -> Option<u32> {
    super::android::sdk_int()
}

#[cfg(not(target_os = "android"))]
fn host_api_level() -> Option<u32> {
    None
}
