//! Diagnostic logging of SSCD listings.
//!
//! Whether a listing is logged is a capability of the host platform, resolved
//! on every call through [`DiagnosticGate`]. The line itself goes to a
//! [`DiagnosticSink`]; the default [`TracingSink`] emits a `debug` event under
//! the fixed target [`LOG_TAG`].
//!
//! Hosts below the threshold get nothing, not even a fallback line.

use musap_sscd::{PlatformQuery, Sscd};

/// Fixed tag for diagnostic lines.
pub const LOG_TAG: &str = "MusapModule";

/// Separator between SSCD identifiers in a diagnostic line.
pub const ID_SEPARATOR: &str = ", ";

/// Resolves whether diagnostic logging is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticGate {
    /// Lowest API level at which logging is enabled.
    pub min_api_level: u32,
}

impl DiagnosticGate {
    /// Create a gate with the given threshold.
    #[must_use]
    pub const fn new(min_api_level: u32) -> Self {
        Self { min_api_level }
    }

    /// Decide for the platform as it reports itself right now.
    ///
    /// Hosts without API levels are not version-gated and always log.
    pub fn resolve(&self, platform: &dyn PlatformQuery) -> bool {
        match platform.api_level() {
            Some(level) => level >= self.min_api_level,
            None => true,
        }
    }
}

/// Destination for diagnostic lines.
///
/// Emission is best effort: a sink must not fail the call that produced the
/// line, and must not block on anything but its own I/O.
pub trait DiagnosticSink: Send + Sync {
    /// Emit one line under `tag`.
    fn emit(&self, tag: &str, line: &str);
}

/// Sink that forwards to `tracing` at `debug` level.
///
/// The event carries the line as its only content; the tag is the event
/// target, which `tracing` requires to be static, so it is always
/// [`LOG_TAG`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, _tag: &str, line: &str) {
        tracing::debug!(target: LOG_TAG, "{}", line);
    }
}

/// Join SSCD identifiers in order with [`ID_SEPARATOR`].
pub fn join_sscd_ids(sscds: &[Sscd]) -> String {
    sscds
        .iter()
        .map(Sscd::sscd_id)
        .collect::<Vec<_>>()
        .join(ID_SEPARATOR)
}
