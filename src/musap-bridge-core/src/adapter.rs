//! Active SSCD listing adapter.
//!
//! The adapter is a per-call relay between the bridge and the signing SDK:
//! 1. Ask the provider for its active SSCDs (once, no retry)
//! 2. If the platform gate allows it, log the joined identifiers
//! 3. Hand the provider's sequence back untouched
//!
//! It keeps no state between calls. Provider failures pass through as
//! [`BridgeError::Provider`] without being logged here.

use musap_sscd::{HostPlatform, PlatformQuery, Sscd, SscdInfo, SscdProvider, SscdSettings};
use tracing::instrument;

use crate::config::BridgeConfig;
use crate::diagnostics::{join_sscd_ids, DiagnosticGate, DiagnosticSink, TracingSink, LOG_TAG};
use crate::error::BridgeError;

/// Exposes the provider's SSCD enumeration to the bridge.
pub struct SscdListingAdapter {
    provider: Box<dyn SscdProvider>,
    platform: Box<dyn PlatformQuery>,
    sink: Box<dyn DiagnosticSink>,
    gate: DiagnosticGate,
    config: BridgeConfig,
}

impl SscdListingAdapter {
    /// Create an adapter over `provider` with the host platform and
    /// `tracing` diagnostics.
    pub fn new(provider: impl SscdProvider + 'static) -> Self {
        Self::with_config(provider, BridgeConfig::default())
    }

    /// Create an adapter with a custom configuration.
    pub fn with_config(provider: impl SscdProvider + 'static, config: BridgeConfig) -> Self {
        tracing::info!(
            module = %config.module_name,
            min_diagnostic_api_level = config.min_diagnostic_api_level,
            "SscdListingAdapter: created"
        );
        Self {
            provider: Box::new(provider),
            platform: Box::new(HostPlatform),
            sink: Box::new(TracingSink),
            gate: DiagnosticGate::new(config.min_diagnostic_api_level),
            config,
        }
    }

    /// Replace the platform query.
    #[must_use]
    pub fn with_platform(mut self, platform: impl PlatformQuery + 'static) -> Self {
        self.platform = Box::new(platform);
        self
    }

    /// Replace the diagnostic sink.
    #[must_use]
    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Configuration in use.
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// List the active SSCDs.
    ///
    /// Returns exactly what the provider returned, in the provider's order.
    /// When the platform is at or above the configured API level, one
    /// diagnostic line with the `", "`-joined identifiers is emitted first;
    /// for an empty list that line is empty.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Provider`] with the provider's error if the
    /// enumeration fails. Nothing is logged in that case.
    #[instrument(level = "trace", skip(self))]
    pub fn list_sscds(&self) -> Result<Vec<Sscd>, BridgeError> {
        let sscds = self.provider.list_active_sscds()?;

        if self.gate.resolve(self.platform.as_ref()) {
            self.sink.emit(LOG_TAG, &join_sscd_ids(&sscds));
        }

        Ok(sscds)
    }

    /// List the SSCDs the SDK has enabled. Not logged.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Provider`] if the enumeration fails.
    pub fn list_enabled_sscds(&self) -> Result<Vec<Sscd>, BridgeError> {
        Ok(self.provider.list_enabled_sscds()?)
    }

    /// Info of the first enabled SSCD with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::SscdNotFound`] if no enabled SSCD matches or the
    /// match carries no info, and [`BridgeError::Provider`] if the
    /// enumeration fails.
    pub fn get_sscd_info(&self, sscd_id: &str) -> Result<SscdInfo, BridgeError> {
        self.find_enabled(sscd_id)?
            .sscd_info
            .ok_or_else(|| BridgeError::SscdNotFound {
                sscd_id: sscd_id.to_string(),
            })
    }

    /// Settings of the first enabled SSCD with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::SscdNotFound`] if no enabled SSCD matches, and
    /// [`BridgeError::Provider`] if the enumeration fails.
    pub fn get_settings(&self, sscd_id: &str) -> Result<SscdSettings, BridgeError> {
        Ok(self.find_enabled(sscd_id)?.settings)
    }

    fn find_enabled(&self, sscd_id: &str) -> Result<Sscd, BridgeError> {
        self.provider
            .list_enabled_sscds()?
            .into_iter()
            .find(|sscd| sscd.sscd_id == sscd_id)
            .ok_or_else(|| BridgeError::SscdNotFound {
                sscd_id: sscd_id.to_string(),
            })
    }
}
