//! Configuration for the bridge module.

use musap_sscd::ANDROID_API_NOUGAT;

/// Name under which the module is exposed to the application layer.
pub const DEFAULT_MODULE_NAME: &str = "MusapModule";

/// Lowest platform API level at which the SSCD listing is logged.
pub const MIN_DIAGNOSTIC_API_LEVEL: u32 = ANDROID_API_NOUGAT;

/// Configuration for the MUSAP bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Module name published in the bridge schema.
    pub module_name: String,
    /// Platforms below this API level get no diagnostic log line.
    pub min_diagnostic_api_level: u32,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            module_name: DEFAULT_MODULE_NAME.into(),
            min_diagnostic_api_level: MIN_DIAGNOSTIC_API_LEVEL,
        }
    }
}

impl BridgeConfig {
    /// Set the module name.
    #[must_use]
    pub fn module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = name.into();
        self
    }

    /// Set the diagnostic logging threshold.
    #[must_use]
    pub fn min_diagnostic_api_level(mut self, level: u32) -> Self {
        self.min_diagnostic_api_level = level;
        self
    }
}
