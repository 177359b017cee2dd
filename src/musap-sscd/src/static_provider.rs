//! In-memory SSCD provider.
//!
//! Serves hosts that compute their SSCD list up front and hands out copies of
//! it on every call. Also the provider used throughout the test suites.

use std::sync::RwLock;

use crate::error::ProviderError;
use crate::provider::SscdProvider;
use crate::types::Sscd;

/// Provider backed by fixed, replaceable SSCD lists.
///
/// The enabled list defaults to the active list when not given separately.
#[derive(Debug, Default)]
pub struct StaticSscdProvider {
    active: RwLock<Vec<Sscd>>,
    enabled: RwLock<Option<Vec<Sscd>>>,
}

impl StaticSscdProvider {
    /// Create a provider whose active and enabled lists are `sscds`.
    #[must_use]
    pub fn new(sscds: Vec<Sscd>) -> Self {
        tracing::debug!(count = sscds.len(), "StaticSscdProvider: created");
        Self {
            active: RwLock::new(sscds),
            enabled: RwLock::new(None),
        }
    }

    /// Use a separate enabled list.
    #[must_use]
    pub fn with_enabled(self, enabled: Vec<Sscd>) -> Self {
        Self {
            active: self.active,
            enabled: RwLock::new(Some(enabled)),
        }
    }

    /// Replace the active list for subsequent calls.
    ///
    /// # Errors
    ///
    /// Returns error if the internal lock was poisoned.
    pub fn set_active(&self, sscds: Vec<Sscd>) -> Result<(), ProviderError> {
        let mut active = self
            .active
            .write()
            .map_err(|_| ProviderError::unavailable("active list lock poisoned"))?;
        *active = sscds;
        Ok(())
    }
}

impl SscdProvider for StaticSscdProvider {
    fn list_active_sscds(&self) -> Result<Vec<Sscd>, ProviderError> {
        let active = self
            .active
            .read()
            .map_err(|_| ProviderError::unavailable("active list lock poisoned"))?;
        Ok(active.clone())
    }

    fn list_enabled_sscds(&self) -> Result<Vec<Sscd>, ProviderError> {
        let enabled = self
            .enabled
            .read()
            .map_err(|_| ProviderError::unavailable("enabled list lock poisoned"))?;
        match enabled.as_ref() {
            Some(list) => Ok(list.clone()),
            None => self.list_active_sscds(),
        }
    }
}
