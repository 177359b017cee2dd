//! Signing capability provider trait.
//!
//! This module defines the [`SscdProvider`] trait through which the bridge
//! reaches the signing SDK. The SDK itself (key generation, signing, SSCD
//! registration) lives behind this seam and is not modelled here.

use crate::error::ProviderError;
use crate::types::Sscd;

/// Which SSCD population a host is asked to enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SscdQuery {
    /// SSCDs that can currently generate or bind keys.
    Active = 0,
    /// SSCDs the SDK supports and has been told to enable.
    Enabled = 1,
}

/// Trait for a signing SDK that can enumerate its SSCDs.
///
/// ## Contract
///
/// - Calls are synchronous and run on the caller's thread.
/// - Order of the returned sequence is the provider's own; callers must not
///   rely on any other ordering.
/// - Initialisation of the SDK happens elsewhere in the host lifecycle. A
///   provider that is asked to enumerate before that may return
///   [`ProviderError::NotInitialized`].
///
/// ## Example
///
/// ```rust,ignore
/// use musap_sscd::{SscdProvider, StaticSscdProvider, Sscd};
///
/// let provider = StaticSscdProvider::new(vec![Sscd::new("TEE")]);
/// for sscd in provider.list_active_sscds()? {
///     println!("{}", sscd.sscd_id());
/// }
/// ```
pub trait SscdProvider: Send + Sync {
    /// Enumerate SSCDs that can generate or bind keys.
    ///
    /// # Errors
    ///
    /// Returns error if the provider is unreachable or the enumeration fails.
    fn list_active_sscds(&self) -> Result<Vec<Sscd>, ProviderError>;

    /// Enumerate SSCDs the SDK has enabled.
    ///
    /// # Errors
    ///
    /// Returns error if the provider is unreachable or the enumeration fails.
    fn list_enabled_sscds(&self) -> Result<Vec<Sscd>, ProviderError>;

    /// Run the enumeration selected by `query`.
    fn list(&self, query: SscdQuery) -> Result<Vec<Sscd>, ProviderError> {
        match query {
            SscdQuery::Active => self.list_active_sscds(),
            SscdQuery::Enabled => self.list_enabled_sscds(),
        }
    }
}

impl<P: SscdProvider + ?Sized> SscdProvider for Box<P> {
    fn list_active_sscds(&self) -> Result<Vec<Sscd>, ProviderError> {
        (**self).list_active_sscds()
    }

    fn list_enabled_sscds(&self) -> Result<Vec<Sscd>, ProviderError> {
        (**self).list_enabled_sscds()
    }
}

impl<P: SscdProvider + ?Sized> SscdProvider for std::sync::Arc<P> {
    fn list_active_sscds(&self) -> Result<Vec<Sscd>, ProviderError> {
        (**self).list_active_sscds()
    }

    fn list_enabled_sscds(&self) -> Result<Vec<Sscd>, ProviderError> {
        (**self).list_enabled_sscds()
    }
}
