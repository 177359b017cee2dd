//! # musap-sscd
//!
//! SSCD model and provider seam for the MUSAP bridge.
//!
//! A Secure Signature Creation Device (SSCD) is anything the MUSAP signing SDK
//! can sign with: Android KeyStore, a YubiKey, a SIM applet, a remote signing
//! service. This crate only describes them and defines how the bridge asks the
//! SDK for them; it performs no cryptography.
//!
//! ## Provider Sources
//!
//! | Source | Type | Notes |
//! |--------|------|-------|
//! | Native host (C / JNI) | `musap-bridge-ffi::CallbackProvider` | SDK reached through a host callback |
//! | Precomputed list | [`StaticSscdProvider`] | Tests, hosts that snapshot at startup |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use musap_sscd::{detect_platform, Sscd, SscdProvider, StaticSscdProvider};
//!
//! let provider = StaticSscdProvider::new(vec![Sscd::new("TEE")]);
//! let active = provider.list_active_sscds()?;
//! let platform = detect_platform();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::pedantic)] // Too strict for production code
#![allow(clippy::doc_markdown)] // Allow product names without backticks
#![allow(clippy::missing_errors_doc)] // Error documentation not required
#![allow(clippy::missing_panics_doc)] // Panic documentation not required
#![allow(clippy::module_name_repetitions)] // Allow Type in module::Type
#![allow(clippy::must_use_candidate)] // Not all functions need must_use

mod error;
mod provider;
mod static_provider;
mod types;

/// Host platform version queries.
pub mod platform;

pub use error::ProviderError;
pub use provider::{SscdProvider, SscdQuery};
pub use static_provider::StaticSscdProvider;
pub use types::{KeyAlgorithm, SignatureFormat, Sscd, SscdInfo, SscdSettings};

pub use platform::{
    detect_platform, FixedPlatform, HostPlatform, PlatformInfo, PlatformQuery,
    ANDROID_API_NOUGAT,
};
