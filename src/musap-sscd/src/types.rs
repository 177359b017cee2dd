//! SSCD descriptors as the signing SDK reports them.
//!
//! Field names follow the JSON shape the MUSAP native modules hand to the
//! JavaScript layer (camelCase, `isKeyGenSupported`, nested `sscdInfo`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Provider-specific settings attached to an SSCD.
pub type SscdSettings = BTreeMap<String, String>;

/// A Secure Signature Creation Device as enumerated by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sscd {
    /// Identifier assigned by the provider when the SSCD was enabled.
    pub sscd_id: String,

    /// Descriptive information, absent when the provider has none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sscd_info: Option<SscdInfo>,

    /// Provider settings for this SSCD.
    #[serde(default)]
    pub settings: SscdSettings,
}

impl Sscd {
    /// Create an SSCD descriptor with only an identifier.
    #[must_use]
    pub fn new(sscd_id: impl Into<String>) -> Self {
        Self {
            sscd_id: sscd_id.into(),
            sscd_info: None,
            settings: SscdSettings::new(),
        }
    }

    /// Attach descriptive information.
    #[must_use]
    pub fn with_info(mut self, info: SscdInfo) -> Self {
        self.sscd_info = Some(info);
        self
    }

    /// Add a single setting.
    #[must_use]
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// The provider-assigned identifier.
    pub fn sscd_id(&self) -> &str {
        &self.sscd_id
    }
}

/// Descriptive information about an SSCD.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SscdInfo {
    /// Identifier, mirrors [`Sscd::sscd_id`] when set.
    #[serde(default)]
    pub sscd_id: Option<String>,

    /// SSCD type, e.g. `TEE` or `YUBI_KEY`.
    #[serde(default)]
    pub sscd_type: Option<String>,

    /// Human readable name.
    #[serde(default)]
    pub sscd_name: Option<String>,

    /// ISO country code of the SSCD operator.
    #[serde(default)]
    pub country: Option<String>,

    /// Operator or vendor name.
    #[serde(default)]
    pub provider: Option<String>,

    /// Whether the SSCD can generate keys (as opposed to only binding them).
    #[serde(default, rename = "isKeyGenSupported", alias = "keygenSupported")]
    pub key_gen_supported: bool,

    /// Key algorithms the SSCD supports.
    #[serde(default)]
    pub supported_algorithms: Vec<KeyAlgorithm>,

    /// Signature formats the SSCD can produce.
    #[serde(default)]
    pub formats: Vec<SignatureFormat>,
}

/// A key algorithm supported by an SSCD.
///
/// The `isRsa`/`isEc` flags are always present on the wire. Providers may
/// omit them, in which case they are derived from `primitive` on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "KeyAlgorithmRecord")]
pub struct KeyAlgorithm {
    /// Algorithm primitive, `RSA` or `EC`.
    pub primitive: String,

    /// Curve name for EC keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve: Option<String>,

    /// Key size in bits.
    pub bits: u32,

    /// Whether this is an RSA algorithm.
    pub is_rsa: bool,

    /// Whether this is an elliptic curve algorithm.
    pub is_ec: bool,
}

/// Provider-side shape of [`KeyAlgorithm`], with optional flags.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct KeyAlgorithmRecord {
    primitive: String,
    #[serde(default)]
    curve: Option<String>,
    bits: u32,
    #[serde(default)]
    is_rsa: Option<bool>,
    #[serde(default)]
    is_ec: Option<bool>,
}

impl From<KeyAlgorithmRecord> for KeyAlgorithm {
    fn from(record: KeyAlgorithmRecord) -> Self {
        let is_rsa = record
            .is_rsa
            .unwrap_or_else(|| record.primitive.eq_ignore_ascii_case("RSA"));
        let is_ec = record
            .is_ec
            .unwrap_or_else(|| record.primitive.eq_ignore_ascii_case("EC"));
        Self {
            primitive: record.primitive,
            curve: record.curve,
            bits: record.bits,
            is_rsa,
            is_ec,
        }
    }
}

impl KeyAlgorithm {
    /// Create an RSA algorithm of the given size.
    #[must_use]
    pub fn rsa(bits: u32) -> Self {
        Self {
            primitive: "RSA".to_string(),
            curve: None,
            bits,
            is_rsa: true,
            is_ec: false,
        }
    }

    /// Create an EC algorithm on the given curve.
    #[must_use]
    pub fn ec(curve: impl Into<String>, bits: u32) -> Self {
        Self {
            primitive: "EC".to_string(),
            curve: Some(curve.into()),
            bits,
            is_rsa: false,
            is_ec: true,
        }
    }
}

/// A signature format an SSCD can produce.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignatureFormat {
    /// Format name, e.g. `CMS`, `RAW` or `PKCS1`.
    pub format: String,
}

impl SignatureFormat {
    /// Create a signature format.
    #[must_use]
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }
}
