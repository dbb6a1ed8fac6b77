//! Pixkit Mobile FFI Bindings
//!
//! This crate provides UniFFI bindings for Pixkit, enabling integration
//! with iOS (Swift) and Android (Kotlin) applications.
//!
//! # Architecture
//!
//! The FFI layer wraps the core Pixkit functionality:
//! - Payload generation (free functions and the [`PixMerchant`] object)
//! - Key formatting and classification
//! - QR scanning ([`scanner`])
//!
//! # Thread Safety
//!
//! All exposed types are thread-safe and can be used from any thread.

pub mod scanner;

pub use scanner::{ScannedPix, parse_scanned_payload};

use pixkit_lib::{Amount, MerchantConfig, PixKeyKind, PixkitError};
use std::sync::{Arc, RwLock};

// UniFFI scaffolding
uniffi::setup_scaffolding!();

// ============================================================================
// Error Types
// ============================================================================

/// Mobile-friendly error type.
#[derive(Debug, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum PixkitMobileError {
    /// Validation error (invalid input, format).
    #[error("Validation error: {msg}")]
    Validation { msg: String },

    /// Payload checksum did not match its contents.
    #[error("Checksum error: {msg}")]
    Checksum { msg: String },

    /// Resource not found.
    #[error("Not found: {msg}")]
    NotFound { msg: String },

    /// Serialization/deserialization error.
    #[error("Serialization error: {msg}")]
    Serialization { msg: String },

    /// Backend unavailable.
    #[error("Backend error: {msg}")]
    Backend { msg: String },

    /// Internal error (unexpected state).
    #[error("Internal error: {msg}")]
    Internal { msg: String },
}

impl From<PixkitError> for PixkitMobileError {
    fn from(e: PixkitError) -> Self {
        let msg = e.to_string();
        match e {
            PixkitError::InvalidAmount(_)
            | PixkitError::MissingField(_)
            | PixkitError::OversizeField { .. }
            | PixkitError::InvalidData { .. }
            | PixkitError::InvalidPayload(_) => Self::Validation { msg },
            PixkitError::ChecksumMismatch { .. } => Self::Checksum { msg },
            PixkitError::NotFound { .. } => Self::NotFound { msg },
            PixkitError::Serialization(_) => Self::Serialization { msg },
            PixkitError::Backend(_) => Self::Backend { msg },
            PixkitError::Internal(_) => Self::Internal { msg },
        }
    }
}

pub type Result<T> = std::result::Result<T, PixkitMobileError>;

// ============================================================================
// Core Types (FFI-safe wrappers)
// ============================================================================

/// Shape of a PIX key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum PixKeyType {
    Phone,
    Email,
    Cnpj,
    Random,
    Unknown,
}

impl From<PixKeyKind> for PixKeyType {
    fn from(kind: PixKeyKind) -> Self {
        match kind {
            PixKeyKind::Phone => Self::Phone,
            PixKeyKind::Email => Self::Email,
            PixKeyKind::Cnpj => Self::Cnpj,
            PixKeyKind::Random => Self::Random,
            PixKeyKind::Unknown => Self::Unknown,
        }
    }
}

/// Merchant settings as seen by the app.
#[derive(Clone, Debug, PartialEq, Eq, uniffi::Record)]
pub struct MerchantSettings {
    pub key: String,
    pub name: String,
    pub city: String,
    pub default_txid: Option<String>,
}

impl From<MerchantConfig> for MerchantSettings {
    fn from(config: MerchantConfig) -> Self {
        Self {
            key: config.key,
            name: config.name,
            city: config.city,
            default_txid: config.default_txid,
        }
    }
}

impl From<MerchantSettings> for MerchantConfig {
    fn from(settings: MerchantSettings) -> Self {
        Self {
            key: settings.key,
            name: settings.name,
            city: settings.city,
            default_txid: settings.default_txid,
        }
    }
}

// ============================================================================
// Payload Generation
// ============================================================================

/// Generate a static PIX payload with a fixed amount.
#[uniffi::export]
pub fn generate_pix_payload(key: String, name: String, city: String, amount: f64) -> Result<String> {
    Ok(pixkit_lib::assemble(&key, &name, &city, amount)?)
}

/// Generate a static PIX payload with a fixed amount and transaction id.
#[uniffi::export]
pub fn generate_pix_payload_with_txid(
    key: String,
    name: String,
    city: String,
    amount: f64,
    txid: String,
) -> Result<String> {
    let amount = Amount::from_f64(amount)?;
    let payload = pixkit_lib::PixPayload::new(key, pixkit_lib::MerchantInfo::new(name, city))
        .with_amount(amount)
        .with_txid(txid)
        .encode()?;
    Ok(payload)
}

/// Format a key the way it is written into the payload.
#[uniffi::export]
pub fn format_pix_key(raw: String) -> String {
    pixkit_lib::format_key(raw.trim())
}

/// Classify a key by shape.
#[uniffi::export]
pub fn classify_pix_key(raw: String) -> PixKeyType {
    pixkit_lib::classify_key(&raw).into()
}

/// CRC16/CCITT-FALSE of the text, as four uppercase hex digits.
#[uniffi::export]
pub fn compute_crc16(text: String) -> String {
    pixkit_lib::crc::crc16_hex(&text)
}

// ============================================================================
// Merchant Object
// ============================================================================

/// A configured merchant that generates payloads on demand.
#[derive(uniffi::Object)]
pub struct PixMerchant {
    config: RwLock<MerchantConfig>,
}

#[uniffi::export]
impl PixMerchant {
    /// Create a merchant, rejecting blank fields.
    #[uniffi::constructor]
    pub fn new(settings: MerchantSettings) -> Result<Arc<Self>> {
        let config = MerchantConfig::from(settings);
        config.validate()?;
        Ok(Arc::new(Self {
            config: RwLock::new(config),
        }))
    }

    /// Current settings.
    pub fn settings(&self) -> MerchantSettings {
        self.read_config().clone().into()
    }

    /// Replace the settings, keeping the old ones if the new are invalid.
    pub fn update_settings(&self, settings: MerchantSettings) -> Result<()> {
        let config = MerchantConfig::from(settings);
        config.validate()?;
        *self
            .config
            .write()
            .map_err(|e| PixkitMobileError::Internal { msg: e.to_string() })? = config;

        #[cfg(feature = "tracing")]
        tracing::debug!("merchant settings updated");
        Ok(())
    }

    /// Generate a payload. A `None` amount lets the payer choose; a `None`
    /// txid falls back to the default txid, then to `***`.
    pub fn generate(&self, amount: Option<f64>, txid: Option<String>) -> Result<String> {
        let mut payload = self.read_config().to_payload();
        if let Some(amount) = amount {
            payload = payload.with_amount(Amount::from_f64(amount)?);
        }
        if let Some(txid) = txid {
            payload = payload.with_txid(txid);
        }
        Ok(payload.encode()?)
    }
}

impl PixMerchant {
    fn read_config(&self) -> std::sync::RwLockReadGuard<'_, MerchantConfig> {
        self.config.read().unwrap_or_else(|e| e.into_inner())
    }
}

// ============================================================================
// Utility Functions
// ============================================================================

/// Get the library version.
#[uniffi::export]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> MerchantSettings {
        MerchantSettings {
            key: "11987654321".to_string(),
            name: "Joao Silva".to_string(),
            city: "Goiania".to_string(),
            default_txid: None,
        }
    }

    #[test]
    fn test_generate_pix_payload() {
        let payload = generate_pix_payload(
            "11987654321".to_string(),
            "Joao Silva".to_string(),
            "Goiania".to_string(),
            150.5,
        )
        .unwrap();
        assert!(payload.ends_with("630402DE"));
    }

    #[test]
    fn test_generate_negative_amount() {
        let err = generate_pix_payload(
            "11987654321".to_string(),
            "Joao Silva".to_string(),
            "Goiania".to_string(),
            -1.0,
        )
        .unwrap_err();
        assert!(matches!(err, PixkitMobileError::Validation { .. }));
    }

    #[test]
    fn test_generate_with_txid() {
        let payload = generate_pix_payload_with_txid(
            "loja@example.com".to_string(),
            "Loja".to_string(),
            "Recife".to_string(),
            10.0,
            "PEDIDO42".to_string(),
        )
        .unwrap();
        assert!(payload.contains("62120508PEDIDO42"));

        let bad = generate_pix_payload_with_txid(
            "loja@example.com".to_string(),
            "Loja".to_string(),
            "Recife".to_string(),
            10.0,
            "pedido 42".to_string(),
        );
        assert!(matches!(bad, Err(PixkitMobileError::Validation { .. })));
    }

    #[test]
    fn test_key_helpers() {
        assert_eq!(format_pix_key(" 11987654321 ".to_string()), "+5511987654321");
        assert_eq!(classify_pix_key("a@b.com".to_string()), PixKeyType::Email);
        assert_eq!(
            classify_pix_key("12345678000195".to_string()),
            PixKeyType::Cnpj
        );
    }

    #[test]
    fn test_compute_crc16() {
        assert_eq!(compute_crc16("123456789".to_string()), "29B1");
    }

    #[test]
    fn test_error_mapping() {
        let err: PixkitMobileError = PixkitError::ChecksumMismatch {
            expected: "02DE".to_string(),
            actual: "0000".to_string(),
        }
        .into();
        assert!(matches!(err, PixkitMobileError::Checksum { .. }));

        let err: PixkitMobileError = PixkitError::not_found("merchant", "joao").into();
        assert!(matches!(err, PixkitMobileError::NotFound { .. }));
    }

    #[test]
    fn test_merchant_object() {
        let merchant = PixMerchant::new(settings()).unwrap();
        let payload = merchant.generate(Some(150.5), None).unwrap();
        assert!(payload.ends_with("630402DE"));

        let open = merchant.generate(None, None).unwrap();
        assert!(!open.contains("5406"));
    }

    #[test]
    fn test_merchant_update_keeps_valid_settings() {
        let merchant = PixMerchant::new(settings()).unwrap();
        let mut blank = settings();
        blank.city = " ".to_string();
        assert!(merchant.update_settings(blank).is_err());
        assert_eq!(merchant.settings(), settings());

        let mut with_txid = settings();
        with_txid.default_txid = Some("CAIXA1".to_string());
        merchant.update_settings(with_txid).unwrap();
        assert!(merchant.generate(None, None).unwrap().contains("0506CAIXA1"));
    }

    #[test]
    fn test_rejects_blank_merchant() {
        let mut blank = settings();
        blank.key = String::new();
        assert!(PixMerchant::new(blank).is_err());
    }

    #[test]
    fn test_get_version() {
        assert!(!get_version().is_empty());
    }
}
