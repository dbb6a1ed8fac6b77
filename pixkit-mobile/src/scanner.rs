//! QR Code Scanner Integration
//!
//! Mobile apps scan a PIX QR code and pass the raw text here. The scanner
//! verifies the checksum, decodes the fields and returns a flat record the
//! app can show on a confirmation screen.
//!
//! # Example
//!
//! ```ignore
//! // From Swift/Kotlin after QR scan
//! if isPixPayload(data: scanned) {
//!     let pix = try parseScannedPayload(data: scanned)
//!     showConfirmation(pix.merchantName, pix.amount)
//! }
//! ```

use crate::{PixKeyType, Result};

/// A decoded PIX payload, flattened for FFI.
#[derive(Clone, Debug, PartialEq, Eq, uniffi::Record)]
pub struct ScannedPix {
    /// Key as encoded in the payload.
    pub key: String,
    /// Shape of the key.
    pub key_type: PixKeyType,
    /// Merchant name (tag 59).
    pub merchant_name: String,
    /// Merchant city (tag 60).
    pub merchant_city: String,
    /// Amount as a two-decimal string, `None` when the payer chooses.
    pub amount: Option<String>,
    /// Transaction id, `None` for `***`.
    pub txid: Option<String>,
    /// Free-text description, if any.
    pub description: Option<String>,
    /// The CRC field as found in the payload.
    pub crc: String,
}

/// Parse scanned QR code data as a PIX payload.
///
/// # Errors
///
/// `PixkitMobileError::Checksum` when the CRC does not match, and
/// `PixkitMobileError::Validation` when the text is not a PIX payload.
#[uniffi::export]
pub fn parse_scanned_payload(data: String) -> Result<ScannedPix> {
    let decoded = pixkit_lib::decode_payload(data.trim())?;

    Ok(ScannedPix {
        key_type: pixkit_lib::classify_key(&decoded.key).into(),
        key: decoded.key,
        merchant_name: decoded.merchant_name,
        merchant_city: decoded.merchant_city,
        amount: decoded.amount.map(|amount| amount.to_string()),
        txid: decoded.txid,
        description: decoded.description,
        crc: decoded.crc,
    })
}

/// Quick check that scanned data is a PIX payload with a valid checksum.
///
/// Useful for filtering QR codes before attempting a full parse.
#[uniffi::export]
pub fn is_pix_payload(data: String) -> bool {
    pixkit_lib::is_pix_payload(&data)
}
