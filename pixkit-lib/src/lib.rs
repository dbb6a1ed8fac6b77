//! Pixkit library.
//!
//! Encodes and decodes PIX BR Code payloads: the EMV-derived text behind the
//! QR codes of Brazil's instant payment system. Encoding is a pure function of
//! its inputs; the only I/O seam is the [`charge::ChargeBackend`] trait, which
//! callers implement and inject.
//!
//! # Features
//!
//! - **Encoder**: TLV fields, text normalization, phone key formatting, CRC16
//! - **Decoder**: payload parsing with CRC verification
//! - **Charges**: issue and confirm charges against an injected backend
//!
//! # Example
//!
//! ```
//! use pixkit_lib::{assemble, decode_payload};
//!
//! let payload = assemble("11987654321", "José da Silva", "Goiânia", 150.5)?;
//! assert!(payload.contains("5913Jose da Silva"));
//!
//! let decoded = decode_payload(&payload)?;
//! assert_eq!(decoded.key, "+5511987654321");
//! # Ok::<(), pixkit_lib::PixkitError>(())
//! ```

pub mod amount;
pub mod charge;
pub mod config;
pub mod crc;
pub mod decode;
pub mod errors;
pub mod key;
pub mod normalize;
pub mod payload;
pub mod prelude;
pub mod tlv;

/// Test utilities for charge testing.
///
/// This module is only available with the `test-utils` feature or in test builds.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use amount::Amount;
pub use config::MerchantConfig;
pub use decode::{decode_payload, is_pix_payload, verify_crc, DecodedPayload};
pub use errors::{PixkitError, PixkitErrorCode};
pub use key::{classify_key, format_key, PixKeyKind};
pub use payload::{assemble, MerchantInfo, PixPayload};

/// Common result alias for Pixkit operations.
pub type Result<T> = std::result::Result<T, PixkitError>;
