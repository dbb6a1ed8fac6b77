//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use pixkit_lib::prelude::*;
//! ```
//!
//! ## What's Included
//!
//! - Encoding: `PixPayload`, `MerchantInfo`, `Amount`, `assemble`
//! - Decoding: `decode_payload`, `DecodedPayload`, `verify_crc`
//! - Error types: `PixkitError`, `PixkitErrorCode`, `Result`
//! - Charges: `ChargeBackend`, `ChargeService`, `Charge`, `ChargeStatus`

// Encoding
pub use crate::amount::Amount;
pub use crate::config::MerchantConfig;
pub use crate::key::{classify_key, format_key, PixKeyKind};
pub use crate::payload::{assemble, MerchantInfo, PixPayload};

// Decoding
pub use crate::decode::{decode_payload, is_pix_payload, verify_crc, DecodedPayload};

// Error handling
pub use crate::errors::{PixkitError, PixkitErrorCode};
pub use crate::Result;

// Charges
pub use crate::charge::{Charge, ChargeBackend, ChargeService, ChargeStatus};
