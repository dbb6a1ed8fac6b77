//! BR Code payload assembly.
//!
//! Fields are emitted in a fixed order; consuming bank apps validate the order
//! and the CRC covers the exact byte sequence.
//!
//! | Tag | Field |
//! |-----|-------|
//! | 00 | Payload format indicator (`01`) |
//! | 26 | Merchant account: GUI (00), key (01), description (02) |
//! | 52 | Merchant category code (`0000`) |
//! | 53 | Currency (`986`, BRL) |
//! | 54 | Amount, optional |
//! | 58 | Country (`BR`) |
//! | 59 | Merchant name, max 25 |
//! | 60 | Merchant city, max 15 |
//! | 62 | Additional data: reference label (05) |
//! | 63 | CRC16 |

use crate::crc::{crc16_hex, CRC_FIELD_PREFIX};
use crate::key::format_key;
use crate::normalize::{normalize_city, normalize_name, normalize_text};
use crate::tlv::{format_field, MAX_FIELD_LEN};
use crate::{Amount, PixkitError, Result};
use serde::{Deserialize, Serialize};

pub const TAG_PAYLOAD_FORMAT: &str = "00";
pub const TAG_MERCHANT_ACCOUNT: &str = "26";
pub const TAG_CATEGORY_CODE: &str = "52";
pub const TAG_CURRENCY: &str = "53";
pub const TAG_AMOUNT: &str = "54";
pub const TAG_COUNTRY: &str = "58";
pub const TAG_MERCHANT_NAME: &str = "59";
pub const TAG_MERCHANT_CITY: &str = "60";
pub const TAG_ADDITIONAL_DATA: &str = "62";
pub const TAG_CRC: &str = "63";

/// Nested tags inside the merchant account template (26).
pub const TAG_ACCOUNT_GUI: &str = "00";
pub const TAG_ACCOUNT_KEY: &str = "01";
pub const TAG_ACCOUNT_DESCRIPTION: &str = "02";

/// Nested tag inside the additional data template (62).
pub const TAG_REFERENCE_LABEL: &str = "05";

pub const PAYLOAD_FORMAT_VERSION: &str = "01";
pub const PIX_GUI: &str = "br.gov.bcb.pix";
pub const CATEGORY_CODE: &str = "0000";
/// ISO 4217 numeric code for BRL.
pub const CURRENCY_BRL: &str = "986";
pub const COUNTRY_CODE: &str = "BR";
/// Reference label meaning "no reference".
pub const NO_TXID: &str = "***";
pub const MAX_TXID_LEN: usize = 25;

/// Recipient shown to the payer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantInfo {
    /// Merchant name, normalized to 25 characters on encode.
    pub name: String,
    /// Merchant city, normalized to 15 characters on encode.
    pub city: String,
}

impl MerchantInfo {
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
        }
    }
}

/// A static PIX charge, ready to encode.
///
/// # Example
///
/// ```
/// use pixkit_lib::{Amount, MerchantInfo, PixPayload};
///
/// let payload = PixPayload::new("11987654321", MerchantInfo::new("Joao Silva", "Goiania"))
///     .with_amount(Amount::from_f64(150.5).unwrap())
///     .encode()
///     .unwrap();
///
/// assert!(payload.starts_with("000201"));
/// assert!(payload.contains("5406150.50"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixPayload {
    key: String,
    merchant: MerchantInfo,
    amount: Option<Amount>,
    txid: Option<String>,
    description: Option<String>,
}

impl PixPayload {
    /// Create a charge without amount for the given key and merchant.
    pub fn new(key: impl Into<String>, merchant: MerchantInfo) -> Self {
        Self {
            key: key.into(),
            merchant,
            amount: None,
            txid: None,
            description: None,
        }
    }

    /// Set the amount (tag 54). Without it the payer types the amount.
    pub fn with_amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set the reference label (tag 62/05). Defaults to `***`.
    pub fn with_txid(mut self, txid: impl Into<String>) -> Self {
        self.txid = Some(txid.into());
        self
    }

    /// Set a free-text description (tag 26/02).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn merchant(&self) -> &MerchantInfo {
        &self.merchant
    }

    pub fn amount(&self) -> Option<Amount> {
        self.amount
    }

    /// Reference label that will be encoded.
    pub fn txid(&self) -> &str {
        self.txid.as_deref().unwrap_or(NO_TXID)
    }

    /// Encode the complete payload, CRC included.
    ///
    /// # Errors
    ///
    /// - [`PixkitError::MissingField`] for an empty key, name or city.
    /// - [`PixkitError::OversizeField`] when the key (plus description) does
    ///   not fit the merchant account template, or the amount is too long.
    /// - [`PixkitError::InvalidData`] for a malformed txid or a non-ASCII key.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), fields(key_kind = %crate::key::classify_key(&self.key)))
    )]
    pub fn encode(&self) -> Result<String> {
        let key = self.key.trim();
        if key.is_empty() {
            return Err(PixkitError::MissingField("key"));
        }
        if !key.is_ascii() {
            return Err(PixkitError::invalid_data(
                "key",
                "must contain only ASCII characters",
            ));
        }
        let name = normalize_name(&self.merchant.name);
        if name.is_empty() {
            return Err(PixkitError::MissingField("name"));
        }
        let city = normalize_city(&self.merchant.city);
        if city.is_empty() {
            return Err(PixkitError::MissingField("city"));
        }
        let txid = validate_txid(self.txid())?;

        let mut payload = String::with_capacity(160);
        payload.push_str(&format_field(TAG_PAYLOAD_FORMAT, PAYLOAD_FORMAT_VERSION)?);
        payload.push_str(&format_field(
            TAG_MERCHANT_ACCOUNT,
            &self.merchant_account(key)?,
        )?);
        payload.push_str(&format_field(TAG_CATEGORY_CODE, CATEGORY_CODE)?);
        payload.push_str(&format_field(TAG_CURRENCY, CURRENCY_BRL)?);
        if let Some(amount) = &self.amount {
            payload.push_str(&format_field(TAG_AMOUNT, &amount.to_field_value()?)?);
        }
        payload.push_str(&format_field(TAG_COUNTRY, COUNTRY_CODE)?);
        payload.push_str(&format_field(TAG_MERCHANT_NAME, &name)?);
        payload.push_str(&format_field(TAG_MERCHANT_CITY, &city)?);
        payload.push_str(&format_field(
            TAG_ADDITIONAL_DATA,
            &format_field(TAG_REFERENCE_LABEL, txid)?,
        )?);
        payload.push_str(CRC_FIELD_PREFIX);

        let crc = crc16_hex(&payload);
        payload.push_str(&crc);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            payload_len = payload.len(),
            key_kind = %crate::key::classify_key(key),
            crc = %crc,
            "assembled BR Code payload"
        );

        Ok(payload)
    }

    fn merchant_account(&self, key: &str) -> Result<String> {
        let mut account = format_field(TAG_ACCOUNT_GUI, PIX_GUI)?;
        account.push_str(&format_field(TAG_ACCOUNT_KEY, &format_key(key))?);

        if let Some(description) = &self.description {
            let description = normalize_text(description, MAX_FIELD_LEN);
            if !description.is_empty() {
                account.push_str(&format_field(TAG_ACCOUNT_DESCRIPTION, &description)?);
            }
        }

        let len = account.chars().count();
        if len > MAX_FIELD_LEN {
            return Err(PixkitError::oversize("merchant_account", len, MAX_FIELD_LEN));
        }
        Ok(account)
    }
}

/// Assemble a payload from plain inputs.
///
/// # Errors
///
/// Fails fast with [`PixkitError::InvalidAmount`] or
/// [`PixkitError::MissingField`] before anything is encoded; see
/// [`PixPayload::encode`] for the remaining cases.
///
/// # Example
///
/// ```
/// let payload = pixkit_lib::assemble("11987654321", "Joao Silva", "Goiania", 0.0).unwrap();
/// assert!(payload.contains("54040.00"));
/// ```
pub fn assemble(key: &str, name: &str, city: &str, amount: f64) -> Result<String> {
    let amount = Amount::from_f64(amount)?;
    PixPayload::new(key, MerchantInfo::new(name, city))
        .with_amount(amount)
        .encode()
}

fn validate_txid(txid: &str) -> Result<&str> {
    if txid == NO_TXID {
        return Ok(txid);
    }
    if txid.is_empty() || txid.len() > MAX_TXID_LEN {
        return Err(PixkitError::invalid_data(
            "txid",
            format!("must be 1 to {} characters", MAX_TXID_LEN),
        ));
    }
    if !txid.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(PixkitError::invalid_data(
            "txid",
            "must contain only ASCII letters and digits",
        ));
    }
    Ok(txid)
}
