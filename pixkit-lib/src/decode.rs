//! BR Code payload decoding.
//!
//! Mobile apps scan payloads produced by other generators too, so decoding is
//! lenient where the standard allows it (GUI case, CRC hex case, merchant
//! account in any of tags 26..=51) and strict everywhere else.

use crate::crc::{crc16_hex, CRC_FIELD_PREFIX};
use crate::payload::{
    MerchantInfo, PixPayload, NO_TXID, PAYLOAD_FORMAT_VERSION, PIX_GUI, TAG_ACCOUNT_DESCRIPTION,
    TAG_ACCOUNT_GUI, TAG_ACCOUNT_KEY, TAG_ADDITIONAL_DATA, TAG_AMOUNT, TAG_CATEGORY_CODE,
    TAG_COUNTRY, TAG_CURRENCY, TAG_MERCHANT_CITY, TAG_MERCHANT_NAME, TAG_PAYLOAD_FORMAT,
    TAG_REFERENCE_LABEL,
};
use crate::tlv::{find_field, parse_fields, TlvField};
use crate::{Amount, PixkitError, Result};
use serde::{Deserialize, Serialize};

/// Tag of a dynamic charge location URL inside the merchant account.
const TAG_ACCOUNT_LOCATION: &str = "25";

/// Length of the trailing `6304XXXX` field.
const CRC_FIELD_LEN: usize = 8;

/// Fields read back from a BR Code payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedPayload {
    /// PIX key as encoded (phone keys carry `+55`).
    pub key: String,
    /// Free-text description (tag 26/02).
    pub description: Option<String>,
    /// Merchant category code (tag 52).
    pub category_code: Option<String>,
    /// ISO 4217 numeric currency (tag 53).
    pub currency: String,
    /// Transaction amount (tag 54).
    pub amount: Option<Amount>,
    /// Country code (tag 58).
    pub country: String,
    /// Merchant name (tag 59).
    pub merchant_name: String,
    /// Merchant city (tag 60).
    pub merchant_city: String,
    /// Reference label (tag 62/05).
    pub txid: Option<String>,
    /// CRC as carried by the payload, uppercased.
    pub crc: String,
}

impl DecodedPayload {
    /// Rebuild an encodable charge from the decoded fields.
    pub fn to_payload(&self) -> PixPayload {
        let mut payload = PixPayload::new(
            self.key.clone(),
            MerchantInfo::new(self.merchant_name.clone(), self.merchant_city.clone()),
        );
        if let Some(amount) = self.amount {
            payload = payload.with_amount(amount);
        }
        if let Some(txid) = &self.txid {
            payload = payload.with_txid(txid.clone());
        }
        if let Some(description) = &self.description {
            payload = payload.with_description(description.clone());
        }
        payload
    }
}

/// Check the trailing CRC field against the payload content.
///
/// # Errors
///
/// - [`PixkitError::InvalidPayload`] if the payload does not end with a
///   `6304` field followed by four hex digits.
/// - [`PixkitError::ChecksumMismatch`] if the digits disagree with the
///   computed CRC.
pub fn verify_crc(input: &str) -> Result<()> {
    let input = input.trim();
    let (body, crc) = split_crc(input)?;
    let actual = crc16_hex(body);
    if !crc.eq_ignore_ascii_case(&actual) {
        return Err(PixkitError::ChecksumMismatch {
            expected: crc.to_ascii_uppercase(),
            actual,
        });
    }
    Ok(())
}

/// Quick check whether scanned data is a PIX payload with a valid CRC.
pub fn is_pix_payload(input: &str) -> bool {
    let input = input.trim();
    input.starts_with("000201")
        && input.to_ascii_lowercase().contains(PIX_GUI)
        && verify_crc(input).is_ok()
}

/// Decode and validate a BR Code payload.
///
/// # Errors
///
/// Returns [`PixkitError::ChecksumMismatch`] for a corrupted payload and
/// [`PixkitError::InvalidPayload`] for structural problems or missing
/// mandatory fields.
///
/// # Example
///
/// ```
/// use pixkit_lib::{assemble, decode_payload};
///
/// let payload = assemble("11987654321", "Joao Silva", "Goiania", 150.5).unwrap();
/// let decoded = decode_payload(&payload).unwrap();
/// assert_eq!(decoded.key, "+5511987654321");
/// assert_eq!(decoded.merchant_city, "Goiania");
/// ```
#[cfg_attr(feature = "tracing", tracing::instrument(skip(input), fields(len = input.len())))]
pub fn decode_payload(input: &str) -> Result<DecodedPayload> {
    let input = input.trim();
    verify_crc(input)?;
    let (_, crc) = split_crc(input)?;

    let fields = parse_fields(input)?;

    let format = required(&fields, TAG_PAYLOAD_FORMAT, "payload format indicator")?;
    if format != PAYLOAD_FORMAT_VERSION {
        return Err(PixkitError::InvalidPayload(format!(
            "unsupported payload format '{}'",
            format
        )));
    }

    let account = find_pix_account(&fields)?;
    let key = match find_field(&account, TAG_ACCOUNT_KEY) {
        Some(field) if !field.value.is_empty() => field.value.clone(),
        _ if find_field(&account, TAG_ACCOUNT_LOCATION).is_some() => {
            return Err(PixkitError::InvalidPayload(
                "dynamic payloads carrying a location URL are not supported".to_string(),
            ))
        }
        _ => {
            return Err(PixkitError::InvalidPayload(
                "merchant account has no PIX key".to_string(),
            ))
        }
    };
    let description = find_field(&account, TAG_ACCOUNT_DESCRIPTION).map(|f| f.value.clone());

    let amount = match find_field(&fields, TAG_AMOUNT) {
        Some(field) => Some(Amount::from_str_checked(&field.value).map_err(|e| {
            PixkitError::InvalidPayload(format!("tag {}: {}", TAG_AMOUNT, e))
        })?),
        None => None,
    };

    let txid = match find_field(&fields, TAG_ADDITIONAL_DATA) {
        Some(field) => {
            let nested = parse_fields(&field.value)?;
            find_field(&nested, TAG_REFERENCE_LABEL)
                .map(|f| f.value.clone())
                .filter(|txid| txid != NO_TXID)
        }
        None => None,
    };

    let decoded = DecodedPayload {
        key,
        description,
        category_code: find_field(&fields, TAG_CATEGORY_CODE).map(|f| f.value.clone()),
        currency: required(&fields, TAG_CURRENCY, "currency")?,
        amount,
        country: required(&fields, TAG_COUNTRY, "country code")?,
        merchant_name: required(&fields, TAG_MERCHANT_NAME, "merchant name")?,
        merchant_city: required(&fields, TAG_MERCHANT_CITY, "merchant city")?,
        txid,
        crc: crc.to_ascii_uppercase(),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        key_kind = %crate::key::classify_key(&decoded.key),
        has_amount = decoded.amount.is_some(),
        "decoded BR Code payload"
    );

    Ok(decoded)
}

fn split_crc(input: &str) -> Result<(&str, &str)> {
    if input.len() < CRC_FIELD_LEN || !input.is_char_boundary(input.len() - 4) {
        return Err(PixkitError::InvalidPayload(
            "payload too short to carry a CRC".to_string(),
        ));
    }
    let (body, crc) = input.split_at(input.len() - 4);
    if !body.ends_with(CRC_FIELD_PREFIX) {
        return Err(PixkitError::InvalidPayload(format!(
            "payload must end with a {} CRC field",
            CRC_FIELD_PREFIX
        )));
    }
    if !crc.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(PixkitError::InvalidPayload(format!(
            "CRC '{}' is not hexadecimal",
            crc
        )));
    }
    Ok((body, crc))
}

fn find_pix_account(fields: &[TlvField]) -> Result<Vec<TlvField>> {
    for field in fields {
        let is_account_tag = matches!(field.tag.parse::<u8>(), Ok(26..=51));
        if !is_account_tag {
            continue;
        }
        let nested = parse_fields(&field.value)?;
        let is_pix = find_field(&nested, TAG_ACCOUNT_GUI)
            .map(|gui| gui.value.eq_ignore_ascii_case(PIX_GUI))
            .unwrap_or(false);
        if is_pix {
            return Ok(nested);
        }
    }
    Err(PixkitError::InvalidPayload(format!(
        "no merchant account with GUI {}",
        PIX_GUI
    )))
}

fn required(fields: &[TlvField], tag: &str, label: &str) -> Result<String> {
    find_field(fields, tag)
        .map(|f| f.value.clone())
        .ok_or_else(|| PixkitError::InvalidPayload(format!("missing {} (tag {})", label, tag)))
}
