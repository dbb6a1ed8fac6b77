//! PIX key formatting.
//!
//! A PIX key carries no type tag. Phone keys are recognised by their digit
//! count: a Brazilian mobile number without country code has 11 digits and
//! gets the `+55` prefix the directory expects.
//!
//! # Known limitation
//!
//! A CPF also has 11 digits, so a CPF key is encoded as a phone number. The
//! heuristic is kept for compatibility with payloads already in circulation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Country calling code prepended to bare mobile numbers.
pub const BRAZIL_CALLING_CODE: &str = "+55";

const MOBILE_DIGITS: usize = 11;
const CNPJ_DIGITS: usize = 14;

/// What a PIX key looks like, as far as the encoder can tell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixKeyKind {
    /// Phone number, `+55` prefixed once formatted.
    Phone,
    /// E-mail address.
    Email,
    /// Company tax ID (14 digits).
    Cnpj,
    /// Random key (UUID).
    Random,
    /// Anything else; encoded verbatim.
    Unknown,
}

impl PixKeyKind {
    /// Lowercase label used in logs and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Cnpj => "cnpj",
            Self::Random => "random",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PixKeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format a raw PIX key for the merchant account template.
///
/// Keys made only of digits and phone punctuation that hold exactly 11
/// digits become `+55` followed by the digits. Every other key is returned
/// unchanged.
///
/// # Example
///
/// ```
/// use pixkit_lib::key::format_key;
///
/// assert_eq!(format_key("(11) 98765-4321"), "+5511987654321");
/// assert_eq!(format_key("loja@example.com"), "loja@example.com");
/// ```
pub fn format_key(raw: &str) -> String {
    if is_numeric_key(raw) {
        let digits = digits_of(raw);
        if digits.len() == MOBILE_DIGITS {
            return format!("{}{}", BRAZIL_CALLING_CODE, digits);
        }
    }
    raw.to_string()
}

/// Classify a raw key the same way [`format_key`] treats it.
pub fn classify_key(raw: &str) -> PixKeyKind {
    let raw = raw.trim();

    if raw.contains('@') {
        return PixKeyKind::Email;
    }
    if uuid::Uuid::try_parse(raw).is_ok() {
        return PixKeyKind::Random;
    }

    if let Some(rest) = raw.strip_prefix(BRAZIL_CALLING_CODE) {
        if is_numeric_key(rest) && !digits_of(rest).is_empty() {
            return PixKeyKind::Phone;
        }
    }

    if is_numeric_key(raw) {
        match digits_of(raw).len() {
            MOBILE_DIGITS => return PixKeyKind::Phone,
            CNPJ_DIGITS => return PixKeyKind::Cnpj,
            _ => {}
        }
    }

    PixKeyKind::Unknown
}

fn digits_of(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn is_numeric_key(raw: &str) -> bool {
    raw.chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '(' | ')' | '-' | '.' | '/'))
}
