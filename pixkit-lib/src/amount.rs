//! Transaction amount (tag 54).
//!
//! Amounts are held as `Decimal` and only rendered to text at the edge, with
//! exactly two fraction digits and `.` as separator.

use crate::{PixkitError, Result};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Longest rendered amount accepted in tag 54.
pub const MAX_AMOUNT_LEN: usize = 13;

/// Non-negative amount in BRL.
///
/// # Examples
///
/// ```rust
/// use pixkit_lib::Amount;
///
/// let amt = Amount::from_f64(150.5).unwrap();
/// assert_eq!(amt.to_field_value().unwrap(), "150.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount {
    value: Decimal,
}

impl Amount {
    /// Create from a floating point value.
    ///
    /// The float is converted to the shortest decimal that round-trips, so
    /// `1.005` becomes exactly `1.005` and renders as `"1.01"`. Generators that
    /// round the binary value directly (JavaScript `toFixed(2)`) produce
    /// `"1.00"` for the same input, and so a different payload and CRC.
    ///
    /// # Errors
    ///
    /// Returns [`PixkitError::InvalidAmount`] for NaN, infinite or negative
    /// values.
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(PixkitError::InvalidAmount(format!(
                "{} is not a finite number",
                value
            )));
        }
        let decimal = Decimal::from_f64(value).ok_or_else(|| {
            PixkitError::InvalidAmount(format!("{} is out of range", value))
        })?;
        Self::from_decimal(decimal)
    }

    /// Create from decimal text such as `"123.45"`.
    ///
    /// # Errors
    ///
    /// Returns [`PixkitError::InvalidAmount`] if the text is not a decimal
    /// number or is negative.
    pub fn from_str_checked(s: &str) -> Result<Self> {
        let decimal = Decimal::from_str(s.trim())
            .map_err(|e| PixkitError::InvalidAmount(format!("'{}': {}", s, e)))?;
        Self::from_decimal(decimal)
    }

    /// Create from a `Decimal`.
    ///
    /// # Errors
    ///
    /// Returns [`PixkitError::InvalidAmount`] for negative values.
    pub fn from_decimal(value: Decimal) -> Result<Self> {
        if value.is_zero() {
            // Drops the sign of -0.
            return Ok(Self::zero());
        }
        if value.is_sign_negative() {
            return Err(PixkitError::InvalidAmount(format!(
                "{} is negative",
                value
            )));
        }
        Ok(Self { value })
    }

    /// Zero amount.
    pub fn zero() -> Self {
        Self {
            value: Decimal::ZERO,
        }
    }

    /// Check if amount is zero.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Underlying decimal value.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Value rounded half away from zero to two fraction digits.
    pub fn rounded(&self) -> Decimal {
        let mut rounded = self
            .value
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        rounded
    }

    /// Render the tag 54 value, e.g. `"150.50"`.
    ///
    /// # Errors
    ///
    /// Returns [`PixkitError::OversizeField`] when the rendered amount is
    /// longer than [`MAX_AMOUNT_LEN`] characters.
    pub fn to_field_value(&self) -> Result<String> {
        let rendered = self.rounded().to_string();
        if rendered.len() > MAX_AMOUNT_LEN {
            return Err(PixkitError::oversize(
                "amount",
                rendered.len(),
                MAX_AMOUNT_LEN,
            ));
        }
        Ok(rendered)
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rounded())
    }
}

impl FromStr for Amount {
    type Err = PixkitError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_checked(s)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = PixkitError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::from_decimal(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_two_fraction_digits() {
        assert_eq!(
            Amount::from_f64(150.5).unwrap().to_field_value().unwrap(),
            "150.50"
        );
        assert_eq!(
            Amount::from_f64(10.0).unwrap().to_field_value().unwrap(),
            "10.00"
        );
        assert_eq!(
            Amount::from_str_checked("123.45")
                .unwrap()
                .to_field_value()
                .unwrap(),
            "123.45"
        );
    }

    #[test]
    fn test_zero() {
        assert_eq!(
            Amount::from_f64(0.0).unwrap().to_field_value().unwrap(),
            "0.00"
        );
        assert_eq!(
            Amount::from_f64(-0.0).unwrap().to_field_value().unwrap(),
            "0.00"
        );
        assert!(Amount::zero().is_zero());
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        let amt = Amount::from_decimal(dec!(1.005)).unwrap();
        assert_eq!(amt.to_field_value().unwrap(), "1.01");

        let amt = Amount::from_decimal(dec!(1.004)).unwrap();
        assert_eq!(amt.to_field_value().unwrap(), "1.00");

        // The float 1.005 sits just below 1.005 in binary but converts to 1.005.
        let amt = Amount::from_f64(1.005).unwrap();
        assert_eq!(amt.to_field_value().unwrap(), "1.01");
    }

    #[test]
    fn test_rejects_invalid() {
        assert!(matches!(
            Amount::from_f64(-1.0),
            Err(PixkitError::InvalidAmount(_))
        ));
        assert!(matches!(
            Amount::from_f64(f64::NAN),
            Err(PixkitError::InvalidAmount(_))
        ));
        assert!(matches!(
            Amount::from_f64(f64::INFINITY),
            Err(PixkitError::InvalidAmount(_))
        ));
        assert!(matches!(
            Amount::from_str_checked("abc"),
            Err(PixkitError::InvalidAmount(_))
        ));
        assert!(matches!(
            Amount::from_str_checked("-5.00"),
            Err(PixkitError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_oversize_amount() {
        // 11 integer digits + ".00" = 14 characters.
        let amt = Amount::from_decimal(dec!(12345678901)).unwrap();
        assert!(matches!(
            amt.to_field_value(),
            Err(PixkitError::OversizeField { .. })
        ));

        let amt = Amount::from_decimal(dec!(1234567890)).unwrap();
        assert_eq!(amt.to_field_value().unwrap(), "1234567890.00");
    }

    #[test]
    fn test_serde_round_trip_keeps_validation() {
        let amt = Amount::from_str_checked("42.10").unwrap();
        let json = serde_json::to_string(&amt).unwrap();
        let back: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amt);

        let negative: std::result::Result<Amount, _> = serde_json::from_str("\"-1\"");
        assert!(negative.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::from_f64(7.5).unwrap().to_string(), "7.50");
    }
}
