//! Tag-Length-Value fields of the BR Code format.
//!
//! Every field is a two digit tag, a two digit length and the value itself.
//! Templates (tags 26 and 62) carry nested TLV strings as their value.

use crate::{PixkitError, Result};

/// Largest value the two digit length prefix can describe.
pub const MAX_FIELD_LEN: usize = 99;

/// A single decoded TLV field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TlvField {
    /// Two digit tag ID.
    pub tag: String,
    /// Raw field value.
    pub value: String,
}

impl TlvField {
    /// Re-encode the field as `tag + length + value`.
    pub fn encode(&self) -> Result<String> {
        format_field(&self.tag, &self.value)
    }
}

/// Format a value as `tag + length + value`.
///
/// The length is the number of characters in `value`, zero padded to two
/// digits.
///
/// # Errors
///
/// - [`PixkitError::InvalidData`] if `tag` is not exactly two ASCII digits.
/// - [`PixkitError::OversizeField`] if `value` is longer than 99 characters.
///   Oversize values are rejected rather than clamped, since a clamped key
///   would route the payment somewhere else.
///
/// # Example
///
/// ```
/// use pixkit_lib::tlv::format_field;
///
/// assert_eq!(format_field("58", "BR").unwrap(), "5802BR");
/// ```
pub fn format_field(tag: &str, value: &str) -> Result<String> {
    if !is_valid_tag(tag) {
        return Err(PixkitError::invalid_data(
            "tag",
            format!("'{}' is not a two digit tag", tag),
        ));
    }

    let len = value.chars().count();
    if len > MAX_FIELD_LEN {
        return Err(PixkitError::oversize(
            format!("field {}", tag),
            len,
            MAX_FIELD_LEN,
        ));
    }

    Ok(format!("{}{:02}{}", tag, len, value))
}

/// Split a TLV string into its fields, in order.
///
/// Only the top level is parsed; call again on a template's value to read its
/// nested fields.
///
/// # Errors
///
/// Returns [`PixkitError::InvalidPayload`] for a truncated header, a
/// non-numeric tag or length, or a length running past the end of the input.
pub fn parse_fields(input: &str) -> Result<Vec<TlvField>> {
    let mut fields = Vec::new();
    let mut rest = input;

    while !rest.is_empty() {
        let header = rest.get(..4).ok_or_else(|| {
            PixkitError::InvalidPayload(format!("truncated field header '{}'", rest))
        })?;
        let (tag, len_str) = header.split_at(2);

        if !is_valid_tag(tag) {
            return Err(PixkitError::InvalidPayload(format!(
                "invalid tag '{}'",
                tag
            )));
        }
        if !len_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PixkitError::InvalidPayload(format!(
                "invalid length '{}' for tag {}",
                len_str, tag
            )));
        }
        let len: usize = len_str
            .parse()
            .map_err(|_| PixkitError::InvalidPayload(format!("invalid length for tag {}", tag)))?;

        let body = &rest[4..];
        let end = match body.char_indices().nth(len) {
            Some((idx, _)) => idx,
            None if body.chars().count() == len => body.len(),
            None => {
                return Err(PixkitError::InvalidPayload(format!(
                    "tag {} declares {} characters but only {} remain",
                    tag,
                    len,
                    body.chars().count()
                )))
            }
        };

        fields.push(TlvField {
            tag: tag.to_string(),
            value: body[..end].to_string(),
        });
        rest = &body[end..];
    }

    Ok(fields)
}

/// Find the first field with the given tag.
pub fn find_field<'a>(fields: &'a [TlvField], tag: &str) -> Option<&'a TlvField> {
    fields.iter().find(|field| field.tag == tag)
}

fn is_valid_tag(tag: &str) -> bool {
    tag.len() == 2 && tag.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_pads_length() {
        assert_eq!(format_field("00", "01").unwrap(), "000201");
        assert_eq!(format_field("53", "986").unwrap(), "5303986");
        assert_eq!(format_field("59", "Joao Silva").unwrap(), "5910Joao Silva");
    }

    #[test]
    fn test_format_field_empty_value() {
        assert_eq!(format_field("05", "").unwrap(), "0500");
    }

    #[test]
    fn test_format_field_length_boundary() {
        let max = "a".repeat(99);
        let encoded = format_field("01", &max).unwrap();
        assert!(encoded.starts_with("0199"));
        assert_eq!(encoded.len(), 103);

        let over = "a".repeat(100);
        let err = format_field("01", &over).unwrap_err();
        assert_eq!(
            err,
            PixkitError::OversizeField {
                field: "field 01".to_string(),
                len: 100,
                max: 99,
            }
        );
    }

    #[test]
    fn test_format_field_counts_characters() {
        assert_eq!(format_field("59", "São").unwrap(), "5903São");
    }

    #[test]
    fn test_format_field_rejects_bad_tag() {
        assert!(format_field("5", "x").is_err());
        assert!(format_field("5A", "x").is_err());
        assert!(format_field("590", "x").is_err());
    }

    #[test]
    fn test_parse_fields() {
        let fields = parse_fields("0002015802BR5303986").unwrap();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].tag, "00");
        assert_eq!(fields[0].value, "01");
        assert_eq!(fields[1].value, "BR");
        assert_eq!(fields[2].value, "986");
    }

    #[test]
    fn test_parse_nested_template() {
        let fields = parse_fields("62070503***").unwrap();
        assert_eq!(fields.len(), 1);
        let nested = parse_fields(&fields[0].value).unwrap();
        assert_eq!(nested[0].tag, "05");
        assert_eq!(nested[0].value, "***");
    }

    #[test]
    fn test_parse_fields_errors() {
        assert!(parse_fields("000").is_err());
        assert!(parse_fields("00AB01").is_err());
        assert!(parse_fields("XX0201").is_err());
        assert!(parse_fields("000501").is_err());
    }

    #[test]
    fn test_parse_fields_empty_input() {
        assert!(parse_fields("").unwrap().is_empty());
    }

    #[test]
    fn test_find_field() {
        let fields = parse_fields("0002015802BR").unwrap();
        assert_eq!(find_field(&fields, "58").unwrap().value, "BR");
        assert!(find_field(&fields, "59").is_none());
    }

    #[test]
    fn test_field_encode_matches_input() {
        let input = "5802BR";
        let fields = parse_fields(input).unwrap();
        assert_eq!(fields[0].encode().unwrap(), input);
    }
}
