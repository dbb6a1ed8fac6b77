//! Property-based tests for pixkit-lib
//!
//! These tests use proptest to verify invariants across a wide range of inputs.

#[cfg(test)]
mod crc_properties {
    use pixkit_lib::crc::crc16_hex;
    use proptest::prelude::*;

    proptest! {
        /// Output is always four uppercase hex digits
        #[test]
        fn crc_is_four_uppercase_hex(input in ".*") {
            let hex = crc16_hex(&input);
            prop_assert_eq!(hex.len(), 4);
            prop_assert!(hex.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
        }

        /// Recomputing over the same input yields the same digits
        #[test]
        fn crc_is_pure(input in "[ -~]{0,200}") {
            prop_assert_eq!(crc16_hex(&input), crc16_hex(&input));
        }
    }
}

#[cfg(test)]
mod field_properties {
    use pixkit_lib::normalize::normalize_text;
    use pixkit_lib::tlv::{format_field, parse_fields};
    use proptest::prelude::*;

    proptest! {
        /// Length prefix always equals the value length
        #[test]
        fn length_prefix_matches(tag in "[0-9]{2}", value in "[ -~]{0,99}") {
            let encoded = format_field(&tag, &value).unwrap();
            let prefix: usize = encoded[2..4].parse().unwrap();
            prop_assert_eq!(prefix, value.len());
            prop_assert_eq!(&encoded[4..], value.as_str());
        }

        /// Values over 99 characters are always rejected
        #[test]
        fn oversize_rejected(value in "[a-z]{100,200}") {
            prop_assert!(format_field("01", &value).is_err());
        }

        /// Parsing a concatenation of fields returns them in order
        #[test]
        fn parse_recovers_fields(values in prop::collection::vec("[ -~]{0,40}", 1..6)) {
            let encoded: String = values
                .iter()
                .enumerate()
                .map(|(i, v)| format_field(&format!("{:02}", i), v).unwrap())
                .collect();
            let fields = parse_fields(&encoded).unwrap();
            prop_assert_eq!(fields.len(), values.len());
            for (field, value) in fields.iter().zip(&values) {
                prop_assert_eq!(&field.value, value);
            }
        }

        /// Normalized text respects the bound and carries no edge whitespace
        #[test]
        fn normalize_is_bounded(text in "\\PC{0,60}", max_len in 0usize..30) {
            let normalized = normalize_text(&text, max_len);
            prop_assert!(normalized.chars().count() <= max_len);
            prop_assert_eq!(normalized.trim(), normalized.as_str());
        }
    }
}

#[cfg(test)]
mod payload_properties {
    use pixkit_lib::crc::crc16_hex;
    use pixkit_lib::{assemble, decode_payload};
    use proptest::prelude::*;

    proptest! {
        /// Every payload ends with a CRC consistent with its body
        #[test]
        fn payload_crc_consistent(
            cents in 0u64..1_000_000_000u64,
            name in "[A-Za-z][A-Za-z ]{0,40}",
            city in "[A-Za-z][A-Za-z ]{0,20}",
        ) {
            let amount = cents as f64 / 100.0;
            let payload = assemble("11987654321", &name, &city, amount).unwrap();
            let (body, crc) = payload.split_at(payload.len() - 4);
            prop_assert!(body.ends_with("6304"));
            prop_assert_eq!(crc, crc16_hex(body));
        }

        /// Identical inputs give byte-identical payloads
        #[test]
        fn payload_idempotent(cents in 0u64..100_000_000u64) {
            let amount = cents as f64 / 100.0;
            let a = assemble("vendas@example.com", "Loja", "Recife", amount).unwrap();
            let b = assemble("vendas@example.com", "Loja", "Recife", amount).unwrap();
            prop_assert_eq!(a, b);
        }

        /// The encoded amount decodes back to the same cents
        #[test]
        fn amount_survives_decoding(cents in 0u64..1_000_000_000u64) {
            let amount = cents as f64 / 100.0;
            let payload = assemble("11987654321", "Loja", "Recife", amount).unwrap();
            let decoded = decode_payload(&payload).unwrap();
            let expected = format!("{}.{:02}", cents / 100, cents % 100);
            prop_assert_eq!(decoded.amount.unwrap().to_field_value().unwrap(), expected);
        }

        /// Arbitrary Unicode names and cities still give an ASCII payload
        #[test]
        fn payload_is_ascii(name in "\\PC{0,40}", city in "\\PC{0,20}") {
            let payload = assemble(
                "vendas@example.com",
                &format!("A{}", name),
                &format!("B{}", city),
                1.0,
            )
            .unwrap();
            prop_assert!(payload.is_ascii());
            prop_assert!(decode_payload(&payload).is_ok());
        }

        /// Negative amounts never produce a payload
        #[test]
        fn negative_amount_rejected(amount in -1_000_000.0f64..-0.001f64) {
            prop_assert!(assemble("11987654321", "Loja", "Recife", amount).is_err());
        }
    }
}
