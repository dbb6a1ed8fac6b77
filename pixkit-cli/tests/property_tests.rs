//! Property-based tests for pixkit-cli
//!
//! Uses proptest to verify amount parsing holds for arbitrary inputs

use pixkit_cli::commands::generate::parse_amount;
use proptest::prelude::*;

proptest! {
    /// Comma and dot separators yield the same amount
    #[test]
    fn test_comma_and_dot_agree(units in 0u32..1_000_000, cents in 0u32..100) {
        let dotted = parse_amount(&format!("{}.{:02}", units, cents)).unwrap();
        let comma = parse_amount(&format!("{},{:02}", units, cents)).unwrap();
        prop_assert_eq!(dotted, comma);
        prop_assert_eq!(dotted.to_string(), format!("{}.{:02}", units, cents));
    }

    /// Thousands separators are ignored in comma notation
    #[test]
    fn test_thousands_separator(thousands in 1u32..1000, rest in 0u32..1000, cents in 0u32..100) {
        let raw = format!("{}.{:03},{:02}", thousands, rest, cents);
        let parsed = parse_amount(&raw).unwrap();
        prop_assert_eq!(parsed.to_string(), format!("{}{:03}.{:02}", thousands, rest, cents));
    }

    /// US grouping gives the same amount as Brazilian grouping
    #[test]
    fn test_us_and_brazilian_grouping_agree(thousands in 1u32..1000, rest in 0u32..1000, cents in 0u32..100) {
        let brazilian = parse_amount(&format!("{}.{:03},{:02}", thousands, rest, cents)).unwrap();
        let us = parse_amount(&format!("{},{:03}.{:02}", thousands, rest, cents)).unwrap();
        prop_assert_eq!(brazilian, us);
        prop_assert_eq!(us.to_string(), format!("{}{:03}.{:02}", thousands, rest, cents));
    }

    /// Text that is not a number never parses
    #[test]
    fn test_letters_rejected(text in "[a-zA-Z]{1,10}") {
        prop_assert!(parse_amount(&text).is_err());
    }
}
