//! Property-based tests for the rule engine.
//!
//! These tests use proptest to verify invariants around:
//! - Total behaviour on arbitrary input
//! - Case and space insensitivity
//! - Format round-trips and error agreement with validation

use proptest::prelude::*;
use uk_postcode::{check, format, normalize, validate};

/// Strategy for strings shaped like postcodes, valid or not
fn arb_postcode_shape() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z]{1,2}[0-9][A-Za-z0-9]? ?[0-9][A-Za-z]{2}").unwrap()
}

/// Strategy for upper-case canonical "OUTWARD INWARD" strings, biased
/// towards letters the position rules allow
fn arb_canonical_shape() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-PR-UWYZ][A-HK-Y]?[0-9][0-9ABEHMNPRVWXY]? [0-9][ABD-HJLNP-UW-Z]{2}")
        .unwrap()
}

proptest! {
    #[test]
    fn validate_never_panics(input in ".*") {
        let _ = validate(&input);
    }

    #[test]
    fn validate_never_panics_on_short_input(input in ".{0,4}") {
        let _ = validate(&input);
        let _ = format(&input);
    }

    #[test]
    fn validate_ignores_normalization(input in arb_postcode_shape()) {
        prop_assert_eq!(validate(&input), validate(&normalize(&input)));
    }

    #[test]
    fn validate_ignores_normalization_on_any_input(input in ".*") {
        prop_assert_eq!(validate(&input), validate(&normalize(&input)));
    }

    #[test]
    fn check_agrees_with_validate(input in arb_postcode_shape()) {
        prop_assert_eq!(check(&input).is_ok(), validate(&input));
    }

    #[test]
    fn format_round_trips_canonical(postcode in arb_canonical_shape()) {
        prop_assume!(validate(&postcode));
        let formatted = format(&postcode.replace(' ', "")).unwrap();
        prop_assert_eq!(formatted, postcode);
    }

    #[test]
    fn format_errors_iff_invalid(input in arb_postcode_shape()) {
        let valid = validate(&input.replace(' ', ""));
        match format(&input) {
            Ok(_) => prop_assert!(valid),
            Err(err) => {
                prop_assert!(!valid);
                prop_assert_eq!(err.to_string(), "You need to pass a valid postcode");
            }
        }
    }
}
