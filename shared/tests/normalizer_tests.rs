//! Input normalizer tests for the ubinan calculator
//!
//! Properties of the keystroke normalizer and the amount parser

use proptest::prelude::*;
use shared::{format_number_for_display, normalize_input, parse_to_number};

// ============================================================================
// Property 1: Single Decimal Separator
// ============================================================================
// For any raw field text S, normalize_input(S) SHALL contain at most one ','.

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn property_1_at_most_one_comma(raw in "\\PC{0,40}") {
        let normalized = normalize_input(&raw);
        let commas = normalized.matches(',').count();
        prop_assert!(commas <= 1, "{:?} -> {:?} has {} commas", raw, normalized, commas);
    }

    /// Same property, biased towards the separator characters
    #[test]
    fn property_1_at_most_one_comma_keystrokes(raw in "[0-9.,]{0,30}") {
        prop_assert!(normalize_input(&raw).matches(',').count() <= 1);
    }

    /// Only digits and separators survive normalization
    #[test]
    fn property_1_canonical_alphabet(raw in "\\PC{0,40}") {
        let normalized = normalize_input(&raw);
        prop_assert!(
            normalized.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ','),
            "Unexpected character in {:?}",
            normalized
        );
        prop_assert!(!normalized.ends_with('.'));
    }
}

// ============================================================================
// Property 2: Digit-free Input Parses to Zero
// ============================================================================
// For any text S without ASCII digits, parse_to_number(normalize_input(S))
// SHALL equal 0.0.

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn property_2_no_digits_is_zero(raw in "[^0-9]{0,30}") {
        let value = parse_to_number(&normalize_input(&raw));
        prop_assert_eq!(value, 0.0);
    }

    /// Parsing never fails and never yields a non-finite number
    #[test]
    fn property_2_parse_is_total(raw in "\\PC{0,40}") {
        prop_assert!(parse_to_number(&raw).is_finite());
        prop_assert!(parse_to_number(&normalize_input(&raw)).is_finite());
    }
}

// ============================================================================
// Property 3: Idempotence
// ============================================================================
// Normalizing an already normalized string SHALL reproduce it.

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn property_3_idempotent(raw in "\\PC{0,40}") {
        let once = normalize_input(&raw);
        let twice = normalize_input(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn property_3_idempotent_keystrokes(raw in "[0-9.,]{0,30}") {
        let once = normalize_input(&raw);
        prop_assert_eq!(normalize_input(&once), once.clone());
    }

    /// Display strings are already canonical
    #[test]
    fn property_3_display_is_canonical(cents in 0u64..100_000_000_000_000_000) {
        let rendered = format_number_for_display(cents as f64 / 100.0, 2);
        prop_assert_eq!(normalize_input(&rendered), rendered.clone());
    }
}

// ============================================================================
// Property 4: Parse is a Left Inverse of Formatting
// ============================================================================
// For any non-negative V with at most 2 decimals and 15 integer digits,
// parse_to_number(format_number_for_display(V, 2)) SHALL equal V within
// floating point tolerance.

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn property_4_format_parse_round_trip(cents in 0u64..100_000_000_000_000_000) {
        let value = cents as f64 / 100.0;
        let parsed = parse_to_number(&format_number_for_display(value, 2));
        let tolerance = 1e-9 * value.max(1.0);
        prop_assert!(
            (parsed - value).abs() <= tolerance,
            "{} parsed back as {}",
            value,
            parsed
        );
    }
}

// ============================================================================
// Keystroke Scenarios
// ============================================================================

/// Feed characters one at a time, normalizing after each, like the form does
fn type_keys(keys: &str) -> String {
    keys.chars().fold(String::new(), |field, key| {
        let mut raw = field;
        raw.push(key);
        normalize_input(&raw)
    })
}

#[test]
fn test_typing_thousands_then_period() {
    assert_eq!(type_keys("12345."), "12.345,");
    assert_eq!(normalize_input("12345."), "12.345,");
}

#[test]
fn test_typing_full_amount() {
    assert_eq!(type_keys("1000.50"), "1.000,50");
    assert_eq!(type_keys("1000,50"), "1.000,50");
    assert_eq!(parse_to_number(&type_keys("1000.50")), 1000.5);
}

#[test]
fn test_typing_second_period_is_ignored() {
    // "1,5" + "." becomes "1,5," and the extra comma is dropped
    assert_eq!(type_keys("1.5."), "1,5");
}

#[test]
fn test_typing_leading_separator() {
    assert_eq!(type_keys("."), "0,");
    assert_eq!(type_keys(".5"), "0,5");
}

#[test]
fn test_deleting_back_to_empty() {
    let mut field = type_keys("1234");
    assert_eq!(field, "1.234");
    while !field.is_empty() {
        field.pop();
        field = normalize_input(&field);
    }
    assert_eq!(field, "");
}

#[test]
fn test_deleting_regroups() {
    // backspace on "1.234" leaves "1.23"
    assert_eq!(normalize_input("1.23"), "123");
}
