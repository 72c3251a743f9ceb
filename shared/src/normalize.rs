//! Keystroke normalization for Indonesian formatted amounts
//!
//! Canonical form uses `.` only as a thousands separator and `,` only as the
//! decimal separator, e.g. `12.345,67`.

const THOUSANDS_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';

/// Reformat raw field text into a canonical amount.
///
/// Runs on every keystroke, so intermediate states are kept intact: an
/// empty field stays empty and a trailing comma is preserved while the user
/// types the fraction. A trailing `.` is read as a decimal keystroke and
/// becomes `,`; any other `.` is a leftover grouping separator and is dropped.
pub fn normalize_input(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let working = match raw.strip_suffix(THOUSANDS_SEPARATOR) {
        Some(head) => format!("{head}{DECIMAL_SEPARATOR}"),
        None => raw.to_string(),
    };

    let cleaned: String = working
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == DECIMAL_SEPARATOR)
        .collect();

    let (integer_raw, fraction) = match cleaned.split_once(DECIMAL_SEPARATOR) {
        Some((integer, rest)) => {
            let digits: String = rest.chars().filter(|c| *c != DECIMAL_SEPARATOR).collect();
            (integer, Some(digits))
        }
        None => (cleaned.as_str(), None),
    };

    let formatted_integer = if integer_raw.is_empty() {
        if fraction.is_some() {
            "0".to_string()
        } else {
            String::new()
        }
    } else {
        match integer_raw.parse::<i64>() {
            Ok(value) => group_thousands(&value.to_string()),
            Err(_) => {
                tracing::debug!(digits = integer_raw.len(), "Integer part too long to group");
                integer_raw.to_string()
            }
        }
    };

    match fraction {
        Some(digits) => format!("{formatted_integer}{DECIMAL_SEPARATOR}{digits}"),
        None => formatted_integer,
    }
}

/// Parse a canonical amount into a number.
///
/// Empty or malformed text is `0.0`, as are values that do not fit in a
/// finite f64.
pub fn parse_to_number(formatted: &str) -> f64 {
    if formatted.is_empty() {
        return 0.0;
    }

    let machine: String = formatted
        .chars()
        .filter(|c| *c != THOUSANDS_SEPARATOR)
        .map(|c| if c == DECIMAL_SEPARATOR { '.' } else { c })
        .collect();

    match machine.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Insert `.` every three digits from the right of an ASCII digit string.
pub(crate) fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}
