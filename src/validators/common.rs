//! Common validation utilities and helpers.

use validator::ValidationErrors;

use crate::constants::CODE_VALIDATION_FAILED;
use crate::errors::ApiError;

/// Convert validator errors to ApiError::ValidationError.
///
/// This helper function extracts error messages from ValidationErrors
/// and converts them into a format suitable for API responses.
///
/// # Example
/// ```ignore
/// query.validate().map_err(validation_errors_to_api_error)?;
/// ```
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let mut errors: Vec<String> = e
        .field_errors()
        .iter()
        .flat_map(|(_, errs)| {
            errs.iter()
                .map(|e| e.message.clone().unwrap_or_default().to_string())
        })
        .collect();
    errors.sort();
    ApiError::ValidationError {
        code: CODE_VALIDATION_FAILED.to_string(),
        errors,
    }
}

/// Lenient integer coercion for form values.
///
/// Skips leading whitespace, accepts an optional sign followed by digits and
/// ignores whatever comes after them. Input without leading digits yields 0;
/// values outside `i64` saturate.
///
/// # Examples
/// ```ignore
/// assert_eq!(coerce_int(" 12abc"), 12);
/// assert_eq!(coerce_int("abc"), 0);
/// ```
pub fn coerce_int(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(digit - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_int_plain() {
        assert_eq!(coerce_int("0"), 0);
        assert_eq!(coerce_int("7"), 7);
        assert_eq!(coerce_int("015"), 15);
    }

    #[test]
    fn test_coerce_int_signs_and_whitespace() {
        assert_eq!(coerce_int("  42"), 42);
        assert_eq!(coerce_int("\t+3"), 3);
        assert_eq!(coerce_int("-3"), -3);
        assert_eq!(coerce_int("- 3"), 0);
    }

    #[test]
    fn test_coerce_int_trailing_garbage() {
        assert_eq!(coerce_int("12abc"), 12);
        assert_eq!(coerce_int("2.9"), 2);
        assert_eq!(coerce_int("20 "), 20);
    }

    #[test]
    fn test_coerce_int_non_numeric() {
        assert_eq!(coerce_int(""), 0);
        assert_eq!(coerce_int("abc"), 0);
        assert_eq!(coerce_int("-"), 0);
    }

    #[test]
    fn test_coerce_int_saturates() {
        assert_eq!(coerce_int("99999999999999999999999"), i64::MAX);
        assert_eq!(coerce_int("-99999999999999999999999"), i64::MIN);
    }
}
