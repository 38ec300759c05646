//! Common validation utilities.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

/// Minimum number of digits a mobile number must contain.
const MIN_MOBILE_DIGITS: usize = 10;

lazy_static! {
    /// 24-hour wall-clock time, `HH:MM`.
    static ref TIME_FORMAT: Regex =
        Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").expect("invalid time regex");

    /// Characters permitted in a mobile number besides digits.
    static ref MOBILE_FORMAT: Regex =
        Regex::new(r"^[0-9()+.\- ]+$").expect("invalid mobile regex");
}

/// Strips every non-digit character from a phone number.
///
/// Applied to both stored values and search terms so that
/// `"(555) 123-4567"` and `"555-123-4567"` compare equal.
pub fn normalize_mobile_number(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validates that a mobile number is digits plus common formatting
/// characters and carries at least ten digits.
pub fn validate_mobile_number(value: &str) -> Result<(), ValidationError> {
    if !MOBILE_FORMAT.is_match(value) {
        let mut err = ValidationError::new("mobile_number_format");
        err.message = Some("mobile_number may contain only digits and ()+-. formatting".into());
        return Err(err);
    }
    if normalize_mobile_number(value).len() < MIN_MOBILE_DIGITS {
        let mut err = ValidationError::new("mobile_number_length");
        err.message = Some("mobile_number must contain at least 10 digits".into());
        return Err(err);
    }
    Ok(())
}

/// Validates that a string parses as a `YYYY-MM-DD` calendar date.
pub fn validate_reservation_date(value: &str) -> Result<(), ValidationError> {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(_) => Ok(()),
        Err(_) => {
            let mut err = ValidationError::new("reservation_date_format");
            err.message = Some("reservation_date must be a valid YYYY-MM-DD date".into());
            Err(err)
        }
    }
}

/// Validates that a string is a 24-hour `HH:MM` time.
pub fn validate_reservation_time(value: &str) -> Result<(), ValidationError> {
    if TIME_FORMAT.is_match(value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("reservation_time_format");
        err.message = Some("reservation_time must be a valid HH:MM time".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_mobile_number_strips_formatting() {
        assert_eq!(normalize_mobile_number("(555) 123-4567"), "5551234567");
        assert_eq!(normalize_mobile_number("555-123-4567"), "5551234567");
        assert_eq!(normalize_mobile_number("+1 555.123.4567"), "15551234567");
        assert_eq!(normalize_mobile_number("123"), "123");
    }

    #[test]
    fn test_normalize_mobile_number_empty() {
        assert_eq!(normalize_mobile_number(""), "");
        assert_eq!(normalize_mobile_number("()- ."), "");
    }

    #[test]
    fn test_validate_mobile_number_accepts_formatted() {
        assert!(validate_mobile_number("555-123-4567").is_ok());
        assert!(validate_mobile_number("(555) 123-4567").is_ok());
        assert!(validate_mobile_number("+1 555 123 4567").is_ok());
    }

    #[test]
    fn test_validate_mobile_number_rejects_letters() {
        let err = validate_mobile_number("555-CALL-NOW").unwrap_err();
        assert_eq!(err.code, "mobile_number_format");
    }

    #[test]
    fn test_validate_mobile_number_rejects_short() {
        let err = validate_mobile_number("555-1234").unwrap_err();
        assert_eq!(err.code, "mobile_number_length");
    }

    #[test]
    fn test_validate_reservation_date() {
        assert!(validate_reservation_date("2031-04-09").is_ok());
        assert!(validate_reservation_date("2031-02-29").is_err());
        assert!(validate_reservation_date("not-a-date").is_err());
        assert!(validate_reservation_date("2031/04/09").is_err());
        assert!(validate_reservation_date("").is_err());
    }

    #[test]
    fn test_validate_reservation_time() {
        assert!(validate_reservation_time("10:30").is_ok());
        assert!(validate_reservation_time("00:00").is_ok());
        assert!(validate_reservation_time("23:59").is_ok());
    }

    #[test]
    fn test_validate_reservation_time_rejects_bad_shapes() {
        assert!(validate_reservation_time("24:00").is_err());
        assert!(validate_reservation_time("9:30").is_err());
        assert!(validate_reservation_time("10:60").is_err());
        assert!(validate_reservation_time("10:30:00").is_err());
        assert!(validate_reservation_time("noon").is_err());
        assert!(validate_reservation_time("").is_err());
    }
}
