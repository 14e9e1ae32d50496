//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Limits mirror the column sizes of the guest and admin forms;
//! SQLite TEXT has no built-in length enforcement.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::utils::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Room numbers ("101", "A12")
pub const MAX_ROOM_NUMBER_LEN: usize = 10;

/// Guest surnames and category names
pub const MAX_SURNAME_LEN: usize = 50;
pub const MAX_CATEGORY_NAME_LEN: usize = 50;

/// Category icon identifiers ("local_bar")
pub const MAX_ICON_LEN: usize = 30;

/// Product names
pub const MAX_PRODUCT_NAME_LEN: usize = 100;

/// Descriptions, image references, order notes
pub const MAX_DESCRIPTION_LEN: usize = 255;
pub const MAX_IMAGE_LEN: usize = 255;
pub const MAX_NOTE_LEN: usize = 255;

// ── Text helpers ────────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} no puede estar vacío")));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} es demasiado largo ({len} caracteres, máximo {max_len})"
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value {
        let len = v.chars().count();
        if len > max_len {
            return Err(AppError::validation(format!(
                "{field} es demasiado largo ({len} caracteres, máximo {max_len})"
            )));
        }
    }
    Ok(())
}

// ── Domain helpers ──────────────────────────────────────────────────

/// Order quantities are strictly positive.
pub fn validate_quantity(quantity: i64) -> Result<(), AppError> {
    if quantity <= 0 {
        return Err(AppError::validation("cantidad debe ser mayor que cero"));
    }
    Ok(())
}

/// Prices are finite and strictly positive.
pub fn validate_price(price: f64) -> Result<(), AppError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(AppError::new(ErrorCode::ProductInvalidPrice));
    }
    Ok(())
}

/// Room numbers: 1-10 ASCII alphanumeric characters.
pub fn validate_room_number(number: &str) -> Result<(), AppError> {
    let valid = !number.is_empty()
        && number.len() <= MAX_ROOM_NUMBER_LEN
        && number.chars().all(|c| c.is_ascii_alphanumeric());
    if !valid {
        return Err(AppError::new(ErrorCode::RoomNumberInvalid));
    }
    Ok(())
}

/// Phone numbers, if present: E.164 (`+` optional, leading digit 1-9, at most 15 digits).
pub fn validate_phone(phone: &Option<String>) -> Result<(), AppError> {
    let Some(phone) = phone else {
        return Ok(());
    };
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    let valid = (2..=15).contains(&digits.len())
        && digits.chars().all(|c| c.is_ascii_digit())
        && !digits.starts_with('0');
    if !valid {
        return Err(AppError::new(ErrorCode::PhoneInvalid));
    }
    Ok(())
}

// ── Date range ──────────────────────────────────────────────────────

/// Which end of a range a bare date stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RangeBound {
    Start,
    End,
}

fn parse_bound(raw: &str, bound: RangeBound) -> Result<DateTime<Utc>, AppError> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let time = match bound {
            RangeBound::Start => NaiveTime::MIN,
            RangeBound::End => NaiveTime::from_hms_milli_opt(23, 59, 59, 999)
                .unwrap_or(NaiveTime::MIN),
        };
        return Ok(date.and_time(time).and_utc());
    }
    Err(AppError::with_message(
        ErrorCode::InvalidDateRange,
        "Formato de fecha inválido. Use ISO format (YYYY-MM-DD)",
    ))
}

/// Parse an optional `[start, end]` range from query/body strings.
///
/// Accepts RFC 3339, naive ISO datetimes (taken as UTC) and bare dates; a
/// bare end date covers that whole day. Malformed input or `start > end`
/// is a validation failure.
pub fn parse_date_range(
    start: Option<&str>,
    end: Option<&str>,
) -> Result<(Option<DateTime<Utc>>, Option<DateTime<Utc>>), AppError> {
    let start = start
        .filter(|s| !s.trim().is_empty())
        .map(|s| parse_bound(s, RangeBound::Start))
        .transpose()?;
    let end = end
        .filter(|s| !s.trim().is_empty())
        .map(|s| parse_bound(s, RangeBound::End))
        .transpose()?;

    check_range(start, end)?;
    Ok((start, end))
}

/// Reject an inverted range when both ends are present.
pub fn check_range(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<(), AppError> {
    if let (Some(s), Some(e)) = (start, end)
        && s > e
    {
        return Err(AppError::with_message(
            ErrorCode::InvalidDateRange,
            "Fecha de inicio no puede ser mayor a fecha final",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Bebidas", "nombre", MAX_CATEGORY_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "nombre", MAX_CATEGORY_NAME_LEN).is_err());
        let long = "x".repeat(MAX_CATEGORY_NAME_LEN + 1);
        assert!(validate_required_text(&long, "nombre", MAX_CATEGORY_NAME_LEN).is_err());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 50 accented chars are 100 bytes
        let accented = "á".repeat(MAX_SURNAME_LEN);
        assert!(validate_required_text(&accented, "apellido", MAX_SURNAME_LEN).is_ok());
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "notas", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(&Some("sin hielo".into()), "notas", MAX_NOTE_LEN).is_ok());
        let long = Some("n".repeat(MAX_NOTE_LEN + 1));
        let err = validate_optional_text(&long, "notas", MAX_NOTE_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_quantity_and_price() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());

        assert!(validate_price(2.5).is_ok());
        assert!(validate_price(0.0).is_err());
        assert!(validate_price(-1.0).is_err());
        assert_eq!(
            validate_price(f64::NAN).unwrap_err().code,
            ErrorCode::ProductInvalidPrice
        );
    }

    #[test]
    fn test_room_number() {
        assert!(validate_room_number("101").is_ok());
        assert!(validate_room_number("A12").is_ok());
        assert!(validate_room_number("").is_err());
        assert!(validate_room_number("10-1").is_err());
        assert!(validate_room_number("12345678901").is_err());
    }

    #[test]
    fn test_phone() {
        assert!(validate_phone(&None).is_ok());
        assert!(validate_phone(&Some("+5491122334455".into())).is_ok());
        assert!(validate_phone(&Some("34600111222".into())).is_ok());
        assert!(validate_phone(&Some("+0123".into())).is_err());
        assert!(validate_phone(&Some("600-111-222".into())).is_err());
    }

    #[test]
    fn test_date_range_formats() {
        let (start, end) = parse_date_range(Some("2026-10-01"), Some("2026-10-01")).unwrap();
        assert_eq!(
            start.unwrap(),
            Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap()
        );
        assert!(end.unwrap() > Utc.with_ymd_and_hms(2026, 10, 1, 23, 59, 0).unwrap());

        let (start, _) = parse_date_range(Some("2026-10-01T08:30:00Z"), None).unwrap();
        assert_eq!(
            start.unwrap(),
            Utc.with_ymd_and_hms(2026, 10, 1, 8, 30, 0).unwrap()
        );

        let (start, end) = parse_date_range(None, Some("")).unwrap();
        assert!(start.is_none() && end.is_none());
    }

    #[test]
    fn test_date_range_rejects_bad_input() {
        let err = parse_date_range(Some("01/10/2026"), None).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDateRange);

        let err = parse_date_range(Some("2026-10-05"), Some("2026-10-01")).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDateRange);
        assert_eq!(err.message, "Fecha de inicio no puede ser mayor a fecha final");
    }
}
