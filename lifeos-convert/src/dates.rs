//! Export date conversion
//!
//! The export writes dates as `DD-MM-YYYY`; the import schema expects
//! `YYYY-MM-DD`. Conversion only reorders the hyphen-separated groups and
//! performs no calendar validation.

/// Minimum length of a convertible date string, in characters
const MIN_DATE_LEN: usize = 8;

/// Convert `DD-MM-YYYY` to `YYYY-MM-DD`
///
/// Returns `None` for empty input, input shorter than 8 characters, or input
/// that does not split into exactly three groups on `-`.
///
/// ```
/// use lifeos_convert::dates::convert_date;
///
/// assert_eq!(convert_date("15-03-2024").as_deref(), Some("2024-03-15"));
/// assert_eq!(convert_date("31-02-2024").as_deref(), Some("2024-02-31"));
/// assert_eq!(convert_date("2024"), None);
/// ```
pub fn convert_date(value: &str) -> Option<String> {
    if value.chars().count() < MIN_DATE_LEN {
        return None;
    }

    let parts: Vec<&str> = value.split('-').collect();
    match parts.as_slice() {
        [day, month, year] => Some(format!("{}-{}-{}", year, month, day)),
        _ => None,
    }
}
