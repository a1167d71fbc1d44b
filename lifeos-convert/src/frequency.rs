//! Habit frequency decoding
//!
//! Frequencies are exported either as a label (`Daily`, `Always`) or as
//! pipe-separated day-of-week codes such as `1|3|5`.

use thiserror::Error;

/// Every day of the week, Sunday (0) through Saturday (6)
pub const FULL_WEEK: [i64; 7] = [0, 1, 2, 3, 4, 5, 6];

/// A pipe-separated token that is not an integer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid day code {0:?}")]
pub struct InvalidDayCode(pub String);

/// Decode a frequency label into day-of-week codes
///
/// Day codes keep their order and duplicates and are not range-checked.
/// Labels other than pipe lists fall back to the full week.
pub fn decode_frequency(label: &str) -> Result<Vec<i64>, InvalidDayCode> {
    if label.is_empty() || label == "Daily" || label == "Always" {
        return Ok(FULL_WEEK.to_vec());
    }

    if label.contains('|') {
        return label
            .split('|')
            .map(|token| {
                let token = token.trim();
                token
                    .parse::<i64>()
                    .map_err(|_| InvalidDayCode(token.to_string()))
            })
            .collect();
    }

    Ok(FULL_WEEK.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_mean_full_week() {
        for label in ["", "Daily", "Always"] {
            assert_eq!(decode_frequency(label).unwrap(), FULL_WEEK.to_vec());
        }
    }

    #[test]
    fn test_pipe_list() {
        assert_eq!(decode_frequency("1|3|5").unwrap(), vec![1, 3, 5]);
    }

    #[test]
    fn test_pipe_list_keeps_order_duplicates_and_range() {
        assert_eq!(decode_frequency("6|0|6|9").unwrap(), vec![6, 0, 6, 9]);
        assert_eq!(decode_frequency("-1| 2 ").unwrap(), vec![-1, 2]);
    }

    #[test]
    fn test_unknown_label_falls_back() {
        assert_eq!(decode_frequency("garbage").unwrap(), FULL_WEEK.to_vec());
        assert_eq!(decode_frequency("daily").unwrap(), FULL_WEEK.to_vec());
        assert_eq!(decode_frequency("3").unwrap(), FULL_WEEK.to_vec());
    }

    #[test]
    fn test_bad_token_is_error() {
        assert_eq!(
            decode_frequency("1|x|3"),
            Err(InvalidDayCode("x".to_string()))
        );
        assert_eq!(decode_frequency("1||3"), Err(InvalidDayCode(String::new())));
    }
}
