use chrono::NaiveDate;

use crate::error::{RapportError, RapportResult};
use crate::model::{ContactId, ContactMethod};

pub const MIN_STRENGTH: u8 = 1;
pub const MAX_STRENGTH: u8 = 10;

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> RapportResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(RapportError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Trims an optional string, returning None if blank.
pub fn trim_optional(value: Option<&str>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Checks a relationship strength value against the 1-10 scale.
pub fn strength_in_range(value: i64) -> RapportResult<u8> {
    if (MIN_STRENGTH as i64..=MAX_STRENGTH as i64).contains(&value) {
        Ok(value as u8)
    } else {
        Err(RapportError::OutOfRange {
            field: "relationship strength".into(),
            min: MIN_STRENGTH as i64,
            max: MAX_STRENGTH as i64,
            value,
        })
    }
}

/// Parses and range-checks a relationship strength typed by the user.
pub fn relationship_strength(raw: &str) -> RapportResult<u8> {
    let trimmed = raw.trim();
    let value = trimmed
        .parse::<i64>()
        .map_err(|_| RapportError::InvalidNumber {
            field: "relationship strength".into(),
            value: trimmed.to_string(),
        })?;
    strength_in_range(value)
}

/// Maps a numbered menu choice (1-based) or a method name to a `ContactMethod`.
pub fn contact_method_choice(raw: &str) -> RapportResult<ContactMethod> {
    let trimmed = raw.trim();
    let by_number = trimmed
        .parse::<usize>()
        .ok()
        .and_then(|i| ContactMethod::ALL.get(i.wrapping_sub(1)))
        .copied();

    by_number
        .or_else(|| ContactMethod::from_name(trimmed))
        .ok_or_else(|| RapportError::InvalidChoice {
            field: "preferred contact method".into(),
            value: trimmed.to_string(),
        })
}

/// Parses an optional `YYYY-MM-DD` date. Blank input and "unknown" mean no date.
pub fn optional_date(raw: &str, field: &str) -> RapportResult<Option<NaiveDate>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("unknown") {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| RapportError::InvalidDate {
            field: field.to_string(),
            value: trimmed.to_string(),
        })
}

/// Splits a comma-separated interest list, dropping blank entries.
pub fn interests(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parses a contact identifier typed by the user.
pub fn contact_id(raw: &str) -> RapportResult<ContactId> {
    let trimmed = raw.trim();
    match trimmed.parse::<ContactId>() {
        Ok(id) if id.value() > 0 => Ok(id),
        _ => Err(RapportError::InvalidNumber {
            field: "contact ID".into(),
            value: trimmed.to_string(),
        }),
    }
}

/// Only an explicit "yes" (or "y") confirms a destructive action.
pub fn confirmation(raw: &str) -> bool {
    let answer = raw.trim();
    answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y")
}
