//! Due-date text parsing.
//!
//! Accepted forms, tried in order:
//! - `YYYY-MM-DD` (ISO 8601 calendar date)
//! - `MM/DD/YY`
//! - `MM/DD/YYYY`
//!
//! Month and day may omit the leading zero (`4/7/25`). Two-digit years use
//! chrono's pivot: 00-69 map to 20xx, 70-99 to 19xx.

use chrono::NaiveDate;

use crate::error::ValidationError;

const ACCEPTED_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%y", "%m/%d/%Y"];

pub fn parse_due_date(text: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = text.trim();
    ACCEPTED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| ValidationError::InvalidDate(text.to_string()))
}
