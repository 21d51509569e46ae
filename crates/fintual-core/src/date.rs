//! Date arguments accepted by the Fintual API

use crate::error::{Error, Result};
use chrono::NaiveDate;

/// Wire format for dates sent as query parameters
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// Check that `date` is a zero-padded `YYYY-MM-DD` calendar date.
///
/// chrono alone would accept `2020-1-1`, so the shape is checked byte by byte
/// before the calendar check.
pub fn validate_date(date: &str) -> Result<NaiveDate> {
  let bytes = date.as_bytes();
  let shaped = bytes.len() == 10
    && bytes.iter().enumerate().all(|(i, b)| match i {
      4 | 7 => *b == b'-',
      _ => b.is_ascii_digit(),
    });

  if !shaped {
    return Err(Error::InvalidDate(date.to_string()));
  }

  NaiveDate::parse_from_str(date, API_DATE_FORMAT).map_err(|_| Error::InvalidDate(date.to_string()))
}
