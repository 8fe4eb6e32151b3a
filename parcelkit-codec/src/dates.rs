//! Wire date formats.
//!
//! The upstream API renders timestamps as `dd-mm-yyyy HH:MM:SS` and
//! date-only fields as `dd-mm-yyyy`. Both directions are strict:
//! a malformed string on a recognized date field is never coerced.

use crate::{CodecError, CodecResult};
use chrono::{NaiveDate, NaiveDateTime};

pub const DATETIME_FORMAT: &str = "%d-%m-%Y %H:%M:%S";
pub const DATE_FORMAT: &str = "%d-%m-%Y";

pub fn format_datetime(value: NaiveDateTime) -> String {
    value.format(DATETIME_FORMAT).to_string()
}

pub fn format_date(value: NaiveDate) -> String {
    value.format(DATE_FORMAT).to_string()
}

pub fn parse_datetime(property: &str, raw: &str) -> CodecResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT).map_err(|e| {
        CodecError::InvalidArgument(format!(
            "property `{property}`: `{raw}` is not a `{DATETIME_FORMAT}` timestamp ({e})"
        ))
    })
}

pub fn parse_date(property: &str, raw: &str) -> CodecResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| {
        CodecError::InvalidArgument(format!(
            "property `{property}`: `{raw}` is not a `{DATE_FORMAT}` date ({e})"
        ))
    })
}
