//! Utilities for date formatting
//!
//! Upstream dates arrive as `YYYY-MM-DD` or as full ISO timestamps
//! (`2024-02-29T18:30:00.000Z`). The dashboard shows them as `DD/MM/YYYY`.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%d/%m/%Y";
const ISO_DATE: &str = "%Y-%m-%d";

/// Format an ISO date or timestamp as `DD/MM/YYYY`.
///
/// Timestamps with a zone are shifted into the display zone
/// (`utc_offset_minutes`) before the date is taken, so a quota date stored
/// as local midnight shows the local calendar day. Anything that does not
/// parse is returned unchanged.
///
/// Example: "2024-03-01" -> "01/03/2024"
pub fn format_display_date(date_str: &str, utc_offset_minutes: i32) -> String {
    let trimmed = date_str.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, ISO_DATE) {
        return date.format(DISPLAY_FORMAT).to_string();
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        let date = match FixedOffset::east_opt(utc_offset_minutes * 60) {
            Some(zone) => ts.with_timezone(&zone).date_naive(),
            None => ts.date_naive(),
        };
        return date.format(DISPLAY_FORMAT).to_string();
    }

    // Timestamp without a zone is already local
    if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return ts.date().format(DISPLAY_FORMAT).to_string();
    }

    date_str.to_string()
}

/// Date part of an ISO value: "2024-03-15T00:00:00Z" -> "2024-03-15"
pub fn date_part(date_str: &str) -> &str {
    let trimmed = date_str.trim();
    trimmed.split('T').next().unwrap_or(trimmed)
}

/// Parse a form date (`YYYY-MM-DD`, a time part is ignored)
pub fn parse_form_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_part(date_str), ISO_DATE).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const IST: i32 = 330;

    #[test]
    fn test_format_plain_date() {
        assert_eq!(format_display_date("2024-03-01", IST), "01/03/2024");
        assert_eq!(format_display_date("2024-12-31", 0), "31/12/2024");
    }

    #[test]
    fn test_format_timestamp_shifts_into_display_zone() {
        // Local midnight of 1 March in India, stored as UTC
        assert_eq!(
            format_display_date("2024-02-29T18:30:00.000Z", IST),
            "01/03/2024"
        );
        assert_eq!(format_display_date("2024-02-29T18:30:00.000Z", 0), "29/02/2024");
    }

    #[test]
    fn test_format_local_timestamp() {
        assert_eq!(format_display_date("2024-03-15T14:02:26", IST), "15/03/2024");
    }

    #[test]
    fn test_invalid_returned_unchanged() {
        assert_eq!(format_display_date("invalid", IST), "invalid");
        assert_eq!(format_display_date("2024-13-45", IST), "2024-13-45");
        assert_eq!(format_display_date("", IST), "");
    }

    #[test]
    fn test_parse_form_date() {
        assert_eq!(
            parse_form_date("2024-03-15T00:00:00.000Z"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(parse_form_date("15/03/2024"), None);
        assert_eq!(date_part(" 2024-03-15 "), "2024-03-15");
    }
}
