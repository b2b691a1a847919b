//! Purchase date and time parsing
//!
//! Only the zero-padded forms `YYYY-MM-DD` and `HH:MM` are accepted. The
//! layout is checked byte by byte before chrono validates the values, since
//! chrono alone also takes forms like `2022-1-1`, `+2022-01-01` or `9:5`.

use chrono::{NaiveDate, NaiveTime};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

// `d` = ASCII digit, anything else must match literally
const DATE_LAYOUT: &[u8] = b"dddd-dd-dd";
const TIME_LAYOUT: &[u8] = b"dd:dd";

fn matches_layout(text: &str, layout: &[u8]) -> bool {
    text.len() == layout.len()
        && text.bytes().zip(layout).all(|(b, &l)| match l {
            b'd' => b.is_ascii_digit(),
            _ => b == l,
        })
}

/// Parse an ISO calendar date (`YYYY-MM-DD`).
pub fn parse_purchase_date(text: &str) -> Option<NaiveDate> {
    if !matches_layout(text, DATE_LAYOUT) {
        return None;
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

/// Parse a 24-hour time of day (`HH:MM`).
pub fn parse_purchase_time(text: &str) -> Option<NaiveTime> {
    if !matches_layout(text, TIME_LAYOUT) {
        return None;
    }
    NaiveTime::parse_from_str(text, TIME_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_purchase_date() {
        assert_eq!(
            parse_purchase_date("2022-01-01"),
            NaiveDate::from_ymd_opt(2022, 1, 1)
        );
        assert_eq!(
            parse_purchase_date("2022-03-20"),
            NaiveDate::from_ymd_opt(2022, 3, 20)
        );
        assert_eq!(parse_purchase_date("2022-02-30"), None);
        assert_eq!(parse_purchase_date("01/02/2022"), None);
        assert_eq!(parse_purchase_date(""), None);
    }

    #[test]
    fn test_date_requires_zero_padding() {
        assert_eq!(parse_purchase_date("2022-1-1"), None);
        assert_eq!(parse_purchase_date("2022-01-1"), None);
        assert_eq!(parse_purchase_date("+2022-01-01"), None);
        assert_eq!(parse_purchase_date("22-01-01"), None);
        assert_eq!(parse_purchase_date("2022-01-01 "), None);
        assert_eq!(parse_purchase_date("２022-01-01"), None);
    }

    #[test]
    fn test_parse_purchase_time() {
        assert_eq!(parse_purchase_time("13:01"), NaiveTime::from_hms_opt(13, 1, 0));
        assert_eq!(parse_purchase_time("00:00"), NaiveTime::from_hms_opt(0, 0, 0));
        assert_eq!(parse_purchase_time("24:00"), None);
        assert_eq!(parse_purchase_time("12:60"), None);
        assert_eq!(parse_purchase_time("2pm"), None);
        assert_eq!(parse_purchase_time(""), None);
    }

    #[test]
    fn test_time_requires_zero_padding() {
        assert_eq!(parse_purchase_time("9:5"), None);
        assert_eq!(parse_purchase_time("9:05"), None);
        assert_eq!(parse_purchase_time("09:5"), None);
        assert_eq!(parse_purchase_time("09:05"), NaiveTime::from_hms_opt(9, 5, 0));
        assert_eq!(parse_purchase_time("14:00:00"), None);
    }
}
