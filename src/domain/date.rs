use chrono::{Datelike, Local, NaiveDate};

/// Transaction dates are stored as an 8-digit decimal integer, YYYYMMDD.
/// Example: 2024-03-01 -> 20240301. This keeps the secondary index a plain
/// integer comparison.
pub type Ymd = i32;

/// Today's date in the local timezone, encoded as YYYYMMDD.
pub fn today_ymd() -> Ymd {
    to_ymd(Local::now().date_naive())
}

/// Encode a calendar date as YYYYMMDD.
pub fn to_ymd(date: NaiveDate) -> Ymd {
    date.year() * 10000 + date.month() as i32 * 100 + date.day() as i32
}

/// Decode a YYYYMMDD integer back into a calendar date.
/// Returns None for values that don't name a real civil date.
pub fn from_ymd(ymd: Ymd) -> Option<NaiveDate> {
    if !(10000101..=99991231).contains(&ymd) {
        return None;
    }
    let year = ymd / 10000;
    let month = (ymd / 100 % 100) as u32;
    let day = (ymd % 100) as u32;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Returns true if `ymd` encodes a valid civil date.
pub fn is_valid_ymd(ymd: Ymd) -> bool {
    from_ymd(ymd).is_some()
}

/// Parse a `YYYY-MM-DD` string into a YYYYMMDD integer.
pub fn parse_ymd(input: &str) -> Option<Ymd> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .ok()
        .map(to_ymd)
}

/// Format as `MM/DD` for compact list display.
/// Example: 20240301 -> "03/01"
pub fn format_ymd_short(ymd: Ymd) -> String {
    format!("{:02}/{:02}", ymd / 100 % 100, ymd % 100)
}

/// Format as `YYYY-MM-DD` for exports.
/// Example: 20240301 -> "2024-03-01"
pub fn format_ymd(ymd: Ymd) -> String {
    format!("{:04}-{:02}-{:02}", ymd / 10000, ymd / 100 % 100, ymd % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(to_ymd(date), 20240301);
        assert_eq!(from_ymd(20240301), Some(date));
    }

    #[test]
    fn test_is_valid_ymd() {
        assert!(is_valid_ymd(20240229)); // leap day
        assert!(!is_valid_ymd(20230229));
        assert!(!is_valid_ymd(20241301));
        assert!(!is_valid_ymd(20240100));
        assert!(!is_valid_ymd(0));
        assert!(!is_valid_ymd(-20240101));
    }

    #[test]
    fn test_parse_ymd() {
        assert_eq!(parse_ymd("2024-03-01"), Some(20240301));
        assert_eq!(parse_ymd(" 2024-12-31 "), Some(20241231));
        assert_eq!(parse_ymd("2024/03/01"), None);
        assert_eq!(parse_ymd("garbage"), None);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_ymd_short(20240301), "03/01");
        assert_eq!(format_ymd(20240301), "2024-03-01");
        assert_eq!(format_ymd_short(20241231), "12/31");
    }

    #[test]
    fn test_today_is_valid() {
        assert!(is_valid_ymd(today_ymd()));
    }
}
