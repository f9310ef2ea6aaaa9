/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Parse an `HH:MM` string into a `NaiveTime`.
///
/// Reservation times arrive as bare `HH:MM` labels from the booking
/// surface; anything that does not parse is rejected by the caller.
pub fn parse_hhmm(s: &str) -> Option<chrono::NaiveTime> {
    chrono::NaiveTime::parse_from_str(s, "%H:%M").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hhmm() {
        let t = parse_hhmm("19:30").unwrap();
        assert_eq!(t.format("%H:%M").to_string(), "19:30");
        assert!(parse_hhmm("25:00").is_none());
        assert!(parse_hhmm("").is_none());
    }
}
