use chrono::{Duration, NaiveDateTime};
use unicode_width::UnicodeWidthStr;

/// Format a non-negative duration as "Xh Ym" or "Ym".
/// Hours are truncated totals; minutes are the remainder of the hour.
pub fn format_duration(d: Duration) -> String {
    let hours = d.num_hours();
    let minutes = d.num_minutes() % 60;
    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Format an instant as "HH:MM".
pub fn format_time(t: NaiveDateTime) -> String {
    t.format("%H:%M").to_string()
}

/// Pad a string to a display width. Plain `{:<w}` counts chars, which
/// misaligns columns containing emoji; this measures rendered width.
pub fn pad_display(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use proptest::prelude::*;

    #[test]
    fn minutes_only_below_one_hour() {
        assert_eq!(format_duration(Duration::minutes(40)), "40m");
        assert_eq!(format_duration(Duration::minutes(59)), "59m");
        assert_eq!(format_duration(Duration::zero()), "0m");
    }

    #[test]
    fn hours_and_minutes_from_one_hour_up() {
        assert_eq!(format_duration(Duration::minutes(60)), "1h 0m");
        assert_eq!(format_duration(Duration::minutes(125)), "2h 5m");
        assert_eq!(format_duration(Duration::hours(11) + Duration::minutes(3)), "11h 3m");
    }

    #[test]
    fn seconds_are_truncated() {
        assert_eq!(format_duration(Duration::seconds(59)), "0m");
        assert_eq!(format_duration(Duration::seconds(3661)), "1h 1m");
    }

    #[test]
    fn formats_time_of_day() {
        let t = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(19, 7, 0).unwrap());
        assert_eq!(format_time(t), "19:07");
    }

    #[test]
    fn pads_to_display_width() {
        assert_eq!(pad_display("ab", 4), "ab  ");
        assert_eq!(pad_display("abcd", 2), "abcd");
        // The emoji is two columns wide but many chars long.
        assert_eq!(pad_display("🌙 Isha", 9).len(), "🌙 Isha".len() + 2);
    }

    proptest! {
        #[test]
        fn formats_exact_hour_minute_pairs(h in 0i64..100, m in 0i64..60) {
            let formatted = format_duration(Duration::hours(h) + Duration::minutes(m));
            let expected = if h >= 1 {
                format!("{}h {}m", h, m)
            } else {
                format!("{}m", m)
            };
            prop_assert_eq!(formatted, expected);
        }
    }
}
