//! Utility functions for UI components

use chrono::{DateTime, Utc};

/// Compact age of a timestamp for list rows ("now", "5m", "3h", "2d"),
/// falling back to a date after a week
pub fn format_relative_time(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(at);

    if duration.num_seconds() < 60 {
        return "now".to_string();
    }
    if duration.num_minutes() < 60 {
        return format!("{}m", duration.num_minutes());
    }
    if duration.num_hours() < 24 {
        return format!("{}h", duration.num_hours());
    }
    if duration.num_days() < 7 {
        return format!("{}d", duration.num_days());
    }
    at.format("%b %-d").to_string()
}

/// Timestamp shown above a message in the thread
pub fn format_message_time(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if at.date_naive() == now.date_naive() {
        at.format("%H:%M").to_string()
    } else {
        at.format("%b %-d, %H:%M").to_string()
    }
}

/// Up to two initials for an avatar
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_relative_time_buckets() {
        assert_eq!(format_relative_time(now() - Duration::seconds(20), now()), "now");
        assert_eq!(format_relative_time(now() - Duration::minutes(5), now()), "5m");
        assert_eq!(format_relative_time(now() - Duration::hours(3), now()), "3h");
        assert_eq!(format_relative_time(now() - Duration::days(2), now()), "2d");
        assert_eq!(format_relative_time(now() - Duration::days(30), now()), "Feb 14");
    }

    #[test]
    fn test_message_time_shows_date_only_for_other_days() {
        assert_eq!(format_message_time(now() - Duration::hours(2), now()), "10:00");
        assert_eq!(
            format_message_time(now() - Duration::days(1), now()),
            "Mar 14, 12:00"
        );
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Ada Lovelace"), "AL");
        assert_eq!(initials("grace brewster hopper"), "GB");
        assert_eq!(initials("   "), "");
    }
}
