// src/presentation/age.rs
use chrono::{DateTime, Utc};

/// Relative age of an upload, e.g. "3 days ago". Instants after `now` read as "a few seconds ago".
pub fn humanize_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - created_at).num_seconds().max(0);
    let minutes = rounded_div(seconds, 60);
    let hours = rounded_div(seconds, 60 * 60);
    let days = rounded_div(seconds, 60 * 60 * 24);

    match seconds {
        s if s < 45 => "a few seconds ago".to_string(),
        s if s < 90 => "a minute ago".to_string(),
        _ if minutes < 45 => format!("{minutes} minutes ago"),
        _ if minutes < 90 => "an hour ago".to_string(),
        _ if hours < 22 => format!("{hours} hours ago"),
        _ if hours < 36 => "a day ago".to_string(),
        _ if days < 26 => format!("{days} days ago"),
        _ if days < 45 => "a month ago".to_string(),
        _ if days < 320 => format!("{} months ago", rounded_div(days * 10, 304).max(2)),
        _ if days < 548 => "a year ago".to_string(),
        _ => format!("{} years ago", rounded_div(days, 365).max(2)),
    }
}

fn rounded_div(value: i64, divisor: i64) -> i64 {
    (value + divisor / 2) / divisor
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn age(delta: Duration) -> String {
        let now = Utc::now();
        humanize_age(now - delta, now)
    }

    #[test]
    fn thresholds() {
        assert_eq!(age(Duration::seconds(10)), "a few seconds ago");
        assert_eq!(age(Duration::seconds(60)), "a minute ago");
        assert_eq!(age(Duration::minutes(5)), "5 minutes ago");
        assert_eq!(age(Duration::minutes(60)), "an hour ago");
        assert_eq!(age(Duration::hours(5)), "5 hours ago");
        assert_eq!(age(Duration::hours(30)), "a day ago");
        assert_eq!(age(Duration::days(3)), "3 days ago");
        assert_eq!(age(Duration::days(30)), "a month ago");
        assert_eq!(age(Duration::days(91)), "3 months ago");
        assert_eq!(age(Duration::days(400)), "a year ago");
        assert_eq!(age(Duration::days(365 * 3)), "3 years ago");
    }

    #[test]
    fn future_timestamps_clamp() {
        assert_eq!(age(Duration::seconds(-30)), "a few seconds ago");
    }
}
