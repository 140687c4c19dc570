//! Relative time strings for trade history.

use chrono::{DateTime, Utc};

/// How long ago `time` was, relative to `now`.
///
/// Returns `None` for a zero delta, which renders as the no-value placeholder.
/// Future timestamps (clock skew) are reported as `0 sec ago`.
pub fn time_ago(time: DateTime<Utc>, now: DateTime<Utc>) -> Option<String> {
    let delta = (now - time).num_seconds();
    if delta == 0 {
        return None;
    }
    let delta = delta.max(0);
    let text = match delta {
        d if d < 60 => format!("{} sec ago", d),
        d if d < 3_600 => format!("{} min ago", d / 60),
        d if d < 86_400 => format!("{} hr ago", d / 3_600),
        d => format!("{} day ago", d / 86_400),
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_time_ago_buckets() {
        let now = Utc::now();
        assert_eq!(time_ago(now - Duration::seconds(42), now).unwrap(), "42 sec ago");
        assert_eq!(time_ago(now - Duration::seconds(125), now).unwrap(), "2 min ago");
        assert_eq!(time_ago(now - Duration::hours(5), now).unwrap(), "5 hr ago");
        assert_eq!(time_ago(now - Duration::days(3), now).unwrap(), "3 day ago");
    }

    #[test]
    fn test_time_ago_zero_delta_is_none() {
        let now = Utc::now();
        assert!(time_ago(now, now).is_none());
    }

    #[test]
    fn test_time_ago_future_clamps() {
        let now = Utc::now();
        assert_eq!(time_ago(now + Duration::seconds(5), now).unwrap(), "0 sec ago");
    }
}
