//! Partition key derivation for name/date organization
//!
//! Partition keys look like `Boat A/2025/04/28`: the entity name followed by
//! the zero-padded calendar date of the observation.

use chrono::{DateTime, Datelike, FixedOffset};

/// Derive the partition key for a record: `{name}/{year}/{month:02}/{day:02}`.
///
/// The calendar date is read from the timestamp in the offset it was decoded
/// with; no timezone normalization is applied. Pure: identical (name, date)
/// inputs always produce the identical key.
pub fn partition_key(name: &str, timestamp: &DateTime<FixedOffset>) -> String {
    format!(
        "{}/{}/{:02}/{:02}",
        name,
        timestamp.year(),
        timestamp.month(),
        timestamp.day()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<FixedOffset> {
        s.parse().unwrap()
    }

    #[test]
    fn test_same_name_and_date_share_a_key() {
        let morning = partition_key("Boat A", &ts("2025-04-28T10:00:00Z"));
        let evening = partition_key("Boat A", &ts("2025-04-28T23:00:00Z"));
        assert_eq!(morning, "Boat A/2025/04/28");
        assert_eq!(morning, evening);
    }

    #[test]
    fn test_date_rollover_changes_the_key() {
        let key = partition_key("Boat A", &ts("2025-04-29T00:00:01Z"));
        assert_eq!(key, "Boat A/2025/04/29");
    }

    #[test]
    fn test_name_changes_the_key() {
        let a = partition_key("Boat A", &ts("2025-04-28T10:00:00Z"));
        let b = partition_key("Boat B", &ts("2025-04-28T10:00:00Z"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_month_and_day_are_zero_padded() {
        let key = partition_key("Boat A", &ts("2025-01-02T00:00:00Z"));
        assert_eq!(key, "Boat A/2025/01/02");
    }

    #[test]
    fn test_offset_is_not_normalized() {
        // Same instant, different offsets: the decoded offset's calendar
        // date decides the partition.
        let late_utc = partition_key("Boat A", &ts("2025-04-29T07:30:00Z"));
        let late_pst = partition_key("Boat A", &ts("2025-04-28T23:30:00-08:00"));
        assert_eq!(late_utc, "Boat A/2025/04/29");
        assert_eq!(late_pst, "Boat A/2025/04/28");
    }
}
