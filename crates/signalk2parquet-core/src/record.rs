//! Wire and row representations of one telemetry observation

use chrono::{DateTime, Datelike, FixedOffset, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One line of wire input: a SignalK-style vessel observation.
///
/// Unknown extra fields on the wire are ignored. The numeric fields fall
/// back to zero when absent, mirroring the lenient decode policy of the
/// upstream feed; `version`, `name`, `uuid` and `timestamp` are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    pub version: String,
    pub name: String,
    pub uuid: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub altitude: f64,
    #[serde(default)]
    pub course: f64,
    #[serde(default)]
    pub speed: f64,
    /// RFC 3339 on the wire. The offset it was written with is preserved;
    /// no timezone normalization happens anywhere downstream.
    pub timestamp: DateTime<FixedOffset>,
}

/// One row of a partition file: every input field plus the date components
/// used for partitioning and the instant the record was transformed.
///
/// Both timestamps are carried as formatted strings, matching the physical
/// schema (see [`crate::schema`]).
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRecord {
    pub version: String,
    pub name: String,
    pub uuid: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub course: f64,
    pub speed: f64,
    pub timestamp: String,
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub processed_at: String,
}

impl OutputRecord {
    /// Enrich an input record into an output row, stamping `processed_at`
    /// with the current wall-clock time.
    pub fn from_input(record: InputRecord) -> Self {
        let timestamp = record.timestamp;
        Self {
            version: record.version,
            name: record.name,
            uuid: record.uuid,
            latitude: record.latitude,
            longitude: record.longitude,
            altitude: record.altitude,
            course: record.course,
            speed: record.speed,
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            year: timestamp.year(),
            month: timestamp.month() as i32,
            day: timestamp.day() as i32,
            processed_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> InputRecord {
        InputRecord {
            version: "1.0.0".to_string(),
            name: "Test Boat 1".to_string(),
            uuid: "urn:mrn:signalk:uuid:12345678-1234-1234-1234-123456789012".to_string(),
            latitude: 37.7,
            longitude: -122.3,
            altitude: 0.0,
            course: 123.4,
            speed: 5.0,
            timestamp: "2025-04-28T12:34:56Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_enrichment_extracts_date_components() {
        let row = OutputRecord::from_input(sample_input());
        assert_eq!(row.year, 2025);
        assert_eq!(row.month, 4);
        assert_eq!(row.day, 28);
        assert_eq!(row.timestamp, "2025-04-28T12:34:56Z");
    }

    #[test]
    fn test_enrichment_copies_core_fields() {
        let input = sample_input();
        let row = OutputRecord::from_input(input.clone());
        assert_eq!(row.version, input.version);
        assert_eq!(row.name, input.name);
        assert_eq!(row.uuid, input.uuid);
        assert_eq!(row.latitude, input.latitude);
        assert_eq!(row.longitude, input.longitude);
        assert_eq!(row.course, input.course);
        assert_eq!(row.speed, input.speed);
    }

    #[test]
    fn test_processed_at_is_rfc3339() {
        let row = OutputRecord::from_input(sample_input());
        assert!(DateTime::parse_from_rfc3339(&row.processed_at).is_ok());
    }

    #[test]
    fn test_date_components_use_decoded_offset() {
        // 23:30 at -08:00 is already the next day in UTC; the record's own
        // offset wins.
        let mut input = sample_input();
        input.timestamp = "2025-04-28T23:30:00-08:00".parse().unwrap();
        let row = OutputRecord::from_input(input);
        assert_eq!((row.year, row.month, row.day), (2025, 4, 28));
    }
}
