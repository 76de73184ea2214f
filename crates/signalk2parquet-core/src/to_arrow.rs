// Convert telemetry rows to an Arrow RecordBatch
//
// Builds one column per schema field, appending rows in the order they are
// given so partition files preserve input arrival order.

use arrow::array::{Float64Builder, Int32Builder, RecordBatch, StringBuilder};
use arrow::error::ArrowError;
use std::sync::Arc;

use crate::record::OutputRecord;
use crate::schema::telemetry_schema_arc;

/// Converts telemetry rows to an Arrow RecordBatch
pub struct ArrowConverter {
    version_builder: StringBuilder,
    name_builder: StringBuilder,
    uuid_builder: StringBuilder,
    latitude_builder: Float64Builder,
    longitude_builder: Float64Builder,
    altitude_builder: Float64Builder,
    course_builder: Float64Builder,
    speed_builder: Float64Builder,
    timestamp_builder: StringBuilder,
    year_builder: Int32Builder,
    month_builder: Int32Builder,
    day_builder: Int32Builder,
    processed_at_builder: StringBuilder,
}

impl ArrowConverter {
    pub fn new() -> Self {
        Self {
            version_builder: StringBuilder::new(),
            name_builder: StringBuilder::new(),
            uuid_builder: StringBuilder::new(),
            latitude_builder: Float64Builder::new(),
            longitude_builder: Float64Builder::new(),
            altitude_builder: Float64Builder::new(),
            course_builder: Float64Builder::new(),
            speed_builder: Float64Builder::new(),
            timestamp_builder: StringBuilder::new(),
            year_builder: Int32Builder::new(),
            month_builder: Int32Builder::new(),
            day_builder: Int32Builder::new(),
            processed_at_builder: StringBuilder::new(),
        }
    }

    /// Append one row to every column builder
    pub fn append(&mut self, record: &OutputRecord) {
        self.version_builder.append_value(&record.version);
        self.name_builder.append_value(&record.name);
        self.uuid_builder.append_value(&record.uuid);
        self.latitude_builder.append_value(record.latitude);
        self.longitude_builder.append_value(record.longitude);
        self.altitude_builder.append_value(record.altitude);
        self.course_builder.append_value(record.course);
        self.speed_builder.append_value(record.speed);
        self.timestamp_builder.append_value(&record.timestamp);
        self.year_builder.append_value(record.year);
        self.month_builder.append_value(record.month);
        self.day_builder.append_value(record.day);
        self.processed_at_builder.append_value(&record.processed_at);
    }

    /// Finish all builders and assemble the batch against the fixed schema
    pub fn finish(mut self) -> Result<RecordBatch, ArrowError> {
        RecordBatch::try_new(
            telemetry_schema_arc(),
            vec![
                Arc::new(self.version_builder.finish()),
                Arc::new(self.name_builder.finish()),
                Arc::new(self.uuid_builder.finish()),
                Arc::new(self.latitude_builder.finish()),
                Arc::new(self.longitude_builder.finish()),
                Arc::new(self.altitude_builder.finish()),
                Arc::new(self.course_builder.finish()),
                Arc::new(self.speed_builder.finish()),
                Arc::new(self.timestamp_builder.finish()),
                Arc::new(self.year_builder.finish()),
                Arc::new(self.month_builder.finish()),
                Arc::new(self.day_builder.finish()),
                Arc::new(self.processed_at_builder.finish()),
            ],
        )
    }
}

impl Default for ArrowConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a slice of rows into one RecordBatch, preserving order
pub fn records_to_batch(records: &[OutputRecord]) -> Result<RecordBatch, ArrowError> {
    let mut converter = ArrowConverter::new();
    for record in records {
        converter.append(record);
    }
    converter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{InputRecord, OutputRecord};

    fn row(name: &str, speed: f64) -> OutputRecord {
        OutputRecord::from_input(InputRecord {
            version: "1.0.0".to_string(),
            name: name.to_string(),
            uuid: "urn:mrn:signalk:uuid:12345678-1234-1234-1234-123456789012".to_string(),
            latitude: 37.7,
            longitude: -122.3,
            altitude: 0.0,
            course: 123.4,
            speed,
            timestamp: "2025-04-28T12:34:56Z".parse().unwrap(),
        })
    }

    #[test]
    fn test_batch_matches_schema_and_row_count() {
        let rows = vec![row("Boat A", 1.0), row("Boat A", 2.0), row("Boat A", 3.0)];
        let batch = records_to_batch(&rows).unwrap();
        assert_eq!(batch.num_rows(), 3);
        assert_eq!(batch.num_columns(), 13);
        assert_eq!(batch.schema(), telemetry_schema_arc());
    }

    #[test]
    fn test_batch_preserves_row_order() {
        use arrow::array::Float64Array;

        let rows = vec![row("Boat A", 5.0), row("Boat A", 1.0), row("Boat A", 9.0)];
        let batch = records_to_batch(&rows).unwrap();
        let speeds: Vec<f64> = batch
            .column(7)
            .as_any()
            .downcast_ref::<Float64Array>()
            .unwrap()
            .values()
            .iter()
            .copied()
            .collect();
        assert_eq!(speeds, vec![5.0, 1.0, 9.0]);
    }

    #[test]
    fn test_empty_batch_is_valid() {
        let batch = records_to_batch(&[]).unwrap();
        assert_eq!(batch.num_rows(), 0);
        assert_eq!(batch.num_columns(), 13);
    }
}
