// Fixed Arrow schema for telemetry partition files
//
// Thirteen columns: the seven text/numeric wire fields, the re-formatted
// timestamp, the three partition date components, and processed_at.
// Timestamps are stored as UTF8 strings, not native temporal types.

use arrow::datatypes::{DataType, Field, Schema};
use std::sync::{Arc, OnceLock};

/// Returns the Arrow schema for telemetry partition files
pub fn telemetry_schema() -> Schema {
    Schema::new(vec![
        Field::new("version", DataType::Utf8, false),
        Field::new("name", DataType::Utf8, false),
        Field::new("uuid", DataType::Utf8, false),
        Field::new("latitude", DataType::Float64, false),
        Field::new("longitude", DataType::Float64, false),
        Field::new("altitude", DataType::Float64, false),
        Field::new("course", DataType::Float64, false),
        Field::new("speed", DataType::Float64, false),
        Field::new("timestamp", DataType::Utf8, false),
        Field::new("year", DataType::Int32, false),
        Field::new("month", DataType::Int32, false),
        Field::new("day", DataType::Int32, false),
        Field::new("processed_at", DataType::Utf8, false),
    ])
}

/// Shared schema instance (cached)
pub fn telemetry_schema_arc() -> Arc<Schema> {
    static SCHEMA: OnceLock<Arc<Schema>> = OnceLock::new();
    SCHEMA.get_or_init(|| Arc::new(telemetry_schema())).clone()
}
