// signalk2parquet-core - Pure record processing logic
//
// This crate contains the pure logic for turning one line of SignalK-style
// telemetry into a typed record, deriving its partition key, and building
// Arrow columns for Parquet emission. No I/O, no clocks beyond stamping
// `processed_at`, no filesystem knowledge.

pub mod decode;
pub mod partition;
pub mod record;
pub mod schema;
pub mod to_arrow;

pub use decode::{decode_line, DecodeError};
pub use partition::partition_key;
pub use record::{InputRecord, OutputRecord};
pub use schema::{telemetry_schema, telemetry_schema_arc};
pub use to_arrow::{records_to_batch, ArrowConverter};
