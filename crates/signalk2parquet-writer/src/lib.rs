// signalk2parquet-writer - Partition accumulation and Parquet emission
//
// Owns the in-memory partition map and the file emission protocol: derive a
// key per record, buffer rows per partition, and write one Snappy-compressed
// Parquet file per partition once input is exhausted. Strictly fail-fast:
// the first decode, I/O, or encode error stops the run.

pub mod config;
pub mod error;
pub mod partitioned;
pub mod pipeline;
pub mod properties;

pub use config::WriterConfig;
pub use error::{PipelineError, Result};
pub use partitioned::PartitionedWriter;
pub use pipeline::process;
