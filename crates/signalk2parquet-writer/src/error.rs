//! Error types for the partitioned writer crate

use signalk2parquet_core::DecodeError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while ingesting and emitting partitions
///
/// Every variant carries enough context (line, path, or partition key) to
/// diagnose a failed run without re-running it. There is no local recovery:
/// callers treat any of these as fatal for the whole run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A line of input failed to decode
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Reading from the input stream failed
    #[error("failed to read input line: {source}")]
    Input {
        #[source]
        source: std::io::Error,
    },

    /// Creating a partition directory failed
    #[error("failed to create partition directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Opening a partition file for writing failed
    #[error("failed to create partition file {path}: {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Converting a partition's rows to Arrow columns failed
    #[error("failed to build arrow batch for partition '{partition}': {source}")]
    Convert {
        partition: String,
        #[source]
        source: arrow::error::ArrowError,
    },

    /// The Parquet writer failed to open, write, or finalize
    #[error("failed to encode partition '{partition}': {source}")]
    Encode {
        partition: String,
        #[source]
        source: parquet::errors::ParquetError,
    },

    /// Writing to the caller-supplied status sink failed
    #[error("failed to write status line: {source}")]
    Status {
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for PipelineError
pub type Result<T> = std::result::Result<T, PipelineError>;
