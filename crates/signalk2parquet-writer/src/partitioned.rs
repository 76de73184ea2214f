//! In-memory partition accumulation and per-partition Parquet emission

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;

use parquet::arrow::arrow_writer::ArrowWriter;
use signalk2parquet_core::{partition_key, records_to_batch, telemetry_schema_arc};
use signalk2parquet_core::{InputRecord, OutputRecord};
use uuid::Uuid;

use crate::config::WriterConfig;
use crate::error::{PipelineError, Result};
use crate::properties::writer_properties;

/// Accumulates decoded records per partition, then emits one Parquet file
/// per partition.
///
/// A partition is keyed by `{name}/{year}/{month:02}/{day:02}` and owns its
/// rows in input arrival order. Partitions live until [`flush`] consumes the
/// writer; iteration order across partitions during flush is unspecified.
///
/// [`flush`]: PartitionedWriter::flush
pub struct PartitionedWriter {
    config: WriterConfig,
    partitions: HashMap<String, Vec<OutputRecord>>,
}

impl PartitionedWriter {
    pub fn new(config: WriterConfig) -> Self {
        Self {
            config,
            partitions: HashMap::new(),
        }
    }

    /// Enrich a decoded record and append it to its partition, creating the
    /// partition on first sight of the key. No record is ever dropped or
    /// moved between partitions.
    pub fn insert(&mut self, record: InputRecord) {
        let key = partition_key(&record.name, &record.timestamp);
        let row = OutputRecord::from_input(record);
        self.partitions.entry(key).or_default().push(row);
    }

    /// Number of distinct partitions accumulated so far
    pub fn partition_count(&self) -> usize {
        self.partitions.len()
    }

    /// Total number of records accumulated across all partitions
    pub fn record_count(&self) -> usize {
        self.partitions.values().map(Vec::len).sum()
    }

    /// Emit every partition as one Parquet file under the output root,
    /// reporting each success as a line on `status`.
    ///
    /// Fail-fast: the first error aborts the loop and propagates. A file
    /// partially written at that point is left on disk; partitions not yet
    /// reached are not attempted. Files finalized before the failure remain
    /// valid.
    pub fn flush(self, status: &mut dyn Write) -> Result<()> {
        let Self { config, partitions } = self;

        for (partition, records) in partitions {
            if records.is_empty() {
                continue;
            }

            let dir = config.output_root.join(&partition);
            fs::create_dir_all(&dir).map_err(|source| PipelineError::CreateDir {
                path: dir.clone(),
                source,
            })?;

            // Fresh name per emission attempt: re-runs add files, never
            // overwrite.
            let path = dir.join(format!("data_{}.parquet", Uuid::new_v4()));

            let batch = records_to_batch(&records).map_err(|source| PipelineError::Convert {
                partition: partition.clone(),
                source,
            })?;

            let file = File::create(&path).map_err(|source| PipelineError::CreateFile {
                path: path.clone(),
                source,
            })?;
            let mut writer = ArrowWriter::try_new(
                file,
                telemetry_schema_arc(),
                Some(writer_properties().clone()),
            )
            .map_err(|source| PipelineError::Encode {
                partition: partition.clone(),
                source,
            })?;

            writer.write(&batch).map_err(|source| PipelineError::Encode {
                partition: partition.clone(),
                source,
            })?;
            writer.close().map_err(|source| PipelineError::Encode {
                partition: partition.clone(),
                source,
            })?;

            tracing::debug!(
                partition = %partition,
                path = %path.display(),
                rows = records.len(),
                "wrote partition file"
            );

            writeln!(
                status,
                "Created partition file: {} with {} records",
                path.display(),
                records.len()
            )
            .map_err(|source| PipelineError::Status { source })?;
        }

        Ok(())
    }
}
