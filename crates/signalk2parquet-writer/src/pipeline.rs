//! The ingestion driver: decode lines, accumulate, flush

use std::io::{BufRead, Write};

use signalk2parquet_core::decode_line;

use crate::config::WriterConfig;
use crate::error::{PipelineError, Result};
use crate::partitioned::PartitionedWriter;

/// Run the whole pipeline: read newline-delimited JSON records from `input`,
/// group them by entity name and calendar date, and emit one Parquet file
/// per partition under the configured output root.
///
/// One status line per emitted file goes to `status`. Blank lines in the
/// input are skipped; any malformed line is fatal and aborts the run before
/// a single file is written.
pub fn process<R, W>(input: R, status: &mut W, config: WriterConfig) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut writer = PartitionedWriter::new(config);

    for line in input.lines() {
        let line = line.map_err(|source| PipelineError::Input { source })?;
        if line.trim().is_empty() {
            continue;
        }
        writer.insert(decode_line(&line)?);
    }

    tracing::info!(
        partitions = writer.partition_count(),
        records = writer.record_count(),
        "input exhausted, flushing partitions"
    );

    writer.flush(status)
}
