// Parquet writer properties for partition files
//
// Snappy compression (fast, safe, modest ratio), dictionary encoding, page
// statistics. Row groups target 128 MiB as a soft limit; the arrow writer
// bounds groups by row count, so the limit is expressed as rows derived from
// this schema's typical encoded row width.

use parquet::basic::Compression;
use parquet::file::properties::{EnabledStatistics, WriterProperties};
use std::sync::OnceLock;

/// Soft row-group size target, in bytes
const ROW_GROUP_TARGET_BYTES: usize = 128 * 1024 * 1024;

/// Typical encoded width of one row across the 13 columns
const ESTIMATED_ROW_BYTES: usize = 256;

/// Get shared writer properties (cached)
pub fn writer_properties() -> &'static WriterProperties {
    static PROPERTIES: OnceLock<WriterProperties> = OnceLock::new();
    PROPERTIES.get_or_init(|| {
        WriterProperties::builder()
            .set_dictionary_enabled(true)
            .set_statistics_enabled(EnabledStatistics::Page)
            .set_compression(Compression::SNAPPY)
            .set_max_row_group_size(ROW_GROUP_TARGET_BYTES / ESTIMATED_ROW_BYTES)
            .build()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_properties_use_snappy() {
        let props = writer_properties();
        let col = parquet::schema::types::ColumnPath::new(vec!["speed".to_string()]);
        assert_eq!(props.compression(&col), Compression::SNAPPY);
    }

    #[test]
    fn test_row_group_limit_approximates_target() {
        let props = writer_properties();
        assert_eq!(
            props.max_row_group_size() * ESTIMATED_ROW_BYTES,
            ROW_GROUP_TARGET_BYTES
        );
    }
}
