//! Synthetic telemetry generator for tests and demonstrations
//!
//! Produces well-formed InputRecord JSON only; there is no correctness
//! contract beyond the record shape. Positions jitter around the San
//! Francisco Bay.

use std::io::Write;

use anyhow::Result;
use chrono::Utc;
use rand::Rng;
use signalk2parquet_core::InputRecord;
use uuid::Uuid;

const BASE_LATITUDE: f64 = 37.78;
const BASE_LONGITUDE: f64 = -122.38;

/// Write `count` random records to `out`, one JSON object per line
pub fn generate<W: Write>(out: &mut W, count: usize) -> Result<()> {
    let mut rng = rand::thread_rng();

    for _ in 0..count {
        let record = InputRecord {
            version: "1.0.0".to_string(),
            name: format!("Boat {}", rng.gen_range(1..=100)),
            uuid: format!("urn:mrn:signalk:uuid:{}", Uuid::new_v4()),
            latitude: BASE_LATITUDE + (rng.gen::<f64>() - 0.5) * 0.02,
            longitude: BASE_LONGITUDE + (rng.gen::<f64>() - 0.5) * 0.02,
            altitude: 0.0,
            course: rng.gen::<f64>() * 360.0,
            speed: rng.gen_range(1..=15) as f64,
            timestamp: Utc::now().fixed_offset(),
        };

        serde_json::to_writer(&mut *out, &record)?;
        writeln!(out)?;
    }

    Ok(())
}
