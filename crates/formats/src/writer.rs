//! Dataset writing
//!
//! Output files are replaced on every run. Missing parent directories are
//! created first.

use crate::json::write_json_array;
use crate::jsonl::JsonlWriter;
use crate::{DatasetFormat, Result};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Write all records to `path` in the given format and return the file size
pub fn write_dataset<T: Serialize>(path: &Path, format: DatasetFormat, records: &[T]) -> Result<u64> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            debug!("Creating output directory: {:?}", parent);
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;

    match format {
        DatasetFormat::Json => {
            let mut writer = BufWriter::new(file);
            write_json_array(&mut writer, records)?;
            writer.flush()?;
        }
        DatasetFormat::Jsonl => {
            let mut writer = JsonlWriter::new(file);
            for record in records {
                writer.write_record(record)?;
            }
            debug!("Wrote {} JSONL lines", writer.records_written());
            writer.finish()?;
        }
    }

    let bytes = fs::metadata(path)?.len();
    info!("Wrote {} records ({} bytes) to {:?}", records.len(), bytes, path);
    Ok(bytes)
}
