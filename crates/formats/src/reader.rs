//! Dataset reading with format detection

use crate::json::read_json_array;
use crate::jsonl::JsonlReader;
use crate::{DatasetFormat, Result};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

/// Read every record of a dataset, detecting the format from the extension
pub fn read_dataset<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let format = DatasetFormat::from_path(path)?;
    read_dataset_as(path, format)
}

/// Read every record of a dataset in a known format
pub fn read_dataset_as<T: DeserializeOwned>(path: &Path, format: DatasetFormat) -> Result<Vec<T>> {
    info!("Reading {} dataset: {:?}", format, path);

    match format {
        DatasetFormat::Json => {
            let file = File::open(path)?;
            read_json_array(BufReader::new(file))
        }
        DatasetFormat::Jsonl => {
            let mut reader = JsonlReader::<File, T>::open(path)?;
            let records = reader.by_ref().collect::<Result<Vec<_>>>()?;
            debug!(
                "Read {} records from {} lines ({} bytes)",
                records.len(),
                reader.lines_processed(),
                reader.bytes_processed()
            );
            Ok(records)
        }
    }
}
