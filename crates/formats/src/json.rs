//! JSON array datasets
//!
//! The whole dataset is one array, pretty-printed with two-space indentation.
//! Non-ASCII text is written as UTF-8, not escaped.

use crate::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{Read, Write};

/// Write records as a pretty-printed JSON array
pub fn write_json_array<W: Write, T: Serialize>(writer: W, records: &[T]) -> Result<()> {
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}

/// Read a JSON array of records
pub fn read_json_array<R: Read, T: DeserializeOwned>(reader: R) -> Result<Vec<T>> {
    Ok(serde_json::from_reader(reader)?)
}
