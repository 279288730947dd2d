//! JSONL (JSON Lines) datasets
//!
//! One compact JSON object per line. The reader streams line by line, skips
//! blank lines and stops at the first line that is not a valid record.

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::marker::PhantomData;
use std::path::Path;
use tracing::debug;

const BUFFER_SIZE: usize = 64 * 1024;

/// Streaming JSONL writer
pub struct JsonlWriter<W: Write> {
    writer: BufWriter<W>,
    records_written: usize,
}

impl<W: Write> JsonlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(BUFFER_SIZE, writer),
            records_written: 0,
        }
    }

    /// Append one record as a line
    pub fn write_record<T: Serialize>(&mut self, record: &T) -> Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        self.records_written += 1;
        Ok(())
    }

    /// Number of records written so far
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Flush buffered lines and return the inner writer
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| Error::Io(e.into_error()))
    }
}

/// Streaming JSONL reader producing typed records
pub struct JsonlReader<R: Read, T> {
    reader: BufReader<R>,
    line_number: usize,
    bytes_read: u64,
    _record: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<File, T> {
    /// Open a JSONL file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening JSONL file: {:?}", path);
        Ok(Self::new(File::open(path)?))
    }
}

impl<R: Read, T: DeserializeOwned> JsonlReader<R, T> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::with_capacity(BUFFER_SIZE, reader),
            line_number: 0,
            bytes_read: 0,
            _record: PhantomData,
        }
    }

    /// Get the number of lines processed
    pub fn lines_processed(&self) -> usize {
        self.line_number
    }

    /// Get the number of bytes read
    pub fn bytes_processed(&self) -> u64 {
        self.bytes_read
    }
}

impl<R: Read, T: DeserializeOwned> Iterator for JsonlReader<R, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();

        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(n) => {
                    self.bytes_read += n as u64;
                    self.line_number += 1;

                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }

                    return Some(serde_json::from_str::<T>(trimmed).map_err(|source| {
                        Error::MalformedRecord {
                            line: self.line_number,
                            source,
                        }
                    }));
                }
                Err(e) => return Some(Err(Error::Io(e))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::NamedTempFile;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Item {
        title: String,
        popularity: Option<u32>,
    }

    fn item(title: &str, popularity: Option<u32>) -> Item {
        Item {
            title: title.to_string(),
            popularity,
        }
    }

    #[test]
    fn test_writer_one_line_per_record() {
        let mut writer = JsonlWriter::new(Vec::new());
        writer.write_record(&item("Café em grãos", Some(10))).unwrap();
        writer.write_record(&item("Mel", None)).unwrap();
        assert_eq!(writer.records_written(), 2);

        let text = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(
            text,
            "{\"title\":\"Café em grãos\",\"popularity\":10}\n{\"title\":\"Mel\",\"popularity\":null}\n"
        );
    }

    #[test]
    fn test_reader_skips_blank_lines() {
        let data = r#"{"title": "Tablet", "popularity": 3}

{"title": "Mouse", "popularity": null}
"#;
        let reader: JsonlReader<_, Item> = JsonlReader::new(data.as_bytes());
        let items = reader.collect::<Result<Vec<_>>>().unwrap();

        assert_eq!(items, vec![item("Tablet", Some(3)), item("Mouse", None)]);
    }

    #[test]
    fn test_reader_fails_on_malformed_line() {
        let data = r#"{"title": "Tablet", "popularity": 3}

{not json}
{"title": "Mouse", "popularity": null}
"#;
        let reader: JsonlReader<_, Item> = JsonlReader::new(data.as_bytes());
        let result = reader.collect::<Result<Vec<_>>>();

        match result {
            Err(Error::MalformedRecord { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected malformed record error, got {:?}", other),
        }
    }

    #[test]
    fn test_reader_progress_tracking() {
        let data = "{\"title\": \"a\"}\n{\"title\": \"b\"}\n";
        let mut reader: JsonlReader<_, Item> = JsonlReader::new(data.as_bytes());

        assert_eq!(reader.lines_processed(), 0);
        let _ = reader.next();
        assert_eq!(reader.lines_processed(), 1);
        assert!(reader.bytes_processed() > 0);
        let _ = reader.next();
        assert_eq!(reader.lines_processed(), 2);
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_file_round_trip() {
        let temp_file = NamedTempFile::new().unwrap();
        {
            let mut writer = JsonlWriter::new(File::create(temp_file.path()).unwrap());
            writer.write_record(&item("Notebook", Some(500))).unwrap();
            writer.finish().unwrap();
        }

        let reader: JsonlReader<_, Item> = JsonlReader::open(temp_file.path()).unwrap();
        let items = reader.collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(items, vec![item("Notebook", Some(500))]);
    }
}
