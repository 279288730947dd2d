//! Dataset file formats
//!
//! Writers and readers for generated datasets: a pretty-printed JSON array
//! (the default) and JSON Lines.

pub mod error;
pub mod format;
pub mod json;
pub mod jsonl;
pub mod reader;
pub mod writer;

pub use error::{Error, Result};
pub use format::DatasetFormat;
pub use reader::{read_dataset, read_dataset_as};
pub use writer::write_dataset;
