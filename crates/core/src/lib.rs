//! Synthetic product catalog generation
//!
//! This crate builds fixture datasets of product listings for exercising
//! semantic search: a hand-authored base catalog, randomized variations of
//! it, simulated engagement metrics, and summary statistics.

pub mod category;
pub mod config;
pub mod dataset;
pub mod error;
pub mod metrics;
pub mod record;
pub mod stats;
pub mod variation;

pub use category::Category;
pub use config::GeneratorConfig;
pub use dataset::{DatasetGenerator, DatasetStream, Schema, DEFAULT_QUANTITY, DEFAULT_SEED};
pub use error::{Error, Result};
pub use record::{BaseProduct, ProductMetrics, ProductRecord};
pub use stats::DatasetStats;
