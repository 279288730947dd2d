//! Product records
//!
//! `BaseProduct` is a hand-authored catalog entry. `ProductRecord` is what
//! ends up in the generated dataset, optionally carrying engagement metrics.

use crate::Category;
use serde::{Deserialize, Serialize};

/// A catalog entry used as the seed for variations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseProduct {
    pub title: String,
    pub description: String,
    pub category: Category,
}

/// Simulated engagement metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductMetrics {
    /// Simulated click count
    pub popularity: u32,
    /// Rating in [0, 5], one decimal
    pub quality: f64,
    /// Click-through rate in [0.01, 0.20], three decimals
    pub ctr: f64,
}

/// A single generated product
///
/// Metrics are flattened into the record, so a record without metrics
/// serializes as `{title, description, category}` only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(flatten)]
    pub metrics: Option<ProductMetrics>,
}

impl ProductRecord {
    /// Create a record with no metrics
    pub fn new(title: impl Into<String>, description: impl Into<String>, category: Category) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category,
            metrics: None,
        }
    }

    /// Copy a catalog entry verbatim
    pub fn from_base(base: &BaseProduct) -> Self {
        Self::new(base.title.clone(), base.description.clone(), base.category)
    }

    /// Attach metrics
    pub fn with_metrics(mut self, metrics: ProductMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }
}
