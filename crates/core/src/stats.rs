//! Dataset statistics
//!
//! Category distribution and metric averages, as printed after generation and
//! by `inspect`.

use crate::{Category, ProductRecord};
use serde::Serialize;
use std::collections::BTreeMap;

/// Summary of a dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetStats {
    pub total: usize,
    /// One entry per category present, sorted by category label
    pub categories: Vec<CategoryShare>,
    /// Means over records that carry metrics; `None` when none do
    pub averages: Option<MetricAverages>,
}

/// Count and share of one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: Category,
    pub count: usize,
    /// Percentage of the dataset, 0 to 100
    pub percentage: f64,
}

/// Arithmetic means of the engagement metrics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricAverages {
    pub popularity: f64,
    pub quality: f64,
    pub ctr: f64,
    /// Number of records the means were taken over
    pub records: usize,
}

impl DatasetStats {
    /// Compute statistics in one pass over the records
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ProductRecord>,
    {
        let mut total = 0usize;
        let mut counts: BTreeMap<Category, usize> = BTreeMap::new();
        let mut with_metrics = 0usize;
        let mut popularity_sum = 0.0;
        let mut quality_sum = 0.0;
        let mut ctr_sum = 0.0;

        for record in records {
            total += 1;
            *counts.entry(record.category).or_insert(0) += 1;

            if let Some(m) = record.metrics {
                with_metrics += 1;
                popularity_sum += m.popularity as f64;
                quality_sum += m.quality;
                ctr_sum += m.ctr;
            }
        }

        let categories = counts
            .into_iter()
            .map(|(category, count)| CategoryShare {
                category,
                count,
                percentage: (count as f64 / total as f64) * 100.0,
            })
            .collect();

        let averages = (with_metrics > 0).then(|| {
            let n = with_metrics as f64;
            MetricAverages {
                popularity: popularity_sum / n,
                quality: quality_sum / n,
                ctr: ctr_sum / n,
                records: with_metrics,
            }
        });

        Self {
            total,
            categories,
            averages,
        }
    }
}
