//! Dataset assembly
//!
//! The dataset starts with every base product in catalog order, then
//! continues with variations of randomly chosen base products. All
//! randomness comes from RNGs derived from a single master seed:
//!
//! - base record `i` samples its metrics from stream `i`
//! - the variation at position `i` decorates its text from stream `i` and
//!   samples its metrics from stream `i + METRICS_SEED_OFFSET`
//! - the choice of which base product to vary comes from a dedicated
//!   selection stream
//!
//! A record therefore depends only on its position and the master seed, and
//! a dataset of `n` records is a prefix of every larger dataset.
//!
//! The streams are not disjoint: the variation at position `p +
//! METRICS_SEED_OFFSET` decorates its text from the same stream that position
//! `p` samples its metrics from. Both RNGs are fresh per record, so the
//! overlap correlates those two draws without breaking reproducibility.

use crate::config::GeneratorConfig;
use crate::metrics::MetricSampler;
use crate::variation::VariationGenerator;
use crate::{ProductRecord, Result};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Record count used when none is requested
pub const DEFAULT_QUANTITY: usize = 1000;

/// Master seed used when none is given
pub const DEFAULT_SEED: u64 = 42;

/// Offset between a variation's text stream and its metrics stream
pub const METRICS_SEED_OFFSET: u64 = 1000;

const SELECTION_STREAM: u64 = u64::MAX;

/// Which fields generated records carry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schema {
    /// title, description, category, popularity, quality, ctr
    #[default]
    Metrics,
    /// title, description, category
    Basic,
}

/// Derive the RNG for one stream of a master seed
pub fn stream_rng(seed: u64, stream: u64) -> StdRng {
    StdRng::seed_from_u64(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ stream)
}

/// Generates product datasets from a validated configuration
#[derive(Debug, Clone)]
pub struct DatasetGenerator {
    config: GeneratorConfig,
    sampler: MetricSampler,
    schema: Schema,
    seed: u64,
}

impl DatasetGenerator {
    /// Create a generator; fails if the configuration is invalid
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let sampler = MetricSampler::new(&config.profiles)?;

        Ok(Self {
            config,
            sampler,
            schema: Schema::default(),
            seed: DEFAULT_SEED,
        })
    }

    /// Generator over the built-in tables
    pub fn builtin() -> Result<Self> {
        Self::new(GeneratorConfig::builtin()?)
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn schema(&self) -> Schema {
        self.schema
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of base products emitted before any variation
    pub fn catalog_len(&self) -> usize {
        self.config.catalog.len()
    }

    /// Unbounded stream of records
    pub fn stream(&self) -> DatasetStream<'_> {
        DatasetStream {
            generator: self,
            selector: stream_rng(self.seed, SELECTION_STREAM),
            position: 0,
        }
    }

    /// Generate exactly `quantity` records
    pub fn generate(&self, quantity: usize) -> Vec<ProductRecord> {
        info!(
            "Generating {} records (schema: {:?}, seed: {})",
            quantity, self.schema, self.seed
        );

        let records: Vec<_> = self.stream().take(quantity).collect();

        debug!(
            "Generated {} base records and {} variations",
            records.len().min(self.catalog_len()),
            records.len().saturating_sub(self.catalog_len())
        );
        records
    }
}

/// Iterator over generated records
///
/// Yields the catalog first, then variations forever.
pub struct DatasetStream<'a> {
    generator: &'a DatasetGenerator,
    selector: StdRng,
    position: usize,
}

impl DatasetStream<'_> {
    /// Position of the next record
    pub fn position(&self) -> usize {
        self.position
    }
}

impl Iterator for DatasetStream<'_> {
    type Item = ProductRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let generator = self.generator;
        let catalog = &generator.config.catalog;
        let seed = generator.seed;
        let stream = self.position as u64;

        let (record, metrics_stream) = match catalog.get(self.position) {
            Some(base) => (ProductRecord::from_base(base), stream),
            None => {
                let base = catalog.choose(&mut self.selector)?;
                let variations = VariationGenerator::new(
                    &generator.config.vocabulary,
                    &generator.config.variation,
                );
                let record = variations.vary(base, &mut stream_rng(seed, stream));
                (record, stream + METRICS_SEED_OFFSET)
            }
        };

        let record = match generator.schema {
            Schema::Metrics => {
                let metrics = generator
                    .sampler
                    .sample(record.category, &mut stream_rng(seed, metrics_stream));
                record.with_metrics(metrics)
            }
            Schema::Basic => record,
        };

        self.position += 1;
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.generator.config.catalog.is_empty() {
            (0, Some(0))
        } else {
            (usize::MAX, None)
        }
    }
}
