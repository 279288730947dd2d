//! Generator tables
//!
//! Everything the generator draws from (base catalog, vocabulary, per-category
//! metric ranges and the variation policy) is plain data. The built-in tables
//! ship as `data/catalog.toml` and are parsed at startup; callers can swap in
//! their own tables for tests or alternative catalogs.

use crate::{BaseProduct, Category, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.toml");

/// Complete generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub variation: VariationPolicy,
    pub vocabulary: Vocabulary,
    /// Metric ranges, one entry per category
    pub profiles: Vec<CategoryProfile>,
    /// Base products, emitted first and in this order
    pub catalog: Vec<BaseProduct>,
}

/// Inclusive `[min, max]` bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T> Bounds<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

/// Metric ranges for one category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryProfile {
    pub category: Category,
    /// Click count range
    pub popularity: Bounds<u32>,
    /// Rating range, within [0, 5]
    pub quality: Bounds<f64>,
}

/// Word lists used to decorate variations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(default)]
    pub brands: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub adjectives: Vec<String>,
}

/// Probabilities and shapes of the title/description mutations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariationPolicy {
    /// Chance of prefixing a brand to the title
    pub brand_probability: f64,
    /// Chance of appending a color to title and description
    pub color_probability: f64,
    /// Chance of appending a size/capacity to the description
    pub size_probability: f64,
    /// Chance of appending a model number to the title
    pub model_number_probability: f64,
    /// Distinct adjectives drawn before picking the ones used in the title
    pub adjective_pool: usize,
    /// Adjectives appended to every variation title
    pub adjectives_per_title: usize,
    /// Joins the color to the description, e.g. "na cor azul"
    pub color_phrase: String,
    /// Precedes the model number in the title
    pub model_prefix: String,
    /// Model number range (3 to 4 digits)
    pub model_number: Bounds<u32>,
}

impl Default for VariationPolicy {
    fn default() -> Self {
        Self {
            brand_probability: 0.7,
            color_probability: 0.5,
            size_probability: 0.5,
            model_number_probability: 0.3,
            adjective_pool: 3,
            adjectives_per_title: 2,
            color_phrase: "na cor".to_string(),
            model_prefix: "Modelo".to_string(),
            model_number: Bounds::new(100, 9999),
        }
    }
}

impl GeneratorConfig {
    /// Parse and validate the built-in tables
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Parse and validate tables from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        debug!(
            "Loaded catalog: {} base products, {} profiles",
            config.catalog.len(),
            config.profiles.len()
        );
        Ok(config)
    }

    /// Profile for a category, if configured
    pub fn profile(&self, category: Category) -> Option<&CategoryProfile> {
        self.profiles.iter().find(|p| p.category == category)
    }

    /// Check every table for values the generator cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.catalog.is_empty() {
            return Err(Error::InvalidConfig("catalog has no base products".to_string()));
        }

        for category in Category::ALL {
            let count = self.profiles.iter().filter(|p| p.category == category).count();
            match count {
                1 => {}
                0 => {
                    return Err(Error::InvalidConfig(format!(
                        "missing metric profile for category {}",
                        category
                    )))
                }
                n => {
                    return Err(Error::InvalidConfig(format!(
                        "{} metric profiles for category {}",
                        n, category
                    )))
                }
            }
        }

        for profile in &self.profiles {
            let pop = profile.popularity;
            if pop.min == 0 || pop.min > pop.max {
                return Err(Error::InvalidConfig(format!(
                    "popularity range {}..={} for {} must be positive and ordered",
                    pop.min, pop.max, profile.category
                )));
            }

            let q = profile.quality;
            if !(0.0..=5.0).contains(&q.min) || !(0.0..=5.0).contains(&q.max) || q.min > q.max {
                return Err(Error::InvalidConfig(format!(
                    "quality range {}..={} for {} must be ordered and within 0..=5",
                    q.min, q.max, profile.category
                )));
            }
        }

        self.variation.validate()
    }
}

impl VariationPolicy {
    fn validate(&self) -> Result<()> {
        let probabilities = [
            ("brand_probability", self.brand_probability),
            ("color_probability", self.color_probability),
            ("size_probability", self.size_probability),
            ("model_number_probability", self.model_number_probability),
        ];
        for (name, p) in probabilities {
            if !(0.0..=1.0).contains(&p) {
                return Err(Error::InvalidConfig(format!(
                    "{} must be within 0..=1, got {}",
                    name, p
                )));
            }
        }

        if self.adjectives_per_title > self.adjective_pool {
            return Err(Error::InvalidConfig(format!(
                "adjectives_per_title ({}) exceeds adjective_pool ({})",
                self.adjectives_per_title, self.adjective_pool
            )));
        }

        let model = self.model_number;
        if model.min < 100 || model.max > 9999 || model.min > model.max {
            return Err(Error::InvalidConfig(format!(
                "model_number range {}..={} must be ordered and within 100..=9999",
                model.min, model.max
            )));
        }

        Ok(())
    }
}
