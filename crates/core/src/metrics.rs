//! Engagement metric sampling
//!
//! Popularity and quality are drawn from per-category ranges. CTR follows
//! quality: a 3.0 rating maps to a 2% base rate and each extra star adds 5
//! points, then the rate is jittered by ±30% and clamped.

use crate::config::CategoryProfile;
use crate::{Category, Error, ProductMetrics, Result};
use rand::Rng;

/// Lower and upper CTR bounds after jitter
pub const CTR_BOUNDS: (f64, f64) = (0.01, 0.20);

const CTR_AT_THREE_STARS: f64 = 0.02;
const CTR_PER_STAR: f64 = 0.05;
const CTR_JITTER: (f64, f64) = (0.7, 1.3);

/// Draws metrics for a category from an explicit RNG
#[derive(Debug, Clone)]
pub struct MetricSampler {
    /// One profile per category, indexed by `Category::index`
    table: Vec<CategoryProfile>,
}

impl MetricSampler {
    /// Build a sampler; every category needs exactly one profile
    pub fn new(profiles: &[CategoryProfile]) -> Result<Self> {
        let table = Category::ALL
            .into_iter()
            .map(|category| {
                profiles
                    .iter()
                    .find(|p| p.category == category)
                    .copied()
                    .ok_or_else(|| {
                        Error::InvalidConfig(format!("missing metric profile for category {}", category))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { table })
    }

    /// Profile used for a category
    pub fn profile(&self, category: Category) -> &CategoryProfile {
        &self.table[category.index()]
    }

    /// Sample popularity, quality and CTR
    ///
    /// The result depends only on the RNG state, so seeding the RNG per
    /// record makes each record reproducible on its own.
    pub fn sample<R: Rng + ?Sized>(&self, category: Category, rng: &mut R) -> ProductMetrics {
        let profile = self.profile(category);

        let popularity = rng.random_range(profile.popularity.min..=profile.popularity.max);
        let quality = round_to(
            rng.random_range(profile.quality.min..=profile.quality.max),
            1,
        );

        let base_ctr = CTR_AT_THREE_STARS + (quality - 3.0) * CTR_PER_STAR;
        let jittered = base_ctr * rng.random_range(CTR_JITTER.0..=CTR_JITTER.1);
        let ctr = round_to(jittered.clamp(CTR_BOUNDS.0, CTR_BOUNDS.1), 3);

        ProductMetrics {
            popularity,
            quality,
            ctr,
        }
    }
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Bounds, GeneratorConfig};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sampler() -> MetricSampler {
        let config = GeneratorConfig::builtin().unwrap();
        MetricSampler::new(&config.profiles).unwrap()
    }

    fn has_at_most_decimals(value: f64, decimals: i32) -> bool {
        (round_to(value, decimals) - value).abs() < 1e-12
    }

    #[test]
    fn test_metrics_within_bounds() {
        let sampler = sampler();
        let mut rng = StdRng::seed_from_u64(7);

        for category in Category::ALL {
            let profile = *sampler.profile(category);
            for _ in 0..500 {
                let m = sampler.sample(category, &mut rng);
                assert!(m.popularity >= profile.popularity.min);
                assert!(m.popularity <= profile.popularity.max);
                assert!((0.0..=5.0).contains(&m.quality));
                assert!(m.ctr >= CTR_BOUNDS.0 && m.ctr <= CTR_BOUNDS.1, "ctr {}", m.ctr);
                assert!(has_at_most_decimals(m.quality, 1));
                assert!(has_at_most_decimals(m.ctr, 3));
            }
        }
    }

    #[test]
    fn test_same_seed_same_metrics() {
        let sampler = sampler();
        let a = sampler.sample(Category::Fashion, &mut StdRng::seed_from_u64(11));
        let b = sampler.sample(Category::Fashion, &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn test_ctr_tracks_quality() {
        // A degenerate quality range pins quality, so CTR only varies by jitter.
        let mut config = GeneratorConfig::builtin().unwrap();
        for profile in &mut config.profiles {
            profile.quality = Bounds::new(5.0, 5.0);
        }
        let high = MetricSampler::new(&config.profiles).unwrap();
        for profile in &mut config.profiles {
            profile.quality = Bounds::new(3.0, 3.0);
        }
        let low = MetricSampler::new(&config.profiles).unwrap();

        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let h = high.sample(Category::Home, &mut rng);
            assert_eq!(h.quality, 5.0);
            // 0.12 * [0.7, 1.3] spans 0.084..=0.156
            assert!(h.ctr >= 0.084 && h.ctr <= 0.156, "ctr {}", h.ctr);

            let l = low.sample(Category::Home, &mut rng);
            // 0.02 * [0.7, 1.3] spans 0.014..=0.026
            assert!(l.ctr >= 0.014 && l.ctr <= 0.026, "ctr {}", l.ctr);
        }
    }

    #[test]
    fn test_ctr_clamped_low() {
        let mut config = GeneratorConfig::builtin().unwrap();
        for profile in &mut config.profiles {
            profile.quality = Bounds::new(0.0, 0.0);
        }
        let sampler = MetricSampler::new(&config.profiles).unwrap();

        let m = sampler.sample(Category::Food, &mut StdRng::seed_from_u64(0));
        assert_eq!(m.ctr, CTR_BOUNDS.0);
    }

    #[test]
    fn test_missing_profile() {
        let config = GeneratorConfig::builtin().unwrap();
        let result = MetricSampler::new(&config.profiles[..5]);
        assert!(result.is_err());
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(4.26, 1), 4.3);
        assert_eq!(round_to(0.12345, 3), 0.123);
        assert_eq!(round_to(3.0, 1), 3.0);
    }
}
