//! Product variations
//!
//! A variation keeps the base product's category and decorates its title and
//! description with brand, color, size, adjective and model-number tokens.

use crate::config::{VariationPolicy, Vocabulary};
use crate::{BaseProduct, ProductRecord};
use rand::seq::{index, IndexedRandom};
use rand::Rng;

/// Derives decorated records from base products
#[derive(Debug, Clone, Copy)]
pub struct VariationGenerator<'a> {
    vocabulary: &'a Vocabulary,
    policy: &'a VariationPolicy,
}

impl<'a> VariationGenerator<'a> {
    pub fn new(vocabulary: &'a Vocabulary, policy: &'a VariationPolicy) -> Self {
        Self { vocabulary, policy }
    }

    /// Build one variation of `base`
    ///
    /// Decorations are decided in a fixed order (brand, color, size,
    /// adjectives, model number) so a given RNG state always yields the
    /// same record. The returned record has no metrics.
    pub fn vary<R: Rng + ?Sized>(&self, base: &BaseProduct, rng: &mut R) -> ProductRecord {
        let mut title = base.title.clone();
        let mut description = base.description.clone();

        if rng.random_bool(self.policy.brand_probability) {
            if let Some(brand) = self.vocabulary.brands.choose(rng) {
                title = format!("{} {}", brand, title);
            }
        }

        if rng.random_bool(self.policy.color_probability) {
            if let Some(color) = self.vocabulary.colors.choose(rng) {
                title.push(' ');
                title.push_str(color);
                description.push_str(&format!(
                    " {} {}",
                    self.policy.color_phrase,
                    color.to_lowercase()
                ));
            }
        }

        if rng.random_bool(self.policy.size_probability) {
            if let Some(size) = self.vocabulary.sizes.choose(rng) {
                description.push_str(" - ");
                description.push_str(size);
            }
        }

        for adjective in self.pick_adjectives(rng) {
            title.push(' ');
            title.push_str(adjective);
        }

        if rng.random_bool(self.policy.model_number_probability) {
            let model = rng.random_range(self.policy.model_number.min..=self.policy.model_number.max);
            title.push_str(&format!(" {} {}", self.policy.model_prefix, model));
        }

        ProductRecord::new(title, description, base.category)
    }

    /// Draw a pool of distinct adjectives, then the ones that go in the title
    fn pick_adjectives<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&'a str> {
        let vocabulary: &'a Vocabulary = self.vocabulary;
        let adjectives = &vocabulary.adjectives;
        let pool_size = self.policy.adjective_pool.min(adjectives.len());
        if pool_size == 0 {
            return Vec::new();
        }

        let pool = index::sample(rng, adjectives.len(), pool_size);
        let take = self.policy.adjectives_per_title.min(pool.len());

        index::sample(rng, pool.len(), take)
            .iter()
            .map(|i| adjectives[pool.index(i)].as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::Category;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn base() -> BaseProduct {
        BaseProduct {
            title: "Mouse".to_string(),
            description: "Mouse sem fio ergonômico".to_string(),
            category: Category::Electronics,
        }
    }

    fn vocabulary() -> Vocabulary {
        Vocabulary {
            brands: vec!["Logitech".to_string()],
            colors: vec!["Azul".to_string()],
            sizes: vec!["GG".to_string()],
            adjectives: vec!["Pro".to_string(), "Max".to_string(), "Lite".to_string()],
        }
    }

    fn always() -> VariationPolicy {
        VariationPolicy {
            brand_probability: 1.0,
            color_probability: 1.0,
            size_probability: 1.0,
            model_number_probability: 1.0,
            ..VariationPolicy::default()
        }
    }

    fn never() -> VariationPolicy {
        VariationPolicy {
            brand_probability: 0.0,
            color_probability: 0.0,
            size_probability: 0.0,
            model_number_probability: 0.0,
            adjectives_per_title: 0,
            ..VariationPolicy::default()
        }
    }

    #[test]
    fn test_all_decorations() {
        let vocabulary = vocabulary();
        let policy = always();
        let generator = VariationGenerator::new(&vocabulary, &policy);

        let record = generator.vary(&base(), &mut StdRng::seed_from_u64(1));

        assert!(record.title.starts_with("Logitech Mouse Azul "));
        assert!(record.title.contains(" Modelo "));
        assert_eq!(record.description, "Mouse sem fio ergonômico na cor azul - GG");
        assert_eq!(record.category, Category::Electronics);
        assert!(record.metrics.is_none());

        let model: u32 = record.title.rsplit(' ').next().unwrap().parse().unwrap();
        assert!((100..=9999).contains(&model));
    }

    #[test]
    fn test_two_distinct_adjectives() {
        let vocabulary = vocabulary();
        let policy = never();
        let policy = VariationPolicy {
            adjectives_per_title: 2,
            ..policy
        };
        let generator = VariationGenerator::new(&vocabulary, &policy);

        for seed in 0..50 {
            let record = generator.vary(&base(), &mut StdRng::seed_from_u64(seed));
            let words: Vec<&str> = record.title.split(' ').collect();
            assert_eq!(words.len(), 3, "title {:?}", record.title);
            assert_eq!(words[0], "Mouse");
            assert_ne!(words[1], words[2]);
            assert!(vocabulary.adjectives.iter().any(|a| a == words[1]));
            assert!(vocabulary.adjectives.iter().any(|a| a == words[2]));
            assert_eq!(record.description, "Mouse sem fio ergonômico");
        }
    }

    #[test]
    fn test_single_adjective_vocabulary() {
        let vocabulary = Vocabulary {
            adjectives: vec!["Ultra".to_string()],
            ..Vocabulary::default()
        };
        let policy = VariationPolicy {
            adjectives_per_title: 2,
            ..never()
        };
        let generator = VariationGenerator::new(&vocabulary, &policy);

        let record = generator.vary(&base(), &mut StdRng::seed_from_u64(5));
        assert_eq!(record.title, "Mouse Ultra");
    }

    #[test]
    fn test_empty_vocabulary_leaves_text() {
        let vocabulary = Vocabulary::default();
        let policy = VariationPolicy {
            model_number_probability: 0.0,
            ..always()
        };
        let generator = VariationGenerator::new(&vocabulary, &policy);

        let record = generator.vary(&base(), &mut StdRng::seed_from_u64(9));
        assert_eq!(record.title, "Mouse");
        assert_eq!(record.description, "Mouse sem fio ergonômico");
    }

    #[test]
    fn test_same_seed_same_variation() {
        let config = GeneratorConfig::builtin().unwrap();
        let generator = VariationGenerator::new(&config.vocabulary, &config.variation);

        let a = generator.vary(&config.catalog[3], &mut StdRng::seed_from_u64(120));
        let b = generator.vary(&config.catalog[3], &mut StdRng::seed_from_u64(120));
        assert_eq!(a, b);
    }

    #[test]
    fn test_builtin_policy_keeps_base_title() {
        let config = GeneratorConfig::builtin().unwrap();
        let generator = VariationGenerator::new(&config.vocabulary, &config.variation);

        for seed in 0..200 {
            let base = &config.catalog[(seed as usize) % config.catalog.len()];
            let record = generator.vary(base, &mut StdRng::seed_from_u64(seed));
            assert!(record.title.contains(&base.title));
            assert!(record.description.starts_with(&base.description));
            assert_eq!(record.category, base.category);
        }
    }
}
