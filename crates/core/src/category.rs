//! Product categories
//!
//! The category set is closed. Labels are the Portuguese names used by the
//! downstream search index and are what appears in serialized records.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product category
///
/// Variants are declared in label order, so the derived `Ord` sorts
/// categories the same way their labels sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Alimentos")]
    Food,
    #[serde(rename = "Casa")]
    Home,
    #[serde(rename = "Eletrônicos")]
    Electronics,
    #[serde(rename = "Esportes")]
    Sports,
    #[serde(rename = "Livros")]
    Books,
    #[serde(rename = "Moda")]
    Fashion,
}

impl Category {
    /// Every category, in label order
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Home,
        Category::Electronics,
        Category::Sports,
        Category::Books,
        Category::Fashion,
    ];

    /// Label as written in datasets and reports
    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Alimentos",
            Category::Home => "Casa",
            Category::Electronics => "Eletrônicos",
            Category::Sports => "Esportes",
            Category::Books => "Livros",
            Category::Fashion => "Moda",
        }
    }

    /// Position in [`Category::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}
