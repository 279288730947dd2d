//! Generator table files
//!
//! The built-in tables can be replaced by a YAML or TOML file with the same
//! shape as `crates/core/data/catalog.toml`.

use anyhow::{Context, Result};
use prodsynth_core::GeneratorConfig;
use std::path::Path;

/// Load and validate generator tables from a file (YAML or TOML)
pub fn load_generator_config(path: &Path) -> Result<GeneratorConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    let config: GeneratorConfig = match extension {
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?,
        "toml" => toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?,
        _ => {
            return Err(anyhow::anyhow!(
                "Unsupported config file format: {}. Use .yaml, .yml, or .toml",
                extension
            ))
        }
    };

    config
        .validate()
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    Ok(config)
}

/// Save generator tables to a file (YAML or TOML)
pub fn save_generator_config(config: &GeneratorConfig, path: &Path) -> Result<()> {
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    let content = match extension {
        "yaml" | "yml" => serde_yaml::to_string(config)?,
        "toml" => toml::to_string_pretty(config)?,
        _ => {
            return Err(anyhow::anyhow!(
                "Unsupported config file format: {}. Use .yaml, .yml, or .toml",
                extension
            ))
        }
    };

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    Ok(())
}
