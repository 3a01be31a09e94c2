mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = ["./filemeta.toml", "~/.config/filemeta/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!(path = %path.display(), "Using config file");
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.classifier.image_extensions.is_empty() {
        tracing::warn!("No image extensions configured; content thumbnails are disabled");
    }

    for ext in &config.classifier.image_extensions {
        if ext.trim().is_empty() {
            anyhow::bail!("Image extensions cannot be empty");
        }
        if ext.starts_with('.') {
            anyhow::bail!("Image extension '{}' must not start with a dot", ext);
        }
    }

    Ok(())
}
