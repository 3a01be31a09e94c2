use filemeta_common::paths::image_extensions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub classifier: ClassifierConfig,

    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassifierConfig {
    /// Extensions (without the leading dot) treated as images
    #[serde(default = "default_image_extensions")]
    pub image_extensions: Vec<String>,
}

fn default_image_extensions() -> Vec<String> {
    image_extensions().iter().map(|ext| ext.to_string()).collect()
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            image_extensions: default_image_extensions(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Decode images to report their EXIF orientation (default: true)
    #[serde(default = "default_read_orientation")]
    pub read_orientation: bool,
}

fn default_read_orientation() -> bool {
    true
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            read_orientation: default_read_orientation(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,
}
