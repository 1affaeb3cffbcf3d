use crate::error::{MunduaError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SEED_SOURCE: &str = "countries.json";
const DEFAULT_PHOTO_LIMIT: usize = 5;
const DEFAULT_PHOTO_WIDTH: u32 = 800;
const DEFAULT_PHOTO_QUALITY: u8 = 50;

/// Configuration for mundua, stored next to the data as config.json.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MunduaConfig {
    /// Where the bootstrap seed comes from: a local file path or a URL
    #[serde(default = "default_seed_source")]
    pub seed_source: String,

    /// Photo cap per country; a push at the cap drops the incoming photo
    #[serde(default = "default_photo_limit")]
    pub photo_limit: usize,

    /// Target width stored photos are rescaled to
    #[serde(default = "default_photo_width")]
    pub photo_width: u32,

    /// JPEG quality factor for stored photos (0-100)
    #[serde(default = "default_photo_quality")]
    pub photo_quality: u8,
}

fn default_seed_source() -> String {
    DEFAULT_SEED_SOURCE.to_string()
}

fn default_photo_limit() -> usize {
    DEFAULT_PHOTO_LIMIT
}

fn default_photo_width() -> u32 {
    DEFAULT_PHOTO_WIDTH
}

fn default_photo_quality() -> u8 {
    DEFAULT_PHOTO_QUALITY
}

impl Default for MunduaConfig {
    fn default() -> Self {
        Self {
            seed_source: default_seed_source(),
            photo_limit: DEFAULT_PHOTO_LIMIT,
            photo_width: DEFAULT_PHOTO_WIDTH,
            photo_quality: DEFAULT_PHOTO_QUALITY,
        }
    }
}

impl MunduaConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MunduaError::Io)?;
        let config: MunduaConfig =
            serde_json::from_str(&content).map_err(MunduaError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MunduaError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(MunduaError::Serialization)?;
        fs::write(config_path, content).map_err(MunduaError::Io)?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["seed-source", "photo-limit", "photo-width", "photo-quality"]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "seed-source" => Some(self.seed_source.clone()),
            "photo-limit" => Some(self.photo_limit.to_string()),
            "photo-width" => Some(self.photo_width.to_string()),
            "photo-quality" => Some(self.photo_quality.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "seed-source" => self.seed_source = value.to_string(),
            "photo-limit" => self.photo_limit = parse_number(key, value)?,
            "photo-width" => self.photo_width = parse_number(key, value)?,
            "photo-quality" => {
                let quality: u8 = parse_number(key, value)?;
                if quality > 100 {
                    return Err(MunduaError::Api(
                        "photo-quality must be between 0 and 100".to_string(),
                    ));
                }
                self.photo_quality = quality;
            }
            _ => {
                return Err(MunduaError::Api(format!("Unknown config key: {}", key)));
            }
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| MunduaError::Api(format!("Invalid value for {}: {}", key, value)))
}
