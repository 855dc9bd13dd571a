//! # Configuration
//!
//! Stored as `config.json` inside the data directory. Every field has a serde
//! default, so a missing file or a partial one both load cleanly.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `products_file` | `products.json` | Collection file, relative to the data dir or absolute |
//! | `id_policy` | `count` | `count` or `max-plus-one` |
//! | `pretty` | `false` | Write the collection indented |

use crate::error::Result;
use crate::store::IdPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PRODUCTS_FILE: &str = "products.json";

/// Keys accepted by [`CatalogConfig::get`] and [`CatalogConfig::set`].
pub const KEYS: [&str; 3] = ["products_file", "id_policy", "pretty"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    #[serde(default = "default_products_file")]
    pub products_file: String,

    #[serde(default)]
    pub id_policy: IdPolicy,

    #[serde(default)]
    pub pretty: bool,
}

fn default_products_file() -> String {
    DEFAULT_PRODUCTS_FILE.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            products_file: default_products_file(),
            id_policy: IdPolicy::default(),
            pretty: false,
        }
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_lowercase().replace('-', "_")
}

impl CatalogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: CatalogConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Where the collection lives for a given data directory.
    pub fn products_path(&self, data_dir: &Path) -> PathBuf {
        let file = Path::new(&self.products_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            data_dir.join(file)
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match normalize_key(key).as_str() {
            "products_file" => Some(self.products_file.clone()),
            "id_policy" => Some(self.id_policy.to_string()),
            "pretty" => Some(self.pretty.to_string()),
            _ => None,
        }
    }

    /// Set a key from its textual form. The error is a user-facing message.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match normalize_key(key).as_str() {
            "products_file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err("products_file must not be empty".to_string());
                }
                self.products_file = value.to_string();
            }
            "id_policy" => self.id_policy = value.parse()?,
            "pretty" => {
                self.pretty = match value.trim().to_ascii_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    other => return Err(format!("invalid boolean '{}'", other)),
                }
            }
            _ => {
                return Err(format!(
                    "Unknown config key: {} (known keys: {})",
                    key,
                    KEYS.join(", ")
                ))
            }
        }
        Ok(())
    }
}
