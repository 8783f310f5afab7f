use crate::error::{PairzError, Result};
use crate::store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

const CONFIG_FILENAME: &str = "config.json";
const MAX_KEY_LEN: usize = 64;

/// Keys accepted by [`PairzConfig::get`] and [`PairzConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["storage-key"];

/// Configuration for pairz, stored in .pairz/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PairzConfig {
    /// Key the pair list is stored under (the blob file is `<key>.json`)
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for PairzConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl PairzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PairzError::Io)?;
        let config: PairzConfig =
            serde_json::from_str(&content).map_err(PairzError::Serialization)?;
        validate_storage_key(&config.storage_key).map_err(PairzError::Config)?;
        debug!(path = %config_path.display(), "config loaded");
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PairzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PairzError::Serialization)?;
        fs::write(config_path, content).map_err(PairzError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "storage-key" => {
                validate_storage_key(value)?;
                self.storage_key = value.to_string();
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

/// Storage keys become file names, so they are kept to a safe alphabet:
/// 1 to 64 characters of ASCII letters, digits, `-` and `_`, not starting with `-`.
fn validate_storage_key(key: &str) -> std::result::Result<(), String> {
    if key.is_empty() {
        return Err("storage-key cannot be empty".to_string());
    }
    if key.len() > MAX_KEY_LEN {
        return Err(format!(
            "storage-key is too long ({} characters, max {})",
            key.len(),
            MAX_KEY_LEN
        ));
    }
    if key.starts_with('-') {
        return Err("storage-key cannot start with '-'".to_string());
    }
    if let Some(ch) = key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(format!(
            "storage-key contains invalid character '{}' (only alphanumeric, '-' and '_' allowed)",
            ch
        ));
    }
    Ok(())
}
