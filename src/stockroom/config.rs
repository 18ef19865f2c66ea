use crate::error::{Result, StockroomError};
use crate::store::fs::DEFAULT_DATA_FILE;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

pub const CONFIG_DIR_ENV: &str = "STOCKROOM_CONFIG_DIR";
pub const DATA_FILE_ENV: &str = "STOCKROOM_FILE";

/// Configuration for stockroom, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StockroomConfig {
    /// Where the product catalog lives. Relative paths resolve against the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl StockroomConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StockroomError::Io)?;
        let config: StockroomConfig =
            serde_json::from_str(&content).map_err(StockroomError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StockroomError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StockroomError::Serialization)?;
        fs::write(config_path, content).map_err(StockroomError::Io)?;
        Ok(())
    }

    /// The configured data file, or `products.json` in the working directory.
    pub fn data_file(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }

    pub fn set_data_file(&mut self, path: impl Into<PathBuf>) {
        self.data_file = Some(path.into());
    }

    /// Value of a user-facing config key, as text.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file().display().to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err("data-file cannot be empty".to_string());
                }
                self.set_data_file(value);
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

/// Platform config directory, unless `STOCKROOM_CONFIG_DIR` points elsewhere.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "stockroom", "stockroom").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Picks the data file: explicit flag, then `STOCKROOM_FILE`, then the config file.
pub fn resolve_data_file(
    flag: Option<PathBuf>,
    env: Option<PathBuf>,
    config: &StockroomConfig,
) -> PathBuf {
    flag.or(env).unwrap_or_else(|| config.data_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = StockroomConfig::default();
        assert_eq!(config.data_file(), PathBuf::from("products.json"));
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = StockroomConfig::load(temp_dir.path().join("absent")).unwrap();
        assert_eq!(config, StockroomConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_dir = temp_dir.path().join("stockroom");

        let mut config = StockroomConfig::default();
        config.set_data_file("/srv/inventory/products.json");
        config.save(&config_dir).unwrap();

        let loaded = StockroomConfig::load(&config_dir).unwrap();
        assert_eq!(
            loaded.data_file(),
            PathBuf::from("/srv/inventory/products.json")
        );
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "data_file = 1").unwrap();
        assert!(StockroomConfig::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_get_and_set_keys() {
        let mut config = StockroomConfig::default();
        assert_eq!(config.get("data-file").as_deref(), Some("products.json"));
        assert_eq!(config.get("colour"), None);

        config.set("data-file", " stock/items.json ").unwrap();
        assert_eq!(config.data_file(), PathBuf::from("stock/items.json"));
        assert!(config.set("data-file", "  ").is_err());
        assert!(config.set("colour", "red").is_err());
    }

    #[test]
    fn test_resolution_order() {
        let mut config = StockroomConfig::default();
        config.set_data_file("from-config.json");

        let flag = Some(PathBuf::from("from-flag.json"));
        let env = Some(PathBuf::from("from-env.json"));

        assert_eq!(
            resolve_data_file(flag.clone(), env.clone(), &config),
            PathBuf::from("from-flag.json")
        );
        assert_eq!(
            resolve_data_file(None, env, &config),
            PathBuf::from("from-env.json")
        );
        assert_eq!(
            resolve_data_file(None, None, &config),
            PathBuf::from("from-config.json")
        );
        assert_eq!(
            resolve_data_file(None, None, &StockroomConfig::default()),
            PathBuf::from("products.json")
        );
    }
}
