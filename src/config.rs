use crate::error::{Error, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "chasmsweeper";
const CONFIG_FILE: &str = "config.toml";

/// Largest accepted `grid_size`.
pub const MAX_GRID_SIZE: usize = 64;

/// Who answers "what was in this cell".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OracleMode {
    /// A person types what they dug up.
    #[default]
    Interactive,
    /// A randomly generated board answers by itself.
    Simulated,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    pub grid_size: usize,
    pub oracle: OracleMode,
    /// Only used by the simulated oracle.
    pub mines: usize,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            grid_size: 5,
            oracle: OracleMode::Interactive,
            mines: 5,
        }
    }
}

impl GlobalConfig {
    pub fn path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or(Error::ConfigDirNotFound)?;
        Ok(dir.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.to_string_lossy());
        let config = Self::from_toml(&fs::read_to_string(path)?)?;
        info!("Loaded config: {config:?}");
        Ok(config)
    }

    /// Loads the config at `path`, writing the defaults there only if no file exists yet.
    ///
    /// A file that fails to parse or validate is left untouched and the defaults are used for this run.
    pub fn load_or_init(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(Error::IO(e)) if e.kind() == ErrorKind::NotFound => {
                info!("No config at {}, writing defaults", path.to_string_lossy());
                let config = Self::default();
                if let Err(e) = config.save_to(path) {
                    warn!("Failed to write default config: {e}");
                }
                config
            },
            Err(e) => {
                warn!("Failed to load config ({e}), using default config.");
                Self::default()
            },
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        debug!("Saved config to {}", path.to_string_lossy());
        Ok(())
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(Error::InvalidConfig("grid_size must be at least 1".to_string()));
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(Error::InvalidConfig(format!(
                "grid_size {} is larger than {MAX_GRID_SIZE}",
                self.grid_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let config = GlobalConfig::from_toml("oracle = \"simulated\"").unwrap();
        assert_eq!(config.grid_size, 5);
        assert_eq!(config.mines, 5);
        assert_eq!(config.oracle, OracleMode::Simulated);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = GlobalConfig {
            grid_size: 7,
            oracle: OracleMode::Simulated,
            mines: 9,
        };
        let text = config.to_toml().unwrap();
        assert_eq!(GlobalConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_config() {
        match GlobalConfig::from_toml("grid_size = 0") {
            Err(Error::InvalidConfig(_)) => {},
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
        match GlobalConfig::from_toml("oracle = \"psychic\"") {
            Err(Error::TomlDeserialize(_)) => {},
            other => panic!("Expected TomlDeserialize, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_oversized_grid() {
        for text in ["grid_size = 4294967296", "grid_size = 65"] {
            match GlobalConfig::from_toml(text) {
                Err(Error::InvalidConfig(_)) => {},
                other => panic!("Expected InvalidConfig for {text:?}, got {:?}", other),
            }
        }
        assert_eq!(GlobalConfig::from_toml("grid_size = 64").unwrap().grid_size, MAX_GRID_SIZE);
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("chasmsweeper-{}-{name}", std::process::id()));
        _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_load_or_init_keeps_broken_file() {
        let dir = scratch_dir("broken");
        let path = dir.join(CONFIG_FILE);
        let text = "grid_size = 7\noracle = \"simulatd\"\nmines = 9\n";
        fs::create_dir_all(&dir).unwrap();
        fs::write(&path, text).unwrap();

        assert_eq!(GlobalConfig::load_or_init(&path), GlobalConfig::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), text);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_or_init_writes_missing_file() {
        let dir = scratch_dir("missing");
        let path = dir.join(CONFIG_FILE);

        assert_eq!(GlobalConfig::load_or_init(&path), GlobalConfig::default());
        assert_eq!(GlobalConfig::load_from(&path).unwrap(), GlobalConfig::default());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_or_init_reads_existing_file() {
        let dir = scratch_dir("existing");
        let path = dir.join(CONFIG_FILE);
        let config = GlobalConfig {
            grid_size: 6,
            oracle: OracleMode::Simulated,
            mines: 4,
        };
        config.save_to(&path).unwrap();

        assert_eq!(GlobalConfig::load_or_init(&path), config);

        fs::remove_dir_all(&dir).unwrap();
    }
}
