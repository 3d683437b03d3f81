use crate::error::{Result, TallyError};
use crate::store::{validate_key, DEFAULT_SLOT_KEY};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for tally, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TallyConfig {
    /// Name of the slot holding the record list
    #[serde(default = "default_slot_key")]
    pub slot_key: String,

    /// Label shown after each quantity (e.g. "Calories")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

fn default_slot_key() -> String {
    DEFAULT_SLOT_KEY.to_string()
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            slot_key: default_slot_key(),
            unit: None,
        }
    }
}

impl TallyConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TallyError::Io)?;
        let config: TallyConfig =
            serde_json::from_str(&content).map_err(TallyError::Serialization)?;
        validate_key(&config.slot_key)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TallyError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TallyError::Serialization)?;
        fs::write(config_path, content).map_err(TallyError::Io)?;
        Ok(())
    }

    /// Set the unit label. An empty value removes it.
    pub fn set_unit(&mut self, unit: &str) {
        let unit = unit.trim();
        self.unit = if unit.is_empty() {
            None
        } else {
            Some(unit.to_string())
        };
    }

    pub fn set_slot_key(&mut self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.slot_key = key.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TallyConfig::default();
        assert_eq!(config.slot_key, "items");
        assert_eq!(config.unit, None);
    }

    #[test]
    fn test_set_unit_trims_and_clears() {
        let mut config = TallyConfig::default();
        config.set_unit(" Calories ");
        assert_eq!(config.unit.as_deref(), Some("Calories"));
        config.set_unit("");
        assert_eq!(config.unit, None);
    }

    #[test]
    fn test_set_slot_key_validates() {
        let mut config = TallyConfig::default();
        config.set_slot_key("meals").unwrap();
        assert_eq!(config.slot_key, "meals");
        assert!(config.set_slot_key("../etc").is_err());
        assert!(matches!(
            config.set_slot_key("config"),
            Err(TallyError::InvalidKey(_))
        ));
        assert_eq!(config.slot_key, "meals");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = TallyConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, TallyConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("nested");

        let mut config = TallyConfig::default();
        config.set_unit("kcal");
        config.save(&dir).unwrap();

        let loaded = TallyConfig::load(&dir).unwrap();
        assert_eq!(loaded.unit.as_deref(), Some("kcal"));
        assert_eq!(loaded.slot_key, "items");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed: TallyConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, TallyConfig::default());
    }

    #[test]
    fn test_load_rejects_bad_slot_key() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"slot_key": "a/b"}"#,
        )
        .unwrap();
        assert!(matches!(
            TallyConfig::load(temp_dir.path()),
            Err(TallyError::InvalidKey(_))
        ));
    }
}
