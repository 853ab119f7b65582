use crate::error::{HubError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PUBLIC_FOLDER: &str = "PUBLIC";
const DEFAULT_NOTES_FOLDER: &str = "Notes";

/// Configuration for notehub, stored in .notehub/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HubConfig {
    /// Folder published notes are moved into
    #[serde(default = "default_public_folder")]
    pub public_folder: String,

    /// Folder unpublished notes are moved back into
    #[serde(default = "default_notes_folder")]
    pub notes_folder: String,

    /// Header fields a note must carry before it may be published.
    /// May be empty (no field required).
    #[serde(default = "default_required_fields")]
    pub required_fields: Vec<String>,
}

fn default_public_folder() -> String {
    DEFAULT_PUBLIC_FOLDER.to_string()
}

fn default_notes_folder() -> String {
    DEFAULT_NOTES_FOLDER.to_string()
}

fn default_required_fields() -> Vec<String> {
    vec!["categories".to_string()]
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            public_folder: default_public_folder(),
            notes_folder: default_notes_folder(),
            required_fields: default_required_fields(),
        }
    }
}

impl HubConfig {
    /// Load config from the given directory, or return defaults if not found.
    /// Stored keys win over defaults; missing keys fall back per-key.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(HubError::Io)?;
        let config: HubConfig =
            serde_json::from_str(&content).map_err(HubError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(HubError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(HubError::Serialization)?;
        fs::write(config_path, content).map_err(HubError::Io)?;
        Ok(())
    }

    /// Set the public folder; blank input resets to the default.
    pub fn set_public_folder(&mut self, value: &str) {
        let value = value.trim();
        self.public_folder = if value.is_empty() {
            default_public_folder()
        } else {
            value.to_string()
        };
    }

    /// Set the notes folder; blank input resets to the default.
    pub fn set_notes_folder(&mut self, value: &str) {
        let value = value.trim();
        self.notes_folder = if value.is_empty() {
            default_notes_folder()
        } else {
            value.to_string()
        };
    }

    /// Parse a comma-separated field list: trims whitespace, drops empty
    /// tokens, keeps order and duplicates.
    pub fn set_required_fields(&mut self, value: &str) {
        self.required_fields = value
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HubConfig::default();
        assert_eq!(config.public_folder, "PUBLIC");
        assert_eq!(config.notes_folder, "Notes");
        assert_eq!(config.required_fields, vec!["categories"]);
    }

    #[test]
    fn test_blank_folder_resets_to_default() {
        let mut config = HubConfig::default();
        config.set_public_folder("Shared");
        assert_eq!(config.public_folder, "Shared");

        config.set_public_folder("");
        assert_eq!(config.public_folder, "PUBLIC");

        config.set_notes_folder("   ");
        assert_eq!(config.notes_folder, "Notes");
    }

    #[test]
    fn test_required_fields_parsing() {
        let mut config = HubConfig::default();
        config.set_required_fields("a, b ,");
        assert_eq!(config.required_fields, vec!["a", "b"]);
    }

    #[test]
    fn test_required_fields_keeps_duplicates_and_order() {
        let mut config = HubConfig::default();
        config.set_required_fields("tags, categories, tags");
        assert_eq!(config.required_fields, vec!["tags", "categories", "tags"]);
    }

    #[test]
    fn test_required_fields_may_be_empty() {
        let mut config = HubConfig::default();
        config.set_required_fields(" , ,");
        assert!(config.required_fields.is_empty());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = HubConfig::load(temp_dir.path().join("absent")).unwrap();
        assert_eq!(config, HubConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut config = HubConfig::default();
        config.set_public_folder("Shared");
        config.set_required_fields("categories, owner");
        config.save(temp_dir.path()).unwrap();

        let loaded = HubConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.public_folder, "Shared");
        assert_eq!(loaded.required_fields, vec!["categories", "owner"]);
    }

    #[test]
    fn test_partial_blob_falls_back_per_key() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            temp_dir.path().join("config.json"),
            r#"{"public_folder": "Shared"}"#,
        )
        .unwrap();

        let loaded = HubConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.public_folder, "Shared");
        assert_eq!(loaded.notes_folder, "Notes");
        assert_eq!(loaded.required_fields, vec!["categories"]);
    }
}
