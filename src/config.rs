use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::ui::theme::DEFAULT_THEME;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Custom deck file (.toml or .json). The bundled deck is used when unset.
    #[serde(default)]
    pub deck_path: Option<String>,
    #[serde(default = "default_start_presentation")]
    pub start_presentation: bool,
    #[serde(default = "default_sidebar_open")]
    pub sidebar_open: bool,
    /// Fixed seed for option shuffling; random per run when unset.
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}
fn default_start_presentation() -> bool {
    false
}
fn default_sidebar_open() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            deck_path: None,
            start_presentation: default_start_presentation(),
            sidebar_open: default_sidebar_open(),
            shuffle_seed: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lectern")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme, DEFAULT_THEME);
        assert!(config.deck_path.is_none());
        assert!(!config.start_presentation);
        assert!(config.sidebar_open);
        assert!(config.shuffle_seed.is_none());
    }

    #[test]
    fn test_config_partial_fields() {
        let toml_str = r#"
theme = "paper"
shuffle_seed = 42
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.theme, "paper");
        assert_eq!(config.shuffle_seed, Some(42));
        assert!(config.sidebar_open);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let mut config = Config::default();
        config.deck_path = Some("/tmp/deck.toml".to_string());
        config.start_presentation = true;
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.deck_path, deserialized.deck_path);
        assert_eq!(config.start_presentation, deserialized.start_presentation);
    }

    #[test]
    fn test_load_from_missing_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.theme, DEFAULT_THEME);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "sidebar_open = false\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert!(!config.sidebar_open);
    }

    #[test]
    fn test_load_from_malformed_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "sidebar_open = [").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
