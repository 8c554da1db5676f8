use crate::error::{ChecklistError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Extra unit synonyms layered over the built-in vocabulary
    /// (e.g. other locales), as a JSON map of synonym -> canonical code.
    pub unit_vocabulary: Option<PathBuf>,
    /// Default directory for generated checklists.
    pub output_dir: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ChecklistError::Config("home directory not found".into()))?;
        Ok(home
            .join(".config")
            .join("voice-checklist")
            .join("config.json"))
    }

    /// Build the unit catalog, layering the configured vocabulary file
    /// over the defaults when one is set.
    pub fn unit_catalog(&self) -> Result<crate::units::UnitCatalog> {
        match &self.unit_vocabulary {
            Some(path) => {
                if !path.exists() {
                    return Err(ChecklistError::FileNotFound(path.display().to_string()));
                }
                let content = std::fs::read_to_string(path)?;
                let extra: HashMap<String, String> = serde_json::from_str(&content)?;
                Ok(crate::units::UnitCatalog::with_synonyms(&extra))
            }
            None => Ok(crate::units::UnitCatalog::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            unit_vocabulary: Some(PathBuf::from("/tmp/vocab.json")),
            output_dir: Some(PathBuf::from("/tmp/out")),
        };
        config.save_to(&path).expect("save config");

        let loaded = Config::load_from(&path).expect("load config");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempdir().expect("temp dir");
        let loaded = Config::load_from(&dir.path().join("absent.json")).expect("load config");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_unit_catalog_from_vocabulary_file() {
        let dir = tempdir().expect("temp dir");
        let vocab = dir.path().join("vocab.json");
        std::fs::write(&vocab, r#"{"mil": "mm"}"#).expect("write vocabulary");

        let config = Config {
            unit_vocabulary: Some(vocab),
            output_dir: None,
        };
        let catalog = config.unit_catalog().expect("build catalog");
        assert_eq!(catalog.normalize("mil"), "mm");
    }

    #[test]
    fn test_unit_catalog_missing_vocabulary_file() {
        let config = Config {
            unit_vocabulary: Some(PathBuf::from("/nonexistent/vocab.json")),
            output_dir: None,
        };
        assert!(matches!(
            config.unit_catalog(),
            Err(ChecklistError::FileNotFound(_))
        ));
    }
}
