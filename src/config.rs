use chrono::format::{Item, StrftimeItems};
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tasktrack::store::StoreConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub store: StoreConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
    pub date_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            date_format: "%Y-%m-%d %H:%M".to_string(),
        }
    }
}

impl DisplayConfig {
    /// Reject strftime patterns chrono cannot render.
    pub fn validate(&self) -> Result<()> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            eyre::bail!("Invalid display.date_format: {:?}", self.date_format);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            store: StoreConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try primary location: ~/.config/<project>/<project>.yml
        if let Some(config_dir) = dirs::config_dir() {
            let project_name = env!("CARGO_PKG_NAME");
            let primary_config = config_dir.join(project_name).join(format!("{}.yml", project_name));
            if let Some(config) = Self::try_load(&primary_config) {
                return Ok(config);
            }
        }

        // Try fallback location: ./<project>.yml
        let project_name = env!("CARGO_PKG_NAME");
        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if let Some(config) = Self::try_load(&fallback_config) {
            return Ok(config);
        }

        // No config file found, use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load an implicit config file; a broken one is logged and skipped.
    fn try_load(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        match Self::load_from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("Failed to load config from {}: {}", path.display(), e);
                None
            }
        }
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        config.display.validate()?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tasktrack::store::TieBreak;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level.as_deref(), Some("info"));
        assert_eq!(config.store.ordering.tie_break, TieBreak::DueDate);
        assert!(config.display.color);
    }

    #[test]
    fn test_load_explicit_file() {
        let file = write_config(
            r#"
log_level: debug
store:
  ordering:
    tie_break: id
display:
  color: false
"#,
        );
        let config = Config::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.store.ordering.tie_break, TieBreak::Id);
        assert!(!config.display.color);
        assert_eq!(config.display.date_format, "%Y-%m-%d %H:%M");
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let path = PathBuf::from("/definitely/not/here/tasktrack.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_load_explicit_invalid_file_fails() {
        let file = write_config("store:\n  ordering:\n    tie_break: alphabetical\n");
        assert!(Config::load(Some(&file.path().to_path_buf())).is_err());
    }

    #[test]
    fn test_load_rejects_bad_date_format() {
        let file = write_config("display:\n  date_format: \"%Q\"\n");
        let err = Config::load(Some(&file.path().to_path_buf())).unwrap_err();
        assert!(err.chain().any(|cause| cause.to_string().contains("date_format")));
    }

    #[test]
    fn test_validate_date_format() {
        assert!(DisplayConfig::default().validate().is_ok());

        let custom = DisplayConfig {
            color: false,
            date_format: "%d/%m %H:%M".to_string(),
        };
        assert!(custom.validate().is_ok());

        let broken = DisplayConfig {
            color: false,
            date_format: "%Y-%Q".to_string(),
        };
        assert!(broken.validate().is_err());
    }

    #[test]
    fn test_try_load_skips_bad_date_format() {
        let file = write_config("display:\n  date_format: \"%Q\"\n");
        assert!(Config::try_load(file.path()).is_none());
    }

    #[test]
    fn test_try_load_skips_broken_file() {
        let file = write_config("display: [not, a, map]\n");
        assert!(Config::try_load(file.path()).is_none());
    }

    #[test]
    fn test_try_load_missing_file() {
        assert!(Config::try_load(Path::new("/definitely/not/here.yml")).is_none());
    }
}
