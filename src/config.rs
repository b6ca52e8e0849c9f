use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    pub general: GeneralConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub advice: AdviceSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub model_file: PathBuf,
    pub data_file: PathBuf,
    pub currency_symbol: String,
    pub color: bool,
}

/// Which form fields accept free text instead of a fixed choice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InputConfig {
    #[serde(default)]
    pub free_text_gender: bool,
    #[serde(default)]
    pub free_text_job_title: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceSettings {
    /// Years either side of the requested experience that count as similar
    pub experience_window: u32,
    pub max_roles: usize,
}

impl Default for AdviceSettings {
    fn default() -> Self {
        Self {
            experience_window: 2,
            max_roles: 3,
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        let data_dir = Config::config_dir();

        Self {
            model_file: data_dir.join("model.json"),
            data_file: data_dir.join("Salary_Data.csv"),
            currency_symbol: "₹".to_string(),
            color: true,
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        Self::load_custom(&Self::config_file_path())
    }

    pub fn ensure_config_exists() -> AppResult<()> {
        let config_path = Self::config_file_path();
        if !config_path.exists() {
            Config::default().save_to(&config_path)?;
            tracing::info!(path = %config_path.display(), "created default configuration");
        }
        Ok(())
    }

    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save_to(config_path)?;
            return Ok(default_config);
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|e| AppError::Io(e.to_string()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::System(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        tracing::debug!(path = %config_path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.general.model_file.as_os_str().is_empty() {
            return Err(AppError::System("Model file cannot be empty".to_string()));
        }

        if self.general.data_file.as_os_str().is_empty() {
            return Err(AppError::System("Data file cannot be empty".to_string()));
        }

        if self.advice.max_roles == 0 {
            return Err(AppError::System(
                "advice.max_roles must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&Self::config_file_path())
    }

    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Io(e.to_string()))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::System(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content).map_err(|e| AppError::Io(e.to_string()))?;

        Ok(())
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("salary-advisor")
    }

    pub fn config_file_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_custom_creates_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_custom(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config, Config::default());
        assert_eq!(config.advice.experience_window, 2);
        assert_eq!(config.advice.max_roles, 3);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.general.currency_symbol = "$".to_string();
        config.input.free_text_job_title = true;
        config.save_to(&path).unwrap();

        let loaded = Config::load_custom(&path).unwrap();
        assert_eq!(loaded.general.currency_symbol, "$");
        assert!(loaded.input.free_text_job_title);
        assert!(!loaded.input.free_text_gender);
    }

    #[test]
    fn test_optional_sections_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[general]\nmodel_file = \"m.json\"\ndata_file = \"d.csv\"\ncurrency_symbol = \"€\"\ncolor = false\n",
        )
        .unwrap();

        let config = Config::load_custom(&path).unwrap();
        assert_eq!(config.input, InputConfig::default());
        assert_eq!(config.advice, AdviceSettings::default());
        assert!(!config.general.color);
    }

    #[test]
    fn test_validate_rejects_zero_roles() {
        let mut config = Config::default();
        config.advice.max_roles = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[general\n").unwrap();

        let err = Config::load_custom(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
