use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

fn default_base_url() -> String {
    "https://api.aladhan.com/v1".to_string()
}
fn default_city() -> String {
    "Riyadh".to_string()
}
fn default_country() -> String {
    "SA".to_string()
}
fn default_method() -> u32 {
    4
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_city")]
    pub city: String,
    /// ISO country code sent alongside the city.
    #[serde(default = "default_country")]
    pub country: String,
    /// AlAdhan calculation method id (4 = Umm Al-Qura).
    #[serde(default = "default_method")]
    pub method: u32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            city: default_city(),
            country: default_country(),
            method: default_method(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "pray").context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from a specific path; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.provider.city, "Riyadh");
        assert_eq!(config.provider.country, "SA");
        assert_eq!(config.provider.method, 4);
        assert_eq!(config.provider.base_url, "https://api.aladhan.com/v1");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.provider.city, "Riyadh");
    }

    #[test]
    fn partial_file_fills_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "[provider]\ncity = \"Istanbul\"\ncountry = \"TR\"").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.provider.city, "Istanbul");
        assert_eq!(config.provider.country, "TR");
        assert_eq!(config.provider.method, 4);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }
}
