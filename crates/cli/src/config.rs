//! CLI settings stored in `<data>/config.json`.

use std::path::Path;

use anyhow::{Context, Result};
use sensei_core::Locale;
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Name of the settings file inside the data directory.
pub const CONFIG_FILE: &str = "config.json";

/// User settings; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Language for generated text
    pub locale: Locale,

    /// Plan length used when `--months` is omitted
    pub default_months: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            default_months: 6,
        }
    }
}

impl Settings {
    /// Load settings from the data directory; a missing file means defaults.
    pub async fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE);
        match fs::read_to_string(&path).await {
            Ok(json) => serde_json::from_str(&json)
                .with_context(|| format!("invalid settings in {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e).with_context(|| format!("cannot read {}", path.display())),
        }
    }

    /// Apply a command-line or environment override.
    pub fn with_locale(mut self, locale: Option<Locale>) -> Self {
        if let Some(locale) = locale {
            self.locale = locale;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path()).await.unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.default_months, 6);
    }

    #[tokio::test]
    async fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), r#"{"locale": "en"}"#).await.unwrap();
        let settings = Settings::load(dir.path()).await.unwrap();
        assert_eq!(settings.locale, Locale::En);
        assert_eq!(settings.default_months, 6);
    }

    #[tokio::test]
    async fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "locale = en").await.unwrap();
        assert!(Settings::load(dir.path()).await.is_err());
    }

    #[test]
    fn test_override_wins() {
        let settings = Settings::default().with_locale(Some(Locale::En));
        assert_eq!(settings.locale, Locale::En);
        let settings = settings.with_locale(None);
        assert_eq!(settings.locale, Locale::En);
    }
}
