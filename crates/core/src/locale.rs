//! Display locales for generated text.

use serde::{Deserialize, Serialize};
use crate::error::CoreError;

/// Language of the text bundle used for a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// Japanese
    Ja,
    /// English
    En,
}

impl Locale {
    /// All supported locales.
    pub const ALL: [Locale; 2] = [Locale::Ja, Locale::En];

    /// Locale tag.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::Ja => "ja",
            Locale::En => "en",
        }
    }

    /// Pick a locale from a language tag such as `ja-JP` or `en_US.UTF-8`.
    ///
    /// Anything that is not Japanese gets English.
    pub fn detect(language: &str) -> Self {
        if language.trim().to_lowercase().starts_with("ja") {
            Locale::Ja
        } else {
            Locale::En
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::Ja
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for Locale {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ja" => Ok(Locale::Ja),
            "en" => Ok(Locale::En),
            _ => Err(CoreError::UnknownLocale(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        assert_eq!(Locale::detect("ja-JP"), Locale::Ja);
        assert_eq!(Locale::detect("JA"), Locale::Ja);
        assert_eq!(Locale::detect("en_US.UTF-8"), Locale::En);
        assert_eq!(Locale::detect("fr-FR"), Locale::En);
        assert_eq!(Locale::detect(""), Locale::En);
    }

    #[test]
    fn test_parse() {
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::En));
        assert!("xx".parse::<Locale>().is_err());
    }
}
