use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::app::infrastructure::error::ParsePreferenceError;

/// The theme the user picked. This is what gets persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    System,
}

/// The theme actually shown. Always derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectiveTheme {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// The effective theme this preference pins, or `None` when it follows the OS.
    pub fn fixed(&self) -> Option<EffectiveTheme> {
        match self {
            Self::Light => Some(EffectiveTheme::Light),
            Self::Dark => Some(EffectiveTheme::Dark),
            Self::System => None,
        }
    }

    pub fn all() -> &'static [ThemePreference] {
        &[Self::Light, Self::Dark, Self::System]
    }
}

impl EffectiveTheme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Marker class name applied to the root element.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn all() -> &'static [EffectiveTheme] {
        &[Self::Light, Self::Dark]
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EffectiveTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

impl FromStr for ThemePreference {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(ParsePreferenceError(other.to_string())),
        }
    }
}

impl FromStr for EffectiveTheme {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParsePreferenceError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_parses_stored_literals() {
        assert_eq!("light".parse::<ThemePreference>().unwrap(), ThemePreference::Light);
        assert_eq!("dark".parse::<ThemePreference>().unwrap(), ThemePreference::Dark);
        assert_eq!(" system\n".parse::<ThemePreference>().unwrap(), ThemePreference::System);
    }

    #[test]
    fn test_preference_rejects_unknown_values() {
        let err = "Dark".parse::<ThemePreference>().unwrap_err();
        assert_eq!(err.to_string(), "unknown theme preference: \"Dark\"");
        assert!("".parse::<ThemePreference>().is_err());
    }

    #[test]
    fn test_effective_theme_rejects_system() {
        assert!("system".parse::<EffectiveTheme>().is_err());
        assert_eq!("dark".parse::<EffectiveTheme>().unwrap(), EffectiveTheme::Dark);
    }

    #[test]
    fn test_fixed_preferences() {
        assert_eq!(ThemePreference::Light.fixed(), Some(EffectiveTheme::Light));
        assert_eq!(ThemePreference::Dark.fixed(), Some(EffectiveTheme::Dark));
        assert_eq!(ThemePreference::System.fixed(), None);
    }

    #[test]
    fn test_serde_uses_lowercase_literals() {
        let json = serde_json::to_string(&ThemePreference::System).unwrap();
        assert_eq!(json, "\"system\"");
        let theme: EffectiveTheme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(theme, EffectiveTheme::Dark);
    }

    #[test]
    fn test_display_matches_stored_form() {
        for pref in ThemePreference::all() {
            assert_eq!(pref.to_string().parse::<ThemePreference>().unwrap(), *pref);
        }
        assert_eq!(EffectiveTheme::from_dark(true).to_string(), "dark");
        assert_eq!(EffectiveTheme::from_dark(false).to_string(), "light");
    }
}
