use std::fmt;

use serde::{Deserialize, Serialize};

// local storage keys are namespaced so they stay apart from anything else served from the
// same origin; the theme ends up under "bintybyte_theme" as a JSON string
pub const STORAGE_NAMESPACE: &str = "bintybyte";
pub const THEME_STORAGE_KEY: &str = "theme";

pub fn storage_key(name: &str) -> String {
    format!("{STORAGE_NAMESPACE}_{name}")
}

// the three options offered by the theme toggle
//
// System defers to the os-level light/dark signal, which can change while the page is open
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn all() -> [Self; 3] {
        [Self::Light, Self::Dark, Self::System]
    }

    pub fn resolve(self, system_prefers_dark: bool) -> ResolvedTheme {
        match self {
            Self::Light => ResolvedTheme::Light,
            Self::Dark => ResolvedTheme::Dark,
            Self::System if system_prefers_dark => ResolvedTheme::Dark,
            Self::System => ResolvedTheme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ResolvedTheme {
    pub fn is_dark(self) -> bool {
        self == ResolvedTheme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_follows_os_signal() {
        assert_eq!(ThemePreference::System.resolve(true), ResolvedTheme::Dark);
        assert_eq!(ThemePreference::System.resolve(false), ResolvedTheme::Light);
        assert_eq!(ThemePreference::Light.resolve(true), ResolvedTheme::Light);
        assert!(ThemePreference::Dark.resolve(false).is_dark());
    }

    #[test]
    fn display_is_lowercase() {
        let names: Vec<_> = ThemePreference::all().iter().map(|p| p.to_string()).collect();
        assert_eq!(names, ["light", "dark", "system"]);
        assert_eq!(ThemePreference::default(), ThemePreference::System);
    }

    #[test]
    fn theme_key_is_namespaced() {
        assert_eq!(storage_key(THEME_STORAGE_KEY), "bintybyte_theme");
    }
}
