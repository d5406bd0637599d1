//! Controller configuration.

use serde::{Deserialize, Serialize};

use crate::storage::DEFAULT_STORAGE_KEY;
use crate::target::DEFAULT_DARK_CLASS;
use crate::theme::{ColorMode, Theme};

/// Names and fallbacks used by a [`ThemeController`](crate::ThemeController).
///
/// The defaults match the stylesheet conventions of the web app: the tag is
/// stored under `"theme"`, dark themes additionally carry the `dark` class
/// (the Tailwind dark-mode selector), and a first visit resolves to
/// `kairoa-dark` or `kairoa-light` depending on the OS preference.
///
/// Every field is optional when deserializing:
///
/// ```rust
/// use kairoa_theme::{Theme, ThemeConfig};
///
/// let config: ThemeConfig = serde_json::from_str(r#"{ "storage_key": "app-theme" }"#).unwrap();
/// assert_eq!(config.storage_key, "app-theme");
/// assert_eq!(config.dark_class, "dark");
/// assert_eq!(config.dark_fallback, Theme::KairoaDark);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Key of the durable storage slot.
    pub storage_key: String,
    /// Auxiliary class present iff a dark theme is active.
    pub dark_class: String,
    /// Initial theme when nothing is persisted and the OS prefers light.
    pub light_fallback: Theme,
    /// Initial theme when nothing is persisted and the OS prefers dark.
    pub dark_fallback: Theme,
}

/// Error returned when a [`ThemeConfig`] would break the class invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("storage key must not be empty")]
    EmptyStorageKey,

    #[error("dark class must not be empty")]
    EmptyDarkClass,

    /// A class token cannot contain whitespace.
    #[error("dark class '{class}' contains whitespace")]
    InvalidDarkClass { class: String },

    /// The dark marker would collide with one of the theme classes.
    #[error("dark class '{class}' is a theme tag")]
    DarkClassIsTheme { class: String },
}

impl ThemeConfig {
    /// Checks that the configured names can be used as a storage key and a
    /// single CSS class distinct from every theme tag.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        if self.dark_class.is_empty() {
            return Err(ConfigError::EmptyDarkClass);
        }
        if self.dark_class.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidDarkClass {
                class: self.dark_class.clone(),
            });
        }
        if Theme::ALL.iter().any(|t| t.as_str() == self.dark_class) {
            return Err(ConfigError::DarkClassIsTheme {
                class: self.dark_class.clone(),
            });
        }
        Ok(())
    }

    /// The theme a first visit resolves to under `mode`.
    pub fn fallback_for(&self, mode: ColorMode) -> Theme {
        match mode {
            ColorMode::Light => self.light_fallback,
            ColorMode::Dark => self.dark_fallback,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            dark_class: DEFAULT_DARK_CLASS.to_string(),
            light_fallback: Theme::KairoaLight,
            dark_fallback: Theme::KairoaDark,
        }
    }
}
