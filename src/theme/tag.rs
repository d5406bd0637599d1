//! The closed set of theme tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::mode::ColorMode;

/// One of the four themes the application ships with.
///
/// The tag string doubles as the CSS class applied to the style target and
/// as the value persisted in storage.
///
/// # Example
///
/// ```rust
/// use kairoa_theme::Theme;
///
/// let theme: Theme = "solarized-dark".parse().unwrap();
/// assert!(theme.is_dark());
/// assert_eq!(theme.next(), Theme::KairoaLight);
/// assert!("github-dark".parse::<Theme>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    KairoaLight,
    KairoaDark,
    SolarizedLight,
    SolarizedDark,
}

impl Theme {
    /// All themes in cycle order.
    pub const ALL: [Theme; 4] = [
        Theme::KairoaLight,
        Theme::KairoaDark,
        Theme::SolarizedLight,
        Theme::SolarizedDark,
    ];

    /// Returns the tag string, e.g. `"kairoa-light"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::KairoaLight => "kairoa-light",
            Theme::KairoaDark => "kairoa-dark",
            Theme::SolarizedLight => "solarized-light",
            Theme::SolarizedDark => "solarized-dark",
        }
    }

    /// Whether this is one of the dark variants.
    pub const fn is_dark(self) -> bool {
        matches!(self, Theme::KairoaDark | Theme::SolarizedDark)
    }

    pub const fn color_mode(self) -> ColorMode {
        if self.is_dark() {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }

    /// Returns the theme following this one in [`Theme::ALL`], wrapping
    /// from the last back to the first.
    pub fn next(self) -> Theme {
        let index = Theme::ALL
            .iter()
            .position(|t| *t == self)
            .unwrap_or_default();
        Theme::ALL[(index + 1) % Theme::ALL.len()]
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the four theme tags.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{input}' (expected one of: kairoa-light, kairoa-dark, solarized-light, solarized-dark)")]
pub struct ParseThemeError {
    pub input: String,
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| ParseThemeError {
                input: s.to_string(),
            })
    }
}

impl TryFrom<&str> for Theme {
    type Error = ParseThemeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_kairoa_light() {
        assert_eq!(Theme::default(), Theme::KairoaLight);
    }

    #[test]
    fn test_parse_all_tags() {
        for theme in Theme::ALL {
            assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_and_case_variants() {
        let err = "github-dark".parse::<Theme>().unwrap_err();
        assert_eq!(err.input, "github-dark");
        assert!(err.to_string().contains("github-dark"));

        assert!("Kairoa-Light".parse::<Theme>().is_err());
        assert!("".parse::<Theme>().is_err());
        assert!(" kairoa-dark".parse::<Theme>().is_err());
    }

    #[test]
    fn test_dark_variants() {
        assert!(!Theme::KairoaLight.is_dark());
        assert!(Theme::KairoaDark.is_dark());
        assert!(!Theme::SolarizedLight.is_dark());
        assert!(Theme::SolarizedDark.is_dark());
        assert_eq!(Theme::SolarizedDark.color_mode(), ColorMode::Dark);
        assert_eq!(Theme::SolarizedLight.color_mode(), ColorMode::Light);
    }

    #[test]
    fn test_next_follows_cycle_order() {
        assert_eq!(Theme::KairoaLight.next(), Theme::KairoaDark);
        assert_eq!(Theme::KairoaDark.next(), Theme::SolarizedLight);
        assert_eq!(Theme::SolarizedLight.next(), Theme::SolarizedDark);
        assert_eq!(Theme::SolarizedDark.next(), Theme::KairoaLight);
    }

    #[test]
    fn test_next_four_times_is_identity() {
        for theme in Theme::ALL {
            assert_eq!(theme.next().next().next().next(), theme);
        }
    }

    #[test]
    fn test_serde_uses_tag_strings() {
        let json = serde_json::to_string(&Theme::SolarizedLight).unwrap();
        assert_eq!(json, "\"solarized-light\"");

        let theme: Theme = serde_json::from_str("\"kairoa-dark\"").unwrap();
        assert_eq!(theme, Theme::KairoaDark);

        assert!(serde_json::from_str::<Theme>("\"dark\"").is_err());
    }

    #[test]
    fn test_display_matches_as_str() {
        for theme in Theme::ALL {
            assert_eq!(theme.to_string(), theme.as_str());
        }
    }
}
