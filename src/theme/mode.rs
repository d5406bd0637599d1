//! System color-mode preference.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, PoisonError};

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn is_dark(self) -> bool {
        self == ColorMode::Dark
    }
}

/// A function that reports the hosting platform's color-mode preference.
pub type ColorModeDetector = fn() -> ColorMode;

static COLOR_MODE_DETECTOR: Lazy<Mutex<ColorModeDetector>> =
    Lazy::new(|| Mutex::new(os_color_mode_detector));

/// Overrides the detector used to determine whether the user prefers a light or dark theme.
///
/// This is useful for testing or when you want to force a specific color mode
/// for every controller that was built without an explicit detector.
pub fn set_color_mode_detector(detector: ColorModeDetector) {
    let mut guard = COLOR_MODE_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Reads the current color-mode preference through the installed detector.
///
/// Defaults to the OS setting (the `prefers-color-scheme` media query when
/// running in a browser).
pub fn detect_color_mode() -> ColorMode {
    let detector = *COLOR_MODE_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    detector()
}

#[cfg(not(target_arch = "wasm32"))]
fn os_color_mode_detector() -> ColorMode {
    use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        _ => ColorMode::Light,
    }
}

#[cfg(target_arch = "wasm32")]
fn os_color_mode_detector() -> ColorMode {
    crate::web::media_query_color_mode()
}
