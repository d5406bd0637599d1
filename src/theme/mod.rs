//! Theme tags and system color-mode detection.
//!
//! This module provides:
//!
//! - [`Theme`]: The closed set of four theme tags, in cycle order
//! - [`ParseThemeError`]: Error for strings outside that set
//! - [`ColorMode`]: Light or dark color mode enum
//! - [`detect_color_mode`]: Reads the hosting platform's dark-mode preference
//!
//! Tags serialize as their literal class names (`"kairoa-dark"` and so on),
//! which is also the value written to durable storage.

mod mode;
mod tag;

pub use mode::{detect_color_mode, set_color_mode_detector, ColorMode, ColorModeDetector};
pub use tag::{ParseThemeError, Theme};
