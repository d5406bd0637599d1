//! # Kairoa Theme - persisted, observable theme selection
//!
//! `kairoa-theme` keeps track of which of the four Kairoa themes is active,
//! remembers it across sessions, and reflects it onto the document root as a
//! CSS class so stylesheets can key off it.
//!
//! ## Core Concepts
//!
//! - [`Theme`]: `kairoa-light`, `kairoa-dark`, `solarized-light` or `solarized-dark`
//! - [`ThemeController`]: Owns the active theme; `init`, `set`, `toggle`, `subscribe`
//! - [`StyleTarget`]: Where classes go (the DOM root, a [`ClassList`], or [`NoStyleTarget`])
//! - [`ThemeStorage`]: Where the tag is persisted ([`MemoryStorage`], [`FileStorage`], browser `localStorage`)
//! - [`ColorMode`]: The OS light/dark preference consulted on first visit
//!
//! ## Quick Start
//!
//! ```rust
//! use kairoa_theme::{ClassList, ColorMode, MemoryStorage, Theme, ThemeController};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let mut controller = ThemeController::new(MemoryStorage::new(), ClassList::new())
//!     .with_detector(|| ColorMode::Light);
//!
//! let latest = Rc::new(Cell::new(Theme::default()));
//! let sink = Rc::clone(&latest);
//! let _subscription = controller.subscribe(move |theme| sink.set(theme));
//!
//! controller.init();
//! controller.set(Theme::SolarizedDark).unwrap();
//!
//! assert_eq!(latest.get(), Theme::SolarizedDark);
//! assert_eq!(controller.target().to_string(), "solarized-dark dark");
//! ```
//!
//! ## Class Invariant
//!
//! After every operation that reaches the style target, exactly one of the
//! four theme tags is present as a class, and the dark marker class
//! (`dark` by default) is present iff the theme is a dark variant.
//!
//! ## Degraded Mode
//!
//! Outside a browsing context, use [`ThemeController::detached`] (or any
//! controller whose target is [`NoStyleTarget`]): operations update the
//! in-memory state and notify subscribers, and skip storage and classes.
//!
//! ## Browser
//!
//! On `wasm32`, `ThemeController::browser()` builds a controller over
//! `document.documentElement` and `window.localStorage`, and the default
//! preference detector evaluates `(prefers-color-scheme: dark)`.

mod config;
mod controller;
mod error;
pub mod storage;
mod store;
pub mod target;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{ConfigError, ThemeConfig};
pub use controller::ThemeController;
pub use error::ThemeError;
pub use storage::{FileStorage, MemoryStorage, StorageError, ThemeStorage, DEFAULT_STORAGE_KEY};
pub use store::{Subscription, ThemeStore};
pub use target::{sync_classes, theme_classes, ClassList, NoStyleTarget, StyleTarget, DEFAULT_DARK_CLASS};
pub use theme::{
    detect_color_mode, set_color_mode_detector, ColorMode, ColorModeDetector, ParseThemeError, Theme,
};
