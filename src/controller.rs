//! The theme controller.
//!
//! [`ThemeController`] owns the active-theme [`ThemeStore`] and keeps two
//! external surfaces in step with it:
//!
//! 1. a durable [`ThemeStorage`] slot holding the tag, and
//! 2. a [`StyleTarget`] carrying exactly one theme class, plus the dark
//!    marker class while a dark theme is active.
//!
//! When the target reports itself unavailable (server-side rendering,
//! tests, headless tools) every operation degrades to a state-only update:
//! nothing is read from or written to storage and no classes are touched,
//! but subscribers are still notified.
//!
//! # Example
//!
//! ```rust
//! use kairoa_theme::{ClassList, ColorMode, MemoryStorage, StyleTarget, Theme, ThemeController};
//!
//! let storage = MemoryStorage::new();
//! let mut controller = ThemeController::new(storage.clone(), ClassList::new())
//!     .with_detector(|| ColorMode::Dark);
//!
//! assert_eq!(controller.init(), Theme::KairoaDark);
//! assert!(controller.target().has_class("dark"));
//!
//! controller.toggle().unwrap();
//! assert_eq!(controller.get(), Theme::SolarizedLight);
//! assert_eq!(storage.peek("theme").as_deref(), Some("solarized-light"));
//! assert!(!controller.target().has_class("dark"));
//! ```

use tracing::{debug, warn};

use crate::config::{ConfigError, ThemeConfig};
use crate::error::ThemeError;
use crate::storage::{MemoryStorage, ThemeStorage};
use crate::store::{Subscription, ThemeStore};
use crate::target::{sync_classes, NoStyleTarget, StyleTarget};
use crate::theme::{detect_color_mode, ColorModeDetector, Theme};

/// Single source of truth for the active theme.
///
/// Construct one at application start and hand it (or a reference to it) to
/// whatever needs to read or change the theme.
pub struct ThemeController<S = Box<dyn ThemeStorage>, T = Box<dyn StyleTarget>> {
    config: ThemeConfig,
    storage: S,
    target: T,
    detector: ColorModeDetector,
    store: ThemeStore,
}

impl ThemeController<MemoryStorage, NoStyleTarget> {
    /// A controller with no styling context: every operation only updates
    /// the in-memory state.
    pub fn detached() -> Self {
        Self::new(MemoryStorage::new(), NoStyleTarget)
    }
}

impl<S, T> ThemeController<S, T>
where
    S: ThemeStorage,
    T: StyleTarget,
{
    /// Creates a controller with the default configuration.
    ///
    /// The state starts at [`Theme::KairoaLight`]; call [`init`](Self::init)
    /// once to load the persisted or OS-preferred theme.
    pub fn new(storage: S, target: T) -> Self {
        Self {
            config: ThemeConfig::default(),
            storage,
            target,
            detector: detect_color_mode,
            store: ThemeStore::default(),
        }
    }

    /// Replaces the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the dark class is empty, contains
    /// whitespace or names a theme, or the storage key is empty.
    pub fn with_config(mut self, config: ThemeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Replaces the system preference detector.
    ///
    /// Defaults to [`detect_color_mode`], which honors
    /// [`set_color_mode_detector`](crate::set_color_mode_detector).
    pub fn with_detector(mut self, detector: ColorModeDetector) -> Self {
        self.detector = detector;
        self
    }

    /// Returns the current theme.
    pub fn get(&self) -> Theme {
        self.store.get()
    }

    /// Registers an observer, called now with the current theme and again
    /// after every [`set`](Self::set), [`toggle`](Self::toggle) or
    /// [`init`](Self::init).
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: FnMut(Theme) + 'static,
    {
        self.store.subscribe(observer)
    }

    /// Makes `theme` the active theme.
    ///
    /// Persists the tag, syncs the target's classes, then updates state and
    /// notifies subscribers. A storage failure does not stop the rest.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Storage`] if the tag could not be persisted.
    /// The theme is still active in that case.
    pub fn set(&mut self, theme: Theme) -> Result<(), ThemeError> {
        let mut outcome = Ok(());

        if self.target.is_available() {
            if let Err(err) = self.storage.set(&self.config.storage_key, theme.as_str()) {
                warn!(theme = %theme, error = %err, "failed to persist theme");
                outcome = Err(ThemeError::Storage(err));
            }
            sync_classes(&mut self.target, theme, &self.config.dark_class);
        }

        debug!(theme = %theme, synced = self.target.is_available(), "theme set");
        self.store.set(theme);
        outcome
    }

    /// Parses `tag` and makes it the active theme.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidTheme`] without touching state, storage
    /// or classes if `tag` is not one of the four theme tags. Otherwise
    /// behaves like [`set`](Self::set).
    pub fn set_tag(&mut self, tag: &str) -> Result<Theme, ThemeError> {
        let theme: Theme = tag.parse()?;
        self.set(theme)?;
        Ok(theme)
    }

    /// Advances to the next theme in [`Theme::ALL`], wrapping around.
    ///
    /// # Errors
    ///
    /// Same as [`set`](Self::set): the new theme is active even on error.
    pub fn toggle(&mut self) -> Result<Theme, ThemeError> {
        let next = self.get().next();
        self.set(next)?;
        Ok(next)
    }

    /// Loads the initial theme and applies it.
    ///
    /// A previously persisted tag wins; otherwise the OS preference picks
    /// the configured dark or light fallback. Classes are synced but nothing
    /// is written to storage. Without a styling context the state is left
    /// as is, and subscribers are notified once with it.
    pub fn init(&mut self) -> Theme {
        if !self.target.is_available() {
            let current = self.get();
            debug!(theme = %current, "no styling context, keeping current theme");
            self.store.set(current);
            return current;
        }

        let theme = self.resolve_initial();
        sync_classes(&mut self.target, theme, &self.config.dark_class);
        debug!(theme = %theme, "theme initialized");
        self.store.set(theme);
        theme
    }

    /// Computes the theme [`init`](Self::init) would apply, without side
    /// effects.
    ///
    /// Unreadable storage and unknown persisted tags are logged and treated
    /// as if nothing were persisted.
    pub fn resolve_initial(&self) -> Theme {
        match self.storage.get(&self.config.storage_key) {
            Ok(Some(tag)) => match tag.parse::<Theme>() {
                Ok(theme) => return theme,
                Err(err) => warn!(error = %err, "ignoring persisted theme"),
            },
            Ok(None) => {}
            Err(err) => warn!(error = %err, "failed to read persisted theme"),
        }

        let mode = (self.detector)();
        self.config.fallback_for(mode)
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Whether operations reach storage and the style target.
    pub fn is_attached(&self) -> bool {
        self.target.is_available()
    }
}

impl<S, T> std::fmt::Debug for ThemeController<S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("config", &self.config)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::target::{theme_classes, ClassList};
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Set(Theme),
        Toggle,
    }

    fn theme_strategy() -> impl Strategy<Value = Theme> {
        prop::sample::select(Theme::ALL.to_vec())
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![theme_strategy().prop_map(Op::Set), Just(Op::Toggle)]
    }

    proptest! {
        #[test]
        fn exactly_one_theme_class_after_every_op(
            start in theme_strategy(),
            ops in prop::collection::vec(op_strategy(), 1..32),
        ) {
            let storage = MemoryStorage::with_entry("theme", start.as_str());
            let mut controller = ThemeController::new(storage.clone(), ClassList::new());
            controller.init();

            for op in ops {
                match op {
                    Op::Set(theme) => controller.set(theme).unwrap(),
                    Op::Toggle => {
                        controller.toggle().unwrap();
                    }
                }

                let theme = controller.get();
                prop_assert_eq!(theme_classes(controller.target()), vec![theme]);
                prop_assert_eq!(controller.target().has_class("dark"), theme.is_dark());
                prop_assert_eq!(storage.peek("theme"), Some(theme.as_str().to_string()));
            }
        }

        #[test]
        fn four_toggles_return_to_start(start in theme_strategy()) {
            let mut controller = ThemeController::new(MemoryStorage::new(), ClassList::new());
            controller.set(start).unwrap();

            for _ in 0..4 {
                controller.toggle().unwrap();
            }

            prop_assert_eq!(controller.get(), start);
        }
    }
}
