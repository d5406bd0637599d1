//! Style targets whose class membership encodes the active theme.
//!
//! This module provides:
//!
//! - [`StyleTarget`]: The capability the controller mutates on every change
//! - [`ClassList`]: An in-memory class set, for native hosts and tests
//! - [`NoStyleTarget`]: The unavailable target used outside a browsing context
//! - [`sync_classes`]: Applies a theme's class markers to a target
//!
//! In a browser the real target is the document root element, see
//! `DomStyleTarget` in the `web` module.

mod class_list;

pub use class_list::ClassList;

use crate::theme::Theme;

/// The default auxiliary class present iff a dark theme is active.
pub const DEFAULT_DARK_CLASS: &str = "dark";

/// Something with a mutable set of CSS classes.
pub trait StyleTarget {
    /// Whether a styling context exists at all.
    ///
    /// When this returns `false` the controller skips persistence and class
    /// sync, and only updates its in-memory state.
    fn is_available(&self) -> bool {
        true
    }

    fn add_class(&mut self, class: &str);

    fn remove_class(&mut self, class: &str);

    fn has_class(&self, class: &str) -> bool;
}

impl<T: StyleTarget + ?Sized> StyleTarget for Box<T> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn add_class(&mut self, class: &str) {
        (**self).add_class(class)
    }

    fn remove_class(&mut self, class: &str) {
        (**self).remove_class(class)
    }

    fn has_class(&self, class: &str) -> bool {
        (**self).has_class(class)
    }
}

/// Target for non-interactive execution, where no document exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoStyleTarget;

impl StyleTarget for NoStyleTarget {
    fn is_available(&self) -> bool {
        false
    }

    fn add_class(&mut self, _class: &str) {}

    fn remove_class(&mut self, _class: &str) {}

    fn has_class(&self, _class: &str) -> bool {
        false
    }
}

/// Makes `theme` the only theme class on `target` and sets the dark marker
/// accordingly.
pub fn sync_classes<T: StyleTarget + ?Sized>(target: &mut T, theme: Theme, dark_class: &str) {
    for tag in Theme::ALL {
        target.remove_class(tag.as_str());
    }
    target.add_class(theme.as_str());

    if theme.is_dark() {
        target.add_class(dark_class);
    } else {
        target.remove_class(dark_class);
    }
}

/// Returns the theme classes currently present on `target`, in cycle order.
pub fn theme_classes<T: StyleTarget + ?Sized>(target: &T) -> Vec<Theme> {
    Theme::ALL
        .into_iter()
        .filter(|theme| target.has_class(theme.as_str()))
        .collect()
}
