//! Browser bindings, compiled for `wasm32` only.
//!
//! - [`DomStyleTarget`]: `document.documentElement.classList`
//! - [`LocalStorage`]: `window.localStorage`
//! - [`media_query_color_mode`]: `(prefers-color-scheme: dark)`
//!
//! [`ThemeController::browser`] wires these together, falling back to a
//! detached controller when no document exists (workers, prerendering).

use wasm_bindgen::JsValue;
use web_sys::{Element, Storage};

use crate::controller::ThemeController;
use crate::storage::{MemoryStorage, StorageError, ThemeStorage};
use crate::target::{NoStyleTarget, StyleTarget};
use crate::theme::ColorMode;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

fn js_reason(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// The document root element.
#[derive(Debug, Clone)]
pub struct DomStyleTarget {
    root: Element,
}

impl DomStyleTarget {
    /// Returns `None` outside a browsing context.
    pub fn document_root() -> Option<Self> {
        let root = web_sys::window()?.document()?.document_element()?;
        Some(Self { root })
    }

    pub fn from_element(root: Element) -> Self {
        Self { root }
    }
}

impl StyleTarget for DomStyleTarget {
    fn add_class(&mut self, class: &str) {
        if let Err(err) = self.root.class_list().add_1(class) {
            tracing::warn!(class, reason = %js_reason(err), "failed to add class");
        }
    }

    fn remove_class(&mut self, class: &str) {
        if let Err(err) = self.root.class_list().remove_1(class) {
            tracing::warn!(class, reason = %js_reason(err), "failed to remove class");
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.root.class_list().contains(class)
    }
}

/// `window.localStorage`, looked up on every access.
///
/// Browsers may deny access (privacy modes, sandboxed iframes); that surfaces
/// as [`StorageError::Unavailable`] rather than a panic.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn handle(&self) -> Result<Storage, StorageError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl ThemeStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.handle()?
            .get_item(key)
            .map_err(|err| StorageError::Rejected {
                key: key.to_string(),
                reason: js_reason(err),
            })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.handle()?
            .set_item(key, value)
            .map_err(|err| StorageError::Rejected {
                key: key.to_string(),
                reason: js_reason(err),
            })
    }
}

/// Evaluates the `prefers-color-scheme` media query; light if unsupported.
pub fn media_query_color_mode() -> ColorMode {
    let prefers_dark = web_sys::window()
        .and_then(|window| window.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false);

    if prefers_dark {
        ColorMode::Dark
    } else {
        ColorMode::Light
    }
}

impl ThemeController {
    /// Builds a controller for the current page.
    ///
    /// Uses the document root and `localStorage` when a document exists,
    /// otherwise a detached controller whose operations only update state.
    pub fn browser() -> Self {
        let (storage, target): (Box<dyn ThemeStorage>, Box<dyn StyleTarget>) =
            match DomStyleTarget::document_root() {
                Some(target) => (Box::new(LocalStorage), Box::new(target)),
                None => {
                    tracing::debug!("no document, theme controller is detached");
                    (Box::new(MemoryStorage::new()), Box::new(NoStyleTarget))
                }
            };
        ThemeController::new(storage, target)
    }
}
