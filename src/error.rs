//! Controller errors.

use crate::storage::StorageError;
use crate::theme::ParseThemeError;

/// Error returned by [`ThemeController`](crate::ThemeController) operations.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The input is not one of the four theme tags. Nothing was changed.
    #[error(transparent)]
    InvalidTheme(#[from] ParseThemeError),

    /// The theme was applied to the style target and state, but could not
    /// be persisted.
    #[error("theme applied but not persisted: {0}")]
    Storage(#[from] StorageError),
}
