//! In-memory class list.

use std::fmt;

use super::StyleTarget;

/// An ordered set of class names, mirroring a DOM `classList`.
///
/// Insertion order is preserved and duplicates are ignored, so the
/// [`Display`](fmt::Display) output is a valid `class` attribute value.
///
/// # Example
///
/// ```rust
/// use kairoa_theme::{ClassList, StyleTarget};
///
/// let mut classes = ClassList::from_classes(["app"]);
/// classes.add_class("kairoa-dark");
/// classes.add_class("dark");
/// classes.add_class("dark");
///
/// assert_eq!(classes.to_string(), "app kairoa-dark dark");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for class in classes {
            list.add_class(class.as_ref());
        }
        list
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl StyleTarget for ClassList {
    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|existing| existing != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.classes.join(" "))
    }
}
