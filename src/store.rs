//! Observable state cell for the active theme.
//!
//! [`ThemeStore`] holds one value and an ordered list of observers. Every
//! call to [`ThemeStore::set`] notifies all observers synchronously, in
//! registration order, even when the value did not change. A `set` issued
//! from inside an observer is queued and delivered to everyone, the issuing
//! observer included, once the current pass finishes.
//!
//! # Example
//!
//! ```rust
//! use kairoa_theme::{Theme, ThemeStore};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let store = ThemeStore::new(Theme::KairoaLight);
//! let seen = Rc::new(RefCell::new(Vec::new()));
//!
//! let sink = Rc::clone(&seen);
//! let subscription = store.subscribe(move |theme| sink.borrow_mut().push(theme));
//!
//! store.set(Theme::SolarizedDark);
//! subscription.unsubscribe();
//! store.set(Theme::KairoaDark);
//!
//! assert_eq!(*seen.borrow(), vec![Theme::KairoaLight, Theme::SolarizedDark]);
//! ```

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::theme::Theme;

type Observer = Rc<RefCell<dyn FnMut(Theme)>>;

#[derive(Default)]
struct Observers {
    next_id: u64,
    // Ids grow monotonically, so key order is registration order.
    entries: BTreeMap<u64, Observer>,
}

/// A single theme value with synchronous change notification.
pub struct ThemeStore {
    current: Cell<Theme>,
    observers: Rc<RefCell<Observers>>,
    pending: RefCell<VecDeque<Theme>>,
    notifying: Cell<bool>,
}

impl ThemeStore {
    pub fn new(initial: Theme) -> Self {
        Self {
            current: Cell::new(initial),
            observers: Rc::new(RefCell::new(Observers::default())),
            pending: RefCell::new(VecDeque::new()),
            notifying: Cell::new(false),
        }
    }

    /// Returns the current value.
    pub fn get(&self) -> Theme {
        self.current.get()
    }

    /// Replaces the value and notifies every observer.
    ///
    /// Called from inside an observer, the value changes immediately but the
    /// notification waits until the running pass has reached every observer.
    pub fn set(&self, theme: Theme) {
        self.current.set(theme);
        self.pending.borrow_mut().push_back(theme);
        if self.notifying.replace(true) {
            return;
        }

        loop {
            let next = self.pending.borrow_mut().pop_front();
            match next {
                Some(theme) => self.notify(theme),
                None => break,
            }
        }
        self.notifying.set(false);
    }

    /// Registers an observer.
    ///
    /// The observer runs immediately with the current value, then once per
    /// subsequent [`set`](Self::set). Keep the returned [`Subscription`] to
    /// stop receiving updates; dropping it leaves the observer registered.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: FnMut(Theme) + 'static,
    {
        let observer: Observer = Rc::new(RefCell::new(observer));
        let id = {
            let mut observers = self.observers.borrow_mut();
            let id = observers.next_id;
            observers.next_id += 1;
            observers.entries.insert(id, Rc::clone(&observer));
            id
        };

        (&mut *observer.borrow_mut())(self.current.get());

        Subscription {
            id,
            observers: Rc::downgrade(&self.observers),
        }
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.borrow().entries.len()
    }

    fn notify(&self, theme: Theme) {
        // Snapshot so observers may unsubscribe while being notified.
        let snapshot: Vec<(u64, Observer)> = self
            .observers
            .borrow()
            .entries
            .iter()
            .map(|(id, observer)| (*id, Rc::clone(observer)))
            .collect();

        for (id, observer) in snapshot {
            if !self.observers.borrow().entries.contains_key(&id) {
                continue;
            }
            if let Ok(mut callback) = observer.try_borrow_mut() {
                (&mut *callback)(theme);
            }
        }
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("current", &self.current.get())
            .field("observers", &self.observer_count())
            .finish()
    }
}

/// De-registration handle returned by [`ThemeStore::subscribe`].
#[derive(Debug)]
#[must_use = "dropping a Subscription keeps the observer registered; call `unsubscribe` to remove it"]
pub struct Subscription {
    id: u64,
    observers: Weak<RefCell<Observers>>,
}

impl Subscription {
    /// Removes the observer. Returns `false` if it was already gone or the
    /// store has been dropped.
    pub fn unsubscribe(self) -> bool {
        match self.observers.upgrade() {
            Some(observers) => observers.borrow_mut().entries.remove(&self.id).is_some(),
            None => false,
        }
    }
}
