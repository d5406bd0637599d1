//! Integration tests for the theme controller lifecycle.
//!
//! These exercise the public API the way an application does: construct a
//! controller over some storage and a class list, initialize it, and drive
//! it with `set`, `toggle` and subscriptions.

use std::cell::RefCell;
use std::rc::Rc;

use kairoa_theme::{
    set_color_mode_detector, theme_classes, ClassList, ColorMode, FileStorage, MemoryStorage,
    NoStyleTarget, StyleTarget, Theme, ThemeController, ThemeStorage,
};
use serial_test::serial;
use tempfile::TempDir;

fn session(storage: &MemoryStorage, mode: ColorMode) -> ThemeController<MemoryStorage, ClassList> {
    let controller = ThemeController::new(storage.clone(), ClassList::new());
    match mode {
        ColorMode::Light => controller.with_detector(|| ColorMode::Light),
        ColorMode::Dark => controller.with_detector(|| ColorMode::Dark),
    }
}

fn record<S: ThemeStorage, T: StyleTarget>(
    controller: &ThemeController<S, T>,
) -> Rc<RefCell<Vec<Theme>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    // Dropping the handle leaves the observer registered.
    let _subscription = controller.subscribe(move |theme| sink.borrow_mut().push(theme));
    seen
}

#[test]
fn test_first_visit_follows_dark_preference() {
    let storage = MemoryStorage::new();
    let mut controller = session(&storage, ColorMode::Dark);

    assert_eq!(controller.init(), Theme::KairoaDark);
    assert_eq!(controller.target().to_string(), "kairoa-dark dark");
}

#[test]
fn test_first_visit_follows_light_preference() {
    let storage = MemoryStorage::new();
    let mut controller = session(&storage, ColorMode::Light);

    assert_eq!(controller.init(), Theme::KairoaLight);
    assert_eq!(controller.target().to_string(), "kairoa-light");
}

#[test]
fn test_persisted_theme_beats_preference() {
    for mode in [ColorMode::Light, ColorMode::Dark] {
        let storage = MemoryStorage::with_entry("theme", "solarized-dark");
        let mut controller = session(&storage, mode);

        assert_eq!(controller.init(), Theme::SolarizedDark);
        assert!(controller.target().has_class("dark"));
    }
}

#[test]
fn test_set_round_trips_through_fresh_session() {
    for theme in Theme::ALL {
        let storage = MemoryStorage::new();
        session(&storage, ColorMode::Dark).set(theme).unwrap();

        let mut next_session = session(&storage, ColorMode::Light);
        assert_eq!(next_session.init(), theme);
        assert_eq!(theme_classes(next_session.target()), vec![theme]);
    }
}

#[test]
fn test_set_round_trips_through_file_storage() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("theme.json");

    for theme in Theme::ALL {
        let mut first = ThemeController::new(FileStorage::new(&path), ClassList::new());
        first.set(theme).unwrap();

        let mut second = ThemeController::new(FileStorage::new(&path), ClassList::new())
            .with_detector(|| ColorMode::Dark);
        assert_eq!(second.init(), theme);
    }
}

#[test]
fn test_set_repairs_corrupt_file_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("theme.json");
    std::fs::write(&path, "garbage").unwrap();

    let mut first = ThemeController::new(FileStorage::new(&path), ClassList::new())
        .with_detector(|| ColorMode::Light);
    assert_eq!(first.init(), Theme::KairoaLight);
    first.set(Theme::SolarizedDark).unwrap();

    let mut second = ThemeController::new(FileStorage::new(&path), ClassList::new())
        .with_detector(|| ColorMode::Light);
    assert_eq!(second.init(), Theme::SolarizedDark);
}

#[test]
fn test_toggle_cycle_order() {
    let storage = MemoryStorage::new();
    let mut controller = session(&storage, ColorMode::Light);
    controller.init();

    let visited: Vec<Theme> = (0..4).map(|_| controller.toggle().unwrap()).collect();

    assert_eq!(
        visited,
        vec![
            Theme::KairoaDark,
            Theme::SolarizedLight,
            Theme::SolarizedDark,
            Theme::KairoaLight,
        ]
    );
    assert_eq!(storage.peek("theme").as_deref(), Some("kairoa-light"));
}

#[test]
fn test_subscriber_sees_every_change_in_order() {
    let storage = MemoryStorage::new();
    let mut controller = session(&storage, ColorMode::Dark);
    let seen = record(&controller);

    controller.init();
    controller.set(Theme::SolarizedLight).unwrap();
    controller.toggle().unwrap();
    controller.set(Theme::SolarizedDark).unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![
            Theme::KairoaLight,
            Theme::KairoaDark,
            Theme::SolarizedLight,
            Theme::SolarizedDark,
            Theme::SolarizedDark,
        ]
    );
}

#[test]
fn test_unsubscribed_observer_is_silent() {
    let mut controller = session(&MemoryStorage::new(), ColorMode::Light);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let subscription = controller.subscribe(move |theme| sink.borrow_mut().push(theme));

    controller.set(Theme::KairoaDark).unwrap();
    assert!(subscription.unsubscribe());
    controller.set(Theme::SolarizedDark).unwrap();

    assert_eq!(*seen.borrow(), vec![Theme::KairoaLight, Theme::KairoaDark]);
}

#[test]
fn test_degraded_mode_updates_state_and_notifies() {
    let storage = MemoryStorage::with_entry("theme", "solarized-dark");
    let mut controller = ThemeController::new(storage.clone(), NoStyleTarget)
        .with_detector(|| ColorMode::Dark);
    let seen = record(&controller);

    assert_eq!(controller.init(), Theme::KairoaLight);
    controller.set(Theme::SolarizedLight).unwrap();
    assert_eq!(controller.toggle().unwrap(), Theme::SolarizedDark);

    assert_eq!(controller.get(), Theme::SolarizedDark);
    assert_eq!(
        *seen.borrow(),
        vec![
            Theme::KairoaLight,
            Theme::KairoaLight,
            Theme::SolarizedLight,
            Theme::SolarizedDark,
        ]
    );
    // Storage is untouched without a styling context.
    assert_eq!(storage.peek("theme").as_deref(), Some("solarized-dark"));
}

#[test]
#[serial]
fn test_default_detector_honors_global_override() {
    set_color_mode_detector(|| ColorMode::Dark);
    let mut controller = ThemeController::new(MemoryStorage::new(), ClassList::new());
    assert_eq!(controller.init(), Theme::KairoaDark);

    set_color_mode_detector(|| ColorMode::Light);
    let mut controller = ThemeController::new(MemoryStorage::new(), ClassList::new());
    assert_eq!(controller.init(), Theme::KairoaLight);
}
