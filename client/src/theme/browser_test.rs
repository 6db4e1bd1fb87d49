#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::theme::controller::ThemeController;

#[test]
fn local_storage_is_unavailable_outside_browser() {
    let mut store = LocalStorage;
    assert_eq!(store.load(), Err(StoreError::Unavailable));
    assert_eq!(store.save("dark"), Err(StoreError::Unavailable));
}

#[test]
fn prefers_color_scheme_is_false_outside_browser() {
    assert!(!PrefersColorScheme.prefers_dark());
}

#[test]
fn document_root_apply_is_noop_but_callable() {
    let mut root = DocumentRoot;
    root.apply(ThemeMode::Dark);
    root.apply(ThemeMode::Light);
}

#[test]
fn browser_controller_degrades_to_memory_only() {
    let mut theme = ThemeController::new(LocalStorage, PrefersColorScheme, DocumentRoot);
    assert_eq!(theme.initialize(), ThemeMode::Light);
    assert_eq!(theme.toggle(), ThemeMode::Dark);
    assert_eq!(theme.current_mode(), ThemeMode::Dark);
    assert!(!theme.is_persisted());
}
