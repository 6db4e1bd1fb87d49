use super::*;
use crate::theme::memory::{ClassList, FixedSignal, MemoryStore};

type TestTheme = ThemeController<MemoryStore, FixedSignal, ClassList>;

fn controller(store: &MemoryStore, prefers_dark: bool) -> (TestTheme, FixedSignal) {
    let signal = FixedSignal::new(prefers_dark);
    let theme = ThemeController::new(store.clone(), signal.clone(), ClassList::default());
    (theme, signal)
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_prefers_stored_value() {
    assert_eq!(resolve(Some(ThemeMode::Light), || true), (ThemeMode::Light, ModeSource::Stored));
    assert_eq!(resolve(Some(ThemeMode::Dark), || false), (ThemeMode::Dark, ModeSource::Stored));
}

#[test]
fn resolve_does_not_ask_ambient_when_stored() {
    let mut asked = false;
    let _ = resolve(Some(ThemeMode::Light), || {
        asked = true;
        true
    });
    assert!(!asked);
}

#[test]
fn resolve_uses_ambient_then_light() {
    assert_eq!(resolve(None, || true), (ThemeMode::Dark, ModeSource::Ambient));
    assert_eq!(resolve(None, || false), (ThemeMode::Light, ModeSource::Fallback));
}

// =============================================================
// initialize
// =============================================================

#[test]
fn new_controller_is_unresolved_light() {
    let (theme, _) = controller(&MemoryStore::empty(), true);
    assert_eq!(theme.current_mode(), ThemeMode::Light);
    assert_eq!(theme.source(), ModeSource::Unresolved);
    assert!(theme.target().markers().is_empty());
}

#[test]
fn persisted_light_beats_dark_signal() {
    let store = MemoryStore::holding("light");
    let (mut theme, signal) = controller(&store, true);
    assert_eq!(theme.initialize(), ThemeMode::Light);
    assert_eq!(theme.source(), ModeSource::Stored);
    assert_eq!(signal.queries(), 0);
    assert!(theme.is_persisted());
}

#[test]
fn empty_storage_without_signal_defaults_to_light() {
    let (mut theme, _) = controller(&MemoryStore::empty(), false);
    assert_eq!(theme.initialize(), ThemeMode::Light);
    assert_eq!(theme.source(), ModeSource::Fallback);
    assert_eq!(theme.target().markers(), vec![ThemeMode::Light]);
}

#[test]
fn empty_storage_with_signal_resolves_dark() {
    let (mut theme, signal) = controller(&MemoryStore::empty(), true);
    assert_eq!(theme.initialize(), ThemeMode::Dark);
    assert_eq!(theme.source(), ModeSource::Ambient);
    assert_eq!(signal.queries(), 1);
    assert_eq!(theme.target().markers(), vec![ThemeMode::Dark]);
}

#[test]
fn initialize_never_writes_storage() {
    let store = MemoryStore::empty();
    let (mut theme, _) = controller(&store, true);
    theme.initialize();
    assert_eq!(store.value(), None);
    assert_eq!(store.writes(), 0);
    assert!(!theme.is_persisted());
}

#[test]
fn invalid_stored_value_falls_through_to_signal() {
    let store = MemoryStore::holding("sepia");
    let (mut theme, signal) = controller(&store, true);
    assert_eq!(theme.initialize(), ThemeMode::Dark);
    assert_eq!(theme.source(), ModeSource::Ambient);
    assert_eq!(signal.queries(), 1);
    assert_eq!(store.value().as_deref(), Some("sepia"));
}

#[test]
fn unavailable_storage_falls_through_silently() {
    let (mut theme, _) = controller(&MemoryStore::unavailable(), false);
    assert_eq!(theme.initialize(), ThemeMode::Light);
    assert_eq!(theme.source(), ModeSource::Fallback);
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_persists_and_reapplies() {
    let store = MemoryStore::empty();
    let (mut theme, _) = controller(&store, false);
    theme.initialize();

    assert_eq!(theme.toggle(), ThemeMode::Dark);
    assert_eq!(store.value().as_deref(), Some("dark"));
    assert_eq!(theme.source(), ModeSource::Toggled);
    assert!(theme.is_persisted());
    assert_eq!(theme.target().markers(), vec![ThemeMode::Dark]);
}

#[test]
fn toggle_twice_round_trips() {
    for stored in ["light", "dark"] {
        let (mut theme, _) = controller(&MemoryStore::holding(stored), false);
        let original = theme.initialize();
        theme.toggle();
        theme.toggle();
        assert_eq!(theme.current_mode(), original);
    }
}

#[test]
fn mode_stays_in_domain_across_toggles() {
    let store = MemoryStore::empty();
    let (mut theme, _) = controller(&store, false);
    theme.initialize();
    for i in 0..25 {
        let mode = theme.toggle();
        assert!(ThemeMode::ALL.contains(&mode));
        assert_eq!(theme.target().markers(), vec![mode]);
        let expected = if i % 2 == 0 { ThemeMode::Dark } else { ThemeMode::Light };
        assert_eq!(mode, expected);
    }
    assert_eq!(store.writes(), 25);
}

#[test]
fn toggle_with_unavailable_storage_still_works_in_memory() {
    let store = MemoryStore::unavailable();
    let (mut theme, _) = controller(&store, false);
    theme.initialize();
    assert_eq!(theme.toggle(), ThemeMode::Dark);
    assert_eq!(theme.current_mode(), ThemeMode::Dark);
    assert!(!theme.is_persisted());
    assert_eq!(theme.target().markers(), vec![ThemeMode::Dark]);
}

// =============================================================
// Style markers
// =============================================================

#[test]
fn applying_same_mode_twice_keeps_one_marker() {
    let mut root = ClassList::default();
    root.apply(ThemeMode::Dark);
    root.apply(ThemeMode::Dark);
    assert_eq!(root.markers(), vec![ThemeMode::Dark]);
}

#[test]
fn markers_replace_each_other_and_leave_other_classes() {
    let mut theme = ThemeController::new(
        MemoryStore::holding("dark"),
        FixedSignal::new(false),
        ClassList::with_classes(&["light", "antialiased"]),
    );
    theme.initialize();
    assert_eq!(theme.target().markers(), vec![ThemeMode::Dark]);
    assert!(theme.target().contains("antialiased"));

    theme.toggle();
    assert_eq!(theme.target().markers(), vec![ThemeMode::Light]);
    assert!(theme.target().contains("antialiased"));
}

// =============================================================
// Sessions sharing one store
// =============================================================

#[test]
fn toggled_dark_survives_reload_without_asking_signal() {
    let store = MemoryStore::empty();
    let (mut first, _) = controller(&store, false);
    first.initialize();
    first.toggle();

    let (mut second, signal) = controller(&store, false);
    assert_eq!(second.initialize(), ThemeMode::Dark);
    assert_eq!(signal.queries(), 0);
}

#[test]
fn reload_after_toggle_ignores_dark_signal() {
    let store = MemoryStore::empty();

    let (mut first, _) = controller(&store, true);
    assert_eq!(first.initialize(), ThemeMode::Dark);
    assert_eq!(first.toggle(), ThemeMode::Light);
    assert_eq!(store.value().as_deref(), Some("light"));

    let (mut second, _) = controller(&store, true);
    assert_eq!(second.initialize(), ThemeMode::Light);
}
