//! App-wide light/dark theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `ThemeController` exists per session. `provide_theme` installs it as
//! Leptos context at the app root and initializes it once the app is live in
//! the browser. Components read the mode through `ThemeHandle::mode` and only
//! the toggle button calls `ThemeHandle::toggle`.

pub mod browser;
pub mod controller;
#[cfg(test)]
pub mod memory;
pub mod mode;

use leptos::prelude::*;

pub use browser::{DocumentRoot, LocalStorage, PrefersColorScheme};
pub use controller::{AmbientSignal, ModeSource, PreferenceStore, StoreError, StyleTarget, ThemeController};
pub use mode::{STORAGE_KEY, ThemeMode, ThemeParseError};

/// The controller wired to the real browser backends.
pub type BrowserTheme = ThemeController<LocalStorage, PrefersColorScheme, DocumentRoot>;

/// Context handle to the session's theme controller.
#[derive(Clone, Copy)]
pub struct ThemeHandle {
    controller: RwSignal<BrowserTheme>,
}

impl ThemeHandle {
    /// Current mode. Reactive when read inside a view or effect.
    pub fn mode(&self) -> ThemeMode {
        self.controller.with(|c| c.current_mode())
    }

    pub fn toggle(&self) {
        self.controller.update(|c| {
            let next = c.toggle();
            leptos::logging::log!("theme: switched to {next}");
        });
    }

    fn initialize(&self) {
        self.controller.update(|c| {
            let mode = c.initialize();
            leptos::logging::log!("theme: starting in {mode} ({:?})", c.source());
        });
    }
}

/// Create the session controller and provide it as context.
///
/// Initialization runs in an effect, so it happens after hydration and never
/// during server rendering.
pub fn provide_theme() -> ThemeHandle {
    let handle = ThemeHandle {
        controller: RwSignal::new(BrowserTheme::new(LocalStorage, PrefersColorScheme, DocumentRoot)),
    };
    provide_context(handle);
    Effect::new(move || handle.initialize());
    handle
}

/// The theme handle provided by `App`.
pub fn use_theme() -> ThemeHandle {
    expect_context::<ThemeHandle>()
}
