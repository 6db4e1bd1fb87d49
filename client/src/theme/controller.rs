//! Theme preference controller.
//!
//! DESIGN
//! ======
//! The controller is the single owner of the display mode. Storage, the
//! platform's dark-mode hint and the document root are reached only through
//! the three traits below, so the resolution chain and the one-marker
//! invariant are enforced here and nowhere else.
//!
//! LIFECYCLE
//! =========
//! `new` -> `initialize` once per session -> any number of `toggle`s.
//! Initialization never writes storage; only an explicit toggle persists.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures are logged and otherwise ignored. The preference keeps
//! working in memory for the rest of the session.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use super::mode::ThemeMode;

/// Durable key-value storage for the persisted preference.
pub trait PreferenceStore {
    /// Read the raw persisted value, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when storage cannot be reached.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Overwrite the persisted value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when storage cannot be reached or refuses the write.
    fn save(&mut self, value: &str) -> Result<(), StoreError>;
}

/// Read-only platform hint: does the user prefer a dark display?
pub trait AmbientSignal {
    fn prefers_dark(&self) -> bool;
}

/// The document scope that carries the active style marker.
pub trait StyleTarget {
    /// Make `mode` the only marker present.
    fn apply(&mut self, mode: ThemeMode);
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No storage exists in this environment (SSR, privacy mode, ...).
    #[error("preference storage unavailable")]
    Unavailable,

    /// Storage exists but the read or write was rejected.
    #[error("preference storage access failed: {0}")]
    Access(String),
}

/// Where the current mode was resolved from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeSource {
    /// Not initialized yet.
    #[default]
    Unresolved,
    Stored,
    Ambient,
    Fallback,
    Toggled,
}

/// Resolution chain: stored value, then ambient hint, then light.
///
/// `prefers_dark` is only called when nothing valid is stored.
pub fn resolve(stored: Option<ThemeMode>, prefers_dark: impl FnOnce() -> bool) -> (ThemeMode, ModeSource) {
    match stored {
        Some(mode) => (mode, ModeSource::Stored),
        None if prefers_dark() => (ThemeMode::Dark, ModeSource::Ambient),
        None => (ThemeMode::Light, ModeSource::Fallback),
    }
}

#[derive(Debug, Clone)]
pub struct ThemeController<S, A, T> {
    store: S,
    ambient: A,
    target: T,
    mode: ThemeMode,
    source: ModeSource,
    persisted: bool,
}

impl<S, A, T> ThemeController<S, A, T>
where
    S: PreferenceStore,
    A: AmbientSignal,
    T: StyleTarget,
{
    pub fn new(store: S, ambient: A, target: T) -> Self {
        Self {
            store,
            ambient,
            target,
            mode: ThemeMode::Light,
            source: ModeSource::Unresolved,
            persisted: false,
        }
    }

    /// Resolve the starting mode and apply its style marker.
    ///
    /// The ambient signal is consulted only when no valid stored value exists.
    pub fn initialize(&mut self) -> ThemeMode {
        let stored = match self.store.load() {
            Ok(value) => value,
            Err(e) => {
                leptos::logging::warn!("theme: reading stored preference failed: {e}");
                None
            }
        };

        let stored = stored.and_then(|raw| match raw.parse::<ThemeMode>() {
            Ok(mode) => Some(mode),
            Err(e) => {
                leptos::logging::warn!("theme: ignoring stored preference: {e}");
                None
            }
        });

        let (mode, source) = resolve(stored, || self.ambient.prefers_dark());
        self.mode = mode;
        self.source = source;
        self.persisted = source == ModeSource::Stored;
        self.target.apply(mode);
        mode
    }

    /// Flip the mode, persist it, and reapply the style marker.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.source = ModeSource::Toggled;
        self.target.apply(self.mode);
        self.persisted = match self.store.save(self.mode.as_str()) {
            Ok(()) => true,
            Err(e) => {
                leptos::logging::warn!("theme: persisting preference failed: {e}");
                false
            }
        };
        self.mode
    }

    pub fn current_mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn source(&self) -> ModeSource {
        self.source
    }

    /// Whether the current mode matches what storage holds.
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    #[cfg(test)]
    pub fn target(&self) -> &T {
        &self.target
    }
}
