//! Browser backends for the theme controller.
//!
//! Reads and writes the preference in `localStorage`, queries the
//! `prefers-color-scheme` media feature, and toggles the `light`/`dark` class
//! on the `<html>` element. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Outside the `hydrate` build every backend degrades to "nothing there":
//! storage is unavailable, the platform does not prefer dark, and applying a
//! marker is a no-op. Server rendering stays deterministic as a result.

use super::controller::{AmbientSignal, PreferenceStore, StoreError, StyleTarget};
use super::mode::ThemeMode;
#[cfg(feature = "hydrate")]
use super::mode::STORAGE_KEY;

#[cfg(feature = "hydrate")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// `window.localStorage` under the fixed `theme` key.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

/// `window.matchMedia("(prefers-color-scheme: dark)")`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrefersColorScheme;

/// Class list of `document.documentElement`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    let window = web_sys::window().ok_or(StoreError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StoreError::Unavailable),
        Err(e) => Err(StoreError::Access(format!("{e:?}"))),
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(STORAGE_KEY)
                .map_err(|e| StoreError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StoreError::Unavailable)
        }
    }

    fn save(&mut self, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(STORAGE_KEY, value)
                .map_err(|e| StoreError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
            Err(StoreError::Unavailable)
        }
    }
}

impl AmbientSignal for PrefersColorScheme {
    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
                .map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

impl StyleTarget for DocumentRoot {
    fn apply(&mut self, mode: ThemeMode) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
            {
                let class_list = el.class_list();
                let _ = class_list.remove_1(mode.toggled().as_str());
                let _ = class_list.add_1(mode.as_str());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = mode;
        }
    }
}

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;
