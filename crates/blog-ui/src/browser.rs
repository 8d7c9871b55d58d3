//! Browser-backed capabilities for the theme store.

use blog_core::{CoreError, PreferenceStorage, Result, SystemPreference, ThemeState, ThemeStore};
use wasm_bindgen::JsValue;

/// Media query for the system dark-mode signal.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Attribute on `<html>` carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// `window.localStorage`.
///
/// The storage object is looked up on every access, so a handle stays valid
/// and `Send` even though the browser object is not.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage(key: &str) -> Result<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| CoreError::storage(key, "no window"))?;
        window
            .local_storage()
            .map_err(|err| js_error(key, &err))?
            .ok_or_else(|| CoreError::storage(key, "localStorage is disabled"))
    }

    /// Whether `localStorage` can be reached at all.
    pub fn is_available() -> bool {
        Self::local_storage("").is_ok()
    }
}

impl PreferenceStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Self::local_storage(key)?
            .get_item(key)
            .map_err(|err| js_error(key, &err))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        Self::local_storage(key)?
            .set_item(key, value)
            .map_err(|err| js_error(key, &err))
    }
}

fn js_error(key: &str, err: &JsValue) -> CoreError {
    CoreError::storage(key, format!("{err:?}"))
}

/// `matchMedia("(prefers-color-scheme: dark)")`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaQueryPreference;

impl SystemPreference for MediaQueryPreference {
    fn prefers_dark(&self) -> Option<bool> {
        web_sys::window()?
            .match_media(PREFERS_DARK_QUERY)
            .ok()
            .flatten()
            .map(|list| list.matches())
    }
}

/// Build the application's theme store from the browser environment.
///
/// Falls back to session-only storage when `localStorage` is unavailable.
pub fn theme_store(storage_key: &str) -> ThemeStore {
    if BrowserStorage::is_available() {
        ThemeStore::resolve(BrowserStorage, storage_key, &MediaQueryPreference)
    } else {
        log::warn!("localStorage unavailable, theme choice will not persist");
        ThemeStore::with_session_storage(storage_key, &MediaQueryPreference)
    }
}

/// Reflect `state` as `data-theme` on the document element.
pub fn set_root_theme(state: ThemeState) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let result = match state.theme() {
        Some(theme) => root.set_attribute(THEME_ATTRIBUTE, theme.as_str()),
        None => root.remove_attribute(THEME_ATTRIBUTE),
    };
    if let Err(err) = result {
        log::warn!("could not set {THEME_ATTRIBUTE}: {err:?}");
    }
}
