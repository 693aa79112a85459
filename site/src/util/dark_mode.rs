//! Browser bindings for the theme controller.
//!
//! `BrowserStorage` wraps `window.localStorage` and `HtmlRoot` wraps the
//! `<html>` element's class list. Both are inert outside the browser: the
//! store reports itself unavailable and the root ignores mutations, which
//! keeps server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::{DocumentRoot, PreferenceStore, StorageError, ThemeController};

/// `localStorage`-backed preference store.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    window
        .local_storage()
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

/// Class list of `document.documentElement`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlRoot;

#[cfg(feature = "hydrate")]
fn root_class_list() -> Option<web_sys::DomTokenList> {
    let el = web_sys::window()?.document()?.document_element()?;
    Some(el.class_list())
}

impl DocumentRoot for HtmlRoot {
    fn add_marker(&self, class: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(list) = root_class_list() {
                let _ = list.add_1(class);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = class;
        }
    }

    fn remove_marker(&self, class: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(list) = root_class_list() {
                let _ = list.remove_1(class);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = class;
        }
    }
}

/// Theme controller wired to the real browser.
pub type BrowserThemeController = ThemeController<BrowserStorage, HtmlRoot>;

#[must_use]
pub fn browser_controller() -> BrowserThemeController {
    ThemeController::new(BrowserStorage, HtmlRoot)
}
