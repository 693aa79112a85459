//! Light/dark theme preference and its controller.
//!
//! DESIGN
//! ======
//! The preference lives in persistent key-value storage and is mirrored onto
//! the document root as a single marker class. Everything else in the UI
//! reads the resulting CSS cascade, never the boolean. `ThemeController` is
//! the only code path that touches either side, so storage and the marker
//! cannot drift apart.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures are logged and swallowed. A broken or missing store means
//! "Light" on read and a best-effort write on apply; neither is fatal.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Storage key holding the persisted preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class added to the document root while the dark theme is active.
pub const DARK_MARKER_CLASS: &str = "dark";

/// The user's light/dark display choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Sentinel string written to storage for this preference.
    #[must_use]
    pub fn sentinel(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a stored value. Only the exact dark sentinel selects `Dark`.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some(v) if v == Self::Dark.sentinel() => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The opposite preference.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Errors from the persistent preference store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend exists (server render, privacy mode, no window).
    #[error("storage unavailable")]
    Unavailable,

    /// The backend rejected a read.
    #[error("storage read failed: {0}")]
    Read(String),

    /// The backend rejected a write (quota, security policy).
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Persistent string key-value storage.
pub trait PreferenceStore {
    /// Read `key`. `Ok(None)` means the key was never written.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Mutation surface of the document root's class list.
pub trait DocumentRoot {
    fn add_marker(&self, class: &str);
    fn remove_marker(&self, class: &str);
}

/// Reconciles the in-memory preference with storage and the document root.
pub struct ThemeController<S, D> {
    store: S,
    root: D,
}

impl<S: PreferenceStore, D: DocumentRoot> ThemeController<S, D> {
    pub fn new(store: S, root: D) -> Self {
        Self { store, root }
    }

    /// Read the persisted preference, defaulting to `Light`.
    pub fn initialize(&self) -> ThemePreference {
        match self.store.get(THEME_STORAGE_KEY) {
            Ok(raw) => ThemePreference::from_stored(raw.as_deref()),
            Err(e) => {
                leptos::logging::warn!("theme: read failed, using light: {e}");
                ThemePreference::Light
            }
        }
    }

    /// Push `pref` onto the document root and into storage.
    pub fn apply(&self, pref: ThemePreference) {
        if pref.is_dark() {
            self.root.add_marker(DARK_MARKER_CLASS);
        } else {
            self.root.remove_marker(DARK_MARKER_CLASS);
        }
        if let Err(e) = self.store.set(THEME_STORAGE_KEY, pref.sentinel()) {
            leptos::logging::warn!("theme: persist failed: {e}");
        }
    }

    /// Pure transition; callers pass the result to [`Self::apply`].
    #[must_use]
    pub fn toggle(current: ThemePreference) -> ThemePreference {
        current.toggled()
    }

    /// `apply(toggle(current))`, returning the new preference.
    pub fn toggle_and_apply(&self, current: ThemePreference) -> ThemePreference {
        let next = Self::toggle(current);
        self.apply(next);
        next
    }

    /// Initialize and immediately apply, so the marker matches storage.
    pub fn restore(&self) -> ThemePreference {
        let pref = self.initialize();
        self.apply(pref);
        pref
    }
}
