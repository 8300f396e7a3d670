//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from storage under `darkMode`, falling back to
//! the system color scheme, and applies the `.dark` class to the `<html>`
//! element. Toggle flips the class, writes the new value back, and swaps the
//! sun/moon icons on the toggle button.
//!
//! TRADE-OFFS
//! ==========
//! Every lookup is best-effort: a missing icon, button, or storage entry
//! degrades to default behavior instead of surfacing an error. SSR paths
//! no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::{DARK_CLASS, STORAGE_KEY, Theme, ThemePreference};
use crate::util::theme_env::{ColorSchemeQuery, PreferenceStore, ThemeDocument};

/// Id of the button that flips the theme.
pub const TOGGLE_BUTTON_ID: &str = "dark-mode-toggle";
/// Icon shown while dark mode is active.
pub const SUN_ICON_ID: &str = "sun-icon";
/// Icon shown while light mode is active.
pub const MOON_ICON_ID: &str = "moon-icon";

/// Theme state machine over a storage, a system signal, and a document.
///
/// The document's root class is the source of truth for the current mode;
/// storage only records what the user last chose.
#[derive(Debug)]
pub struct ThemeController<S, Q, D> {
    store: S,
    scheme: Q,
    document: D,
}

impl<S, Q, D> ThemeController<S, Q, D>
where
    S: PreferenceStore,
    Q: ColorSchemeQuery,
    D: ThemeDocument,
{
    pub fn new(store: S, scheme: Q, document: D) -> Self {
        Self {
            store,
            scheme,
            document,
        }
    }

    /// Persisted preference, `Unset` when nothing is stored.
    pub fn preference(&self) -> ThemePreference {
        ThemePreference::decode(self.store.get(STORAGE_KEY).as_deref())
    }

    /// Mode currently applied to the document.
    pub fn current(&self) -> Theme {
        Theme::from_dark(self.document.root_has_class(DARK_CLASS))
    }

    /// Apply the initial mode at load.
    ///
    /// Adds the dark class when the stored preference, or the system signal
    /// if nothing is stored, says dark. Never removes it.
    pub fn initialize(&self) -> Theme {
        let resolved = self.preference().resolve(|| self.scheme.prefers_dark());
        if resolved.is_dark() {
            self.document.set_root_class(DARK_CLASS, true);
        }
        self.current()
    }

    /// Flip the document mode, persist it, and sync the icons.
    pub fn toggle(&self) -> Theme {
        let next = self.current().flipped();
        self.document.set_root_class(DARK_CLASS, next.is_dark());
        self.store.set(STORAGE_KEY, next.as_stored());
        self.update_icon(next);
        next
    }

    /// Show the sun in dark mode and the moon in light mode.
    ///
    /// No-op unless both icons exist.
    pub fn update_icon(&self, theme: Theme) {
        if !(self.document.has_element(SUN_ICON_ID) && self.document.has_element(MOON_ICON_ID)) {
            return;
        }
        let is_dark = theme.is_dark();
        self.document.set_element_hidden(SUN_ICON_ID, !is_dark);
        self.document.set_element_hidden(MOON_ICON_ID, is_dark);
    }

    /// Page-ready step: sync the icons if the toggle button exists.
    ///
    /// Returns whether the button was found, i.e. whether a click handler
    /// should be attached.
    pub fn wire_button(&self) -> bool {
        if !self.document.has_element(TOGGLE_BUTTON_ID) {
            return false;
        }
        self.update_icon(self.current());
        true
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn document(&self) -> &D {
        &self.document
    }
}

/// Apply the initial mode to the page and return it.
///
/// Outside the browser this reports light.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        crate::util::browser::controller().initialize()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Flip dark mode on the page and persist the new preference.
///
/// In the browser the document's class decides the next mode; elsewhere this
/// simply flips `current`.
pub fn toggle(current: Theme) -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let _ = current;
        crate::util::browser::controller().toggle()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        current.flipped()
    }
}
