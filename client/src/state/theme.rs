//! Theme preference model.
//!
//! DESIGN
//! ======
//! `ThemePreference` is what the user stored (or didn't); `Theme` is what the
//! page actually shows once the system signal has been consulted. Keeping the
//! two apart means an unset preference never gets written back by accident.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Storage key holding the persisted preference.
pub const STORAGE_KEY: &str = "darkMode";

/// Class on the document root that switches theme-dependent styling.
pub const DARK_CLASS: &str = "dark";

/// Resolved visual mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The opposite mode.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// String-encoded boolean written to storage.
    pub fn as_stored(self) -> &'static str {
        if self.is_dark() { "true" } else { "false" }
    }
}

/// User preference as persisted in key-value storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    /// Nothing stored; defer to the system color scheme.
    #[default]
    Unset,
    Light,
    Dark,
}

impl ThemePreference {
    /// Decode a raw storage value.
    ///
    /// Only `"true"` selects dark. Any other stored string still counts as an
    /// explicit choice and selects light, so the system signal is ignored.
    pub fn decode(stored: Option<&str>) -> Self {
        match stored {
            None => Self::Unset,
            Some("true") => Self::Dark,
            Some(_) => Self::Light,
        }
    }

    /// Raw storage value, `None` when unset.
    pub fn encode(self) -> Option<&'static str> {
        match self {
            Self::Unset => None,
            Self::Light => Some(Theme::Light.as_stored()),
            Self::Dark => Some(Theme::Dark.as_stored()),
        }
    }

    /// Resolve to a concrete theme. `system_prefers_dark` is only queried
    /// when no preference is stored.
    pub fn resolve(self, system_prefers_dark: impl FnOnce() -> bool) -> Theme {
        match self {
            Self::Unset => Theme::from_dark(system_prefers_dark()),
            Self::Light => Theme::Light,
            Self::Dark => Theme::Dark,
        }
    }
}

impl From<Theme> for ThemePreference {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::Light,
            Theme::Dark => Self::Dark,
        }
    }
}

/// Reactive theme state shared through Leptos context.
///
/// Starts light so server-rendered markup is deterministic; hydration syncs it
/// with the browser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
}
