//! Dark mode toggle button with sun/moon icons.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the DOM contract the theme controller expects (`#dark-mode-toggle`,
//! `#sun-icon`, `#moon-icon`) and mirrors the controller's result into the
//! shared `ThemeState` so other components can react to the mode.

#[cfg(test)]
#[path = "dark_mode_toggle_test.rs"]
mod dark_mode_toggle_test;

use leptos::prelude::*;

use crate::state::theme::ThemeState;
use crate::util::dark_mode::{self, MOON_ICON_ID, SUN_ICON_ID, TOGGLE_BUTTON_ID};

/// Theme toggle button. Requires `RwSignal<ThemeState>` in context.
#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let state = expect_context::<RwSignal<ThemeState>>();

    // Client-only: effects don't run during SSR.
    Effect::new(move |_| {
        let initial = dark_mode::read_preference();
        state.update(|s| s.theme = initial);
    });

    let is_dark = move || state.get().theme.is_dark();
    let label = move || if is_dark() { "Switch to light mode" } else { "Switch to dark mode" };

    view! {
        <button
            id=TOGGLE_BUTTON_ID
            class="btn toolbar__dark-toggle"
            on:click=move |_| {
                let current = state.get_untracked().theme;
                let next = dark_mode::toggle(current);
                state.update(|s| s.theme = next);
            }
            title=label
            aria-label=label
        >
            <span id=SUN_ICON_ID class="toolbar__dark-icon" class:hidden=move || !is_dark()>
                "☀"
            </span>
            <span id=MOON_ICON_ID class="toolbar__dark-icon" class:hidden=is_dark>
                "☾"
            </span>
        </button>
    }
}
