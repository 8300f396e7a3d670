//! Landing page with the site header.

use leptos::prelude::*;

use crate::components::dark_mode_toggle::DarkModeToggle;
use crate::state::theme::ThemeState;

#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<RwSignal<ThemeState>>();
    let mode = move || if state.get().theme.is_dark() { "dark" } else { "light" };

    view! {
        <div class="home-page">
            <header class="home-page__header toolbar">
                <span class="toolbar__title">"Documentation"</span>
                <span class="toolbar__spacer"></span>
                <DarkModeToggle/>
            </header>
            <main class="home-page__content">
                <p>"Current theme: " <strong>{mode}</strong></p>
            </main>
        </div>
    }
}
