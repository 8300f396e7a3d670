//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::theme::ThemeState;

/// Applies the stored or system mode before first paint.
///
/// Mirrors `ThemeController::initialize`; the wasm bundle loads too late to
/// avoid a light flash on dark pages.
pub const PRE_PAINT_SCRIPT: &str = r"(function(){try{var v=localStorage.getItem('darkMode');if(v==='true'||(v===null&&window.matchMedia('(prefers-color-scheme: dark)').matches)){document.documentElement.classList.add('dark');}}catch(e){}})();";

/// Stylesheet defining `html.dark` and the `.hidden` icon rule, served from
/// the host's `/static` mount.
pub const THEME_STYLESHEET: &str = "/static/theme.css";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script inner_html=PRE_PAINT_SCRIPT></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemeState::default());
    provide_context(theme);

    view! {
        <Stylesheet id="theme" href=THEME_STYLESHEET/>
        <Title text="Documentation"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
