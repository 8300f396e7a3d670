#![cfg(feature = "ssr")]

use super::*;

fn render(state: ThemeState) -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RwSignal::new(state));
        view! { <DarkModeToggle/> }.to_html()
    })
}

/// Opening tag of the element carrying `id`.
fn opening_tag<'a>(html: &'a str, id: &str) -> &'a str {
    let marker = format!("id=\"{id}\"");
    let at = html
        .find(&marker)
        .unwrap_or_else(|| panic!("missing #{id} in {html}"));
    let start = html[..at].rfind('<').unwrap();
    let end = at + html[at..].find('>').unwrap();
    &html[start..=end]
}

fn class_attr(tag: &str) -> &str {
    let start = tag.find("class=\"").expect("class attribute") + "class=\"".len();
    let end = start + tag[start..].find('"').unwrap();
    &tag[start..end]
}

fn is_hidden(html: &str, id: &str) -> bool {
    class_attr(opening_tag(html, id))
        .split_whitespace()
        .any(|class| class == "hidden")
}

#[test]
fn renders_button_and_both_icons() {
    let html = render(ThemeState::default());
    assert!(opening_tag(&html, TOGGLE_BUTTON_ID).starts_with("<button"));
    assert!(opening_tag(&html, SUN_ICON_ID).starts_with("<span"));
    assert!(opening_tag(&html, MOON_ICON_ID).starts_with("<span"));
}

#[test]
fn first_render_is_light_with_moon_visible() {
    let html = render(ThemeState::default());
    assert!(is_hidden(&html, SUN_ICON_ID));
    assert!(!is_hidden(&html, MOON_ICON_ID));
    assert!(opening_tag(&html, TOGGLE_BUTTON_ID).contains("Switch to dark mode"));
}

#[test]
fn dark_state_renders_sun_visible() {
    let html = render(ThemeState {
        theme: crate::state::theme::Theme::Dark,
    });
    assert!(!is_hidden(&html, SUN_ICON_ID));
    assert!(is_hidden(&html, MOON_ICON_ID));
    assert!(opening_tag(&html, TOGGLE_BUTTON_ID).contains("Switch to light mode"));
}
