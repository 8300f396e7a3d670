use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_flipped_swaps_modes() {
    assert_eq!(Theme::Light.flipped(), Theme::Dark);
    assert_eq!(Theme::Dark.flipped(), Theme::Light);
    assert_eq!(Theme::Dark.flipped().flipped(), Theme::Dark);
}

#[test]
fn theme_from_dark_matches_is_dark() {
    assert!(Theme::from_dark(true).is_dark());
    assert!(!Theme::from_dark(false).is_dark());
}

#[test]
fn theme_as_stored_is_string_boolean() {
    assert_eq!(Theme::Dark.as_stored(), "true");
    assert_eq!(Theme::Light.as_stored(), "false");
}

// =============================================================
// ThemePreference decoding
// =============================================================

#[test]
fn decode_absent_is_unset() {
    assert_eq!(ThemePreference::decode(None), ThemePreference::Unset);
}

#[test]
fn decode_true_is_dark() {
    assert_eq!(ThemePreference::decode(Some("true")), ThemePreference::Dark);
}

#[test]
fn decode_false_is_light() {
    assert_eq!(ThemePreference::decode(Some("false")), ThemePreference::Light);
}

#[test]
fn decode_unrecognized_value_is_explicit_light() {
    assert_eq!(ThemePreference::decode(Some("TRUE")), ThemePreference::Light);
    assert_eq!(ThemePreference::decode(Some("")), ThemePreference::Light);
    assert_eq!(ThemePreference::decode(Some("dark")), ThemePreference::Light);
}

#[test]
fn encode_unset_writes_nothing() {
    assert_eq!(ThemePreference::Unset.encode(), None);
    assert_eq!(ThemePreference::Dark.encode(), Some("true"));
    assert_eq!(ThemePreference::Light.encode(), Some("false"));
}

#[test]
fn preference_from_theme_is_explicit() {
    assert_eq!(ThemePreference::from(Theme::Dark), ThemePreference::Dark);
    assert_eq!(ThemePreference::from(Theme::Light), ThemePreference::Light);
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn unset_resolves_through_system_signal() {
    assert_eq!(ThemePreference::Unset.resolve(|| true), Theme::Dark);
    assert_eq!(ThemePreference::Unset.resolve(|| false), Theme::Light);
}

#[test]
fn stored_preference_never_queries_system() {
    let light = ThemePreference::Light.resolve(|| panic!("system signal queried"));
    let dark = ThemePreference::Dark.resolve(|| panic!("system signal queried"));
    assert_eq!(light, Theme::Light);
    assert_eq!(dark, Theme::Dark);
}

#[test]
fn theme_state_default_is_light() {
    assert_eq!(ThemeState::default().theme, Theme::Light);
}
