#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_dark_in_non_hydrate_tests() {
    assert_eq!(read_preference(), Theme::Dark);
}

#[test]
fn toggle_flips_theme() {
    assert_eq!(toggle(Theme::Dark), Theme::Light);
    assert_eq!(toggle(Theme::Light), Theme::Dark);
}

#[test]
fn parse_accepts_stored_values_only() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
    assert_eq!(Theme::parse("sepia"), None);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}
