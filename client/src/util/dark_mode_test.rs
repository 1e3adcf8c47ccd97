use super::*;

#[test]
fn toggled_alternates() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn stored_values_parse() {
    assert_eq!(Theme::from_stored("true"), Some(Theme::Dark));
    assert_eq!(Theme::from_stored("light"), Some(Theme::Light));
    assert_eq!(Theme::from_stored("sepia"), None);
}

#[test]
fn attr_matches_stylesheet_selectors() {
    assert_eq!(Theme::Dark.attr(), "dark");
    assert_eq!(Theme::Light.attr(), "light");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_defaults_to_light_and_toggle_still_flips() {
    assert_eq!(read_preference(), Theme::Light);
    assert_eq!(toggle(Theme::Light), Theme::Dark);
    apply(Theme::Dark);
}
