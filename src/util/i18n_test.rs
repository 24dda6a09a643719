use super::*;

#[test]
fn localize_returns_builtin_strings() {
    let messages = Messages::default();
    assert_eq!(messages.localize(RECENT_VIEWS), "Recent Views");
    assert_eq!(messages.localize(NO_RECENTLY_VIEWED_DATA), "No recently viewed data.");
}

#[test]
fn localize_prefers_overrides() {
    let mut overrides = BTreeMap::new();
    overrides.insert(RECENT_VIEWS.to_owned(), "Vistos recientemente".to_owned());
    let messages = Messages::with_overrides(overrides);
    assert_eq!(messages.localize(RECENT_VIEWS), "Vistos recientemente");
    assert_eq!(messages.localize(NO_RECENTLY_VIEWED_DATA), "No recently viewed data.");
}

#[test]
fn localize_unknown_key_echoes_key() {
    assert_eq!(Messages::default().localize("label.unknown"), "label.unknown");
}
