use super::*;
use crate::util::i18n::RECENT_VIEWS;

#[test]
fn defaults_match_widget_constants() {
    let cfg = CatalogUiConfig::default();
    assert_eq!(cfg.recently_viewed.storage_key, DEFAULT_STORAGE_KEY);
    assert_eq!(cfg.recently_viewed.capacity, DEFAULT_CAPACITY);
    assert_eq!(cfg.recently_viewed.placeholder_rows, 5);
    assert!(cfg.messages.is_empty());
    assert!(cfg.validate().is_ok());
}

#[test]
fn from_json_fills_missing_fields_with_defaults() {
    let cfg = CatalogUiConfig::from_json(r#"{"recently_viewed":{"capacity":3}}"#).unwrap();
    assert_eq!(cfg.recently_viewed.capacity, 3);
    assert_eq!(cfg.recently_viewed.storage_key, DEFAULT_STORAGE_KEY);
    assert_eq!(cfg.recently_viewed.placeholder_rows, DEFAULT_PLACEHOLDER_ROWS);
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(CatalogUiConfig::from_json("{}").unwrap(), CatalogUiConfig::default());
}

#[test]
fn from_json_rejects_malformed_json() {
    assert!(matches!(CatalogUiConfig::from_json("{"), Err(ConfigError::Parse(_))));
    assert!(matches!(
        CatalogUiConfig::from_json(r#"{"recently_viewed":{"capacity":"lots"}}"#),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn from_json_rejects_zero_capacity() {
    let err = CatalogUiConfig::from_json(r#"{"recently_viewed":{"capacity":0}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "recently_viewed.capacity", .. }));
}

#[test]
fn from_json_rejects_blank_storage_key() {
    let err = CatalogUiConfig::from_json(r#"{"recently_viewed":{"storage_key":"  "}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "recently_viewed.storage_key", .. }));
}

#[test]
fn from_json_rejects_zero_placeholder_rows() {
    let err = CatalogUiConfig::from_json(r#"{"recently_viewed":{"placeholder_rows":0}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "recently_viewed.placeholder_rows", .. }));
}

#[test]
fn message_overrides_flow_into_messages() {
    let cfg = CatalogUiConfig::from_json(r#"{"messages":{"label.recent-views":"Zuletzt angesehen"}}"#).unwrap();
    assert_eq!(cfg.messages().localize(RECENT_VIEWS), "Zuletzt angesehen");
}

#[test]
fn load_outside_browser_is_default() {
    assert_eq!(CatalogUiConfig::load(), CatalogUiConfig::default());
}
