use super::*;

// =============================================================
// EntityType
// =============================================================

#[test]
fn entity_type_parses_known_names() {
    assert_eq!(EntityType::parse("table"), EntityType::Table);
    assert_eq!(EntityType::parse("databaseSchema"), EntityType::DatabaseSchema);
    assert_eq!(EntityType::parse("glossaryTerm"), EntityType::GlossaryTerm);
}

#[test]
fn entity_type_keeps_unknown_names() {
    assert_eq!(EntityType::parse("widget"), EntityType::Other("widget".to_owned()));
    assert_eq!(EntityType::parse(""), EntityType::Other(String::new()));
}

#[test]
fn glossary_terms_share_glossary_route() {
    assert_eq!(EntityType::GlossaryTerm.route(), EntityType::Glossary.route());
    assert_eq!(EntityType::Other("x".to_owned()).route(), None);
}

// =============================================================
// split_fqn
// =============================================================

#[test]
fn split_fqn_splits_on_dots() {
    assert_eq!(split_fqn("svc.db.schema.orders"), vec!["svc", "db", "schema", "orders"]);
}

#[test]
fn split_fqn_keeps_quoted_segments() {
    assert_eq!(split_fqn("svc.\"db.v2\".orders"), vec!["svc", "\"db.v2\"", "orders"]);
}

#[test]
fn split_fqn_empty_has_no_parts() {
    assert!(split_fqn("").is_empty());
}

// =============================================================
// label_for
// =============================================================

#[test]
fn table_label_uses_table_part_of_full_fqn() {
    assert_eq!(label_for("table", "mysql.shop.public.orders"), "orders");
}

#[test]
fn table_label_uses_last_part_of_short_fqn() {
    assert_eq!(label_for("table", "db.schema.orders"), "orders");
}

#[test]
fn non_table_label_drops_service_segment() {
    assert_eq!(label_for("dashboard", "looker.sales_overview"), "sales_overview");
    assert_eq!(label_for("databaseSchema", "mysql.shop.public"), "shop.public");
}

#[test]
fn service_only_fqn_has_empty_label() {
    assert_eq!(label_for("glossary", "Business"), "");
    assert_eq!(label_for("topic", ""), "");
}

#[test]
fn table_label_of_empty_fqn_is_empty() {
    assert_eq!(label_for("table", ""), "");
}

// =============================================================
// icon_for
// =============================================================

#[test]
fn icon_for_known_type_is_specific() {
    let icon = icon_for("table");
    assert_eq!(icon.label, "Table");
    assert!(icon.class.contains("entity-icon--table"));
}

#[test]
fn icon_for_unknown_or_missing_type_is_generic() {
    assert_eq!(icon_for("spaceship"), GENERIC_ICON);
    assert_eq!(icon_for(""), GENERIC_ICON);
}

// =============================================================
// link_for / encode_fqn
// =============================================================

#[test]
fn link_for_table_routes_to_table_page() {
    assert_eq!(link_for("table", "db.schema.orders"), "/table/db.schema.orders");
}

#[test]
fn link_for_encodes_reserved_characters() {
    assert_eq!(link_for("topic", "kafka.\"a/b\""), "/topic/kafka.%22a%2Fb%22");
}

#[test]
fn link_for_unknown_type_or_empty_fqn_goes_to_explore() {
    assert_eq!(link_for("", "db.schema.orders"), EXPLORE_ROUTE);
    assert_eq!(link_for("table", ""), EXPLORE_ROUTE);
}

#[test]
fn link_for_escapes_literal_percent_once() {
    assert_eq!(link_for("table", "svc.db.schema.growth%25_q3"), "/table/svc.db.schema.growth%2525_q3");
}

// =============================================================
// display_label
// =============================================================

#[test]
fn display_label_keeps_short_names() {
    assert_eq!(display_label("orders", 10), "orders");
    assert_eq!(display_label("orders", 0), "orders");
}

#[test]
fn display_label_truncates_by_chars() {
    assert_eq!(display_label("customer_orders", 8), "custome\u{2026}");
    assert_eq!(display_label("ääääää", 4), "äää\u{2026}");
}

// =============================================================
// CatalogResolver
// =============================================================

#[test]
fn catalog_resolver_delegates_to_free_functions() {
    let resolver = ResolverHandle::default();
    assert_eq!(resolver.0.label_for("table", "a.b.c.d"), label_for("table", "a.b.c.d"));
    assert_eq!(resolver.0.icon_for("topic"), icon_for("topic"));
    assert_eq!(resolver.0.link_for("pipeline", "airflow.etl"), "/pipeline/airflow.etl");
}
