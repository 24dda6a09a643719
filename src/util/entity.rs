//! Entity label, icon, and link resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every catalog object is addressed by `(entity type, fqn)`. These helpers
//! turn that pair into what a list row needs: a readable label, an icon, and
//! a route. Resolution is total: unknown types and malformed FQNs fall back
//! to generic icons and the explore route instead of failing.

#[cfg(test)]
#[path = "entity_test.rs"]
mod entity_test;

use std::sync::Arc;

pub const FQN_SEPARATOR: char = '.';
const FQN_SEPARATOR_STR: &str = ".";
pub const EXPLORE_ROUTE: &str = "/explore";
const ELLIPSIS: char = '\u{2026}';

/// Catalog entity kinds that have a dedicated page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntityType {
    Table,
    Topic,
    Dashboard,
    Pipeline,
    MlModel,
    Container,
    Database,
    DatabaseSchema,
    Glossary,
    GlossaryTerm,
    DashboardDataModel,
    StoredProcedure,
    SearchIndex,
    Tag,
    Other(String),
}

impl EntityType {
    /// Parse the wire name of an entity type. Never fails.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "table" => Self::Table,
            "topic" => Self::Topic,
            "dashboard" => Self::Dashboard,
            "pipeline" => Self::Pipeline,
            "mlmodel" => Self::MlModel,
            "container" => Self::Container,
            "database" => Self::Database,
            "databaseSchema" => Self::DatabaseSchema,
            "glossary" => Self::Glossary,
            "glossaryTerm" => Self::GlossaryTerm,
            "dashboardDataModel" => Self::DashboardDataModel,
            "storedProcedure" => Self::StoredProcedure,
            "searchIndex" => Self::SearchIndex,
            "tag" => Self::Tag,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Route prefix for the entity page, `None` for unknown types.
    pub fn route(&self) -> Option<&'static str> {
        match self {
            Self::Table => Some("table"),
            Self::Topic => Some("topic"),
            Self::Dashboard => Some("dashboard"),
            Self::Pipeline => Some("pipeline"),
            Self::MlModel => Some("mlmodel"),
            Self::Container => Some("container"),
            Self::Database => Some("database"),
            Self::DatabaseSchema => Some("databaseSchema"),
            Self::Glossary | Self::GlossaryTerm => Some("glossary"),
            Self::DashboardDataModel => Some("dashboardDataModel"),
            Self::StoredProcedure => Some("storedProcedure"),
            Self::SearchIndex => Some("searchIndex"),
            Self::Tag => Some("tags"),
            Self::Other(_) => None,
        }
    }
}

/// Renderable icon handle for an entity type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntityIcon {
    pub glyph: &'static str,
    pub class: &'static str,
    pub label: &'static str,
}

pub const GENERIC_ICON: EntityIcon = EntityIcon {
    glyph: "\u{25A1}",
    class: "entity-icon entity-icon--generic",
    label: "Entity",
};

/// Split an FQN on dots, keeping double-quoted segments intact.
///
/// `svc."db.v2".orders` yields `["svc", "\"db.v2\"", "orders"]`. An empty
/// FQN yields no parts.
pub fn split_fqn(fqn: &str) -> Vec<String> {
    if fqn.is_empty() {
        return Vec::new();
    }
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    for ch in fqn.chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                current.push(ch);
            }
            FQN_SEPARATOR if !quoted => parts.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    parts.push(current);
    parts
}

/// Synthesize a display label from an entity type and FQN.
///
/// Tables show their table-name part; other entities drop the leading
/// service segment. A non-table FQN with only a service segment has no
/// label and yields an empty string.
pub fn label_for(entity_type: &str, fqn: &str) -> String {
    let parts = split_fqn(fqn);
    match EntityType::parse(entity_type) {
        EntityType::Table => {
            if parts.len() > 3 {
                parts[3..].join(FQN_SEPARATOR_STR)
            } else {
                parts.last().cloned().unwrap_or_default()
            }
        }
        _ => parts.get(1..).map(|rest| rest.join(FQN_SEPARATOR_STR)).unwrap_or_default(),
    }
}

pub fn icon_for(entity_type: &str) -> EntityIcon {
    let (glyph, class, label) = match EntityType::parse(entity_type) {
        EntityType::Table => ("\u{25A6}", "entity-icon entity-icon--table", "Table"),
        EntityType::Topic => ("\u{21C4}", "entity-icon entity-icon--topic", "Topic"),
        EntityType::Dashboard => ("\u{25A3}", "entity-icon entity-icon--dashboard", "Dashboard"),
        EntityType::Pipeline => ("\u{2192}", "entity-icon entity-icon--pipeline", "Pipeline"),
        EntityType::MlModel => ("\u{2699}", "entity-icon entity-icon--mlmodel", "ML Model"),
        EntityType::Container => ("\u{25A2}", "entity-icon entity-icon--container", "Container"),
        EntityType::Database => ("\u{26C1}", "entity-icon entity-icon--database", "Database"),
        EntityType::DatabaseSchema => ("\u{2637}", "entity-icon entity-icon--schema", "Schema"),
        EntityType::Glossary | EntityType::GlossaryTerm => {
            ("\u{2261}", "entity-icon entity-icon--glossary", "Glossary")
        }
        EntityType::DashboardDataModel => ("\u{25C8}", "entity-icon entity-icon--data-model", "Data Model"),
        EntityType::StoredProcedure => ("\u{0192}", "entity-icon entity-icon--procedure", "Stored Procedure"),
        EntityType::SearchIndex => ("\u{2315}", "entity-icon entity-icon--search-index", "Search Index"),
        EntityType::Tag => ("#", "entity-icon entity-icon--tag", "Tag"),
        EntityType::Other(_) => return GENERIC_ICON,
    };
    EntityIcon { glyph, class, label }
}

/// Route for an entity page. Unknown types and empty FQNs go to explore.
pub fn link_for(entity_type: &str, fully_qualified_name: &str) -> String {
    match EntityType::parse(entity_type).route() {
        Some(route) if !fully_qualified_name.is_empty() => {
            format!("/{route}/{}", encode_fqn(fully_qualified_name))
        }
        _ => EXPLORE_ROUTE.to_owned(),
    }
}

/// Percent-encode an FQN for use as a single path segment.
pub fn encode_fqn(fqn: &str) -> String {
    let mut out = String::with_capacity(fqn.len());
    for byte in fqn.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// Visible label, truncated to `max_chars` characters with an ellipsis.
///
/// `max_chars == 0` disables truncation.
pub fn display_label(name: &str, max_chars: usize) -> String {
    if max_chars == 0 || name.chars().count() <= max_chars {
        return name.to_owned();
    }
    let mut out: String = name.chars().take(max_chars.saturating_sub(1)).collect();
    out.push(ELLIPSIS);
    out
}

/// Injectable label/icon/link resolution.
pub trait EntityResolver: Send + Sync {
    fn label_for(&self, entity_type: &str, fqn: &str) -> String;
    fn icon_for(&self, entity_type: &str) -> EntityIcon;
    fn link_for(&self, entity_type: &str, fully_qualified_name: &str) -> String;
}

/// Resolver backed by the catalog routing rules above.
#[derive(Clone, Copy, Debug, Default)]
pub struct CatalogResolver;

impl EntityResolver for CatalogResolver {
    fn label_for(&self, entity_type: &str, fqn: &str) -> String {
        label_for(entity_type, fqn)
    }

    fn icon_for(&self, entity_type: &str) -> EntityIcon {
        icon_for(entity_type)
    }

    fn link_for(&self, entity_type: &str, fully_qualified_name: &str) -> String {
        link_for(entity_type, fully_qualified_name)
    }
}

/// Context handle for the session's resolver.
#[derive(Clone)]
pub struct ResolverHandle(pub Arc<dyn EntityResolver>);

impl Default for ResolverHandle {
    fn default() -> Self {
        Self(Arc::new(CatalogResolver))
    }
}
