//! Shared domain types: sections, icon references and color tags

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A page of the guide, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    #[default]
    Intro,
    Types,
    Rest,
    Json,
    Status,
    BestPractices,
    #[serde(rename = "openapi")]
    OpenApi,
}

/// A navigation entry shown in the top bar and the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub section: Section,
}

impl Section {
    /// Every section in page order
    pub const ALL: [Section; 7] = [
        Section::Intro,
        Section::Types,
        Section::Rest,
        Section::Json,
        Section::Status,
        Section::BestPractices,
        Section::OpenApi,
    ];

    /// Sections reachable from the navigation bar. The OpenAPI page is only
    /// reached by paging past Best Practices.
    pub const NAV: [Section; 6] = [
        Section::Intro,
        Section::Types,
        Section::Rest,
        Section::Json,
        Section::Status,
        Section::BestPractices,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Intro => "intro",
            Section::Types => "types",
            Section::Rest => "rest",
            Section::Json => "json",
            Section::Status => "status",
            Section::BestPractices => "best-practices",
            Section::OpenApi => "openapi",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Intro => "Intro",
            Section::Types => "Types",
            Section::Rest => "REST Lab",
            Section::Json => "Data (JSON)",
            Section::Status => "Status Codes",
            Section::BestPractices => "Best Practices",
            Section::OpenApi => "OpenAPI",
        }
    }

    /// Heading shown by the section frame
    pub fn title(&self) -> &'static str {
        match self {
            Section::Intro => "The Messenger of the Web",
            Section::Types => "Types of APIs",
            Section::Rest => "REST Architecture Lab",
            Section::Json => "Data Format: JSON",
            Section::Status => "Status Codes Decoder",
            Section::BestPractices => "Design & Security",
            Section::OpenApi => "OpenAPI & Documentation",
        }
    }

    pub fn subtitle(&self) -> Option<&'static str> {
        match self {
            Section::Intro => Some("Application Programming Interface"),
            Section::Types => Some(
                "Not all APIs are built the same. Here are the common architectures used in modern development.",
            ),
            Section::Rest => Some(
                "REST (Representational State Transfer) uses standard HTTP methods to interact with Resources.",
            ),
            Section::Json => None,
            Section::Status => Some(
                "Servers communicate the result of a request using standardized 3-digit codes.",
            ),
            Section::BestPractices => Some(
                "Building a robust API requires attention to detail, consistency, and security.",
            ),
            Section::OpenApi => None,
        }
    }

    /// Position in page order
    pub fn index(&self) -> usize {
        Section::ALL
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }

    pub fn from_index(index: usize) -> Option<Section> {
        Section::ALL.get(index).copied()
    }

    /// Next section, saturating at the last page
    pub fn next(&self) -> Section {
        Section::from_index(self.index() + 1).unwrap_or(*self)
    }

    /// Previous section, saturating at the first page
    pub fn prev(&self) -> Section {
        self.index()
            .checked_sub(1)
            .and_then(Section::from_index)
            .unwrap_or(*self)
    }

    pub fn from_id(id: &str) -> Result<Section> {
        Section::ALL
            .iter()
            .copied()
            .find(|s| s.id() == id)
            .ok_or_else(|| Error::unknown_section(id))
    }

    pub fn nav_items() -> Vec<NavItem> {
        Section::NAV
            .iter()
            .map(|s| NavItem {
                id: s.id(),
                label: s.label(),
                section: *s,
            })
            .collect()
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Symbolic icon reference, resolved to a glyph by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconRef {
    Globe,
    Database,
    Zap,
    Server,
    Layers,
    Refresh,
    Shield,
    Link,
    FileJson,
    Check,
    Alert,
    Lock,
    Search,
    Offline,
}

/// Symbolic accent color, resolved to a terminal color by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTag {
    Blue,
    Pink,
    Yellow,
    Green,
    Gray,
    Orange,
    Red,
    Purple,
    Rose,
    #[default]
    Slate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()).unwrap(), section);
        }
    }

    #[test]
    fn test_unknown_section_id_errors() {
        let err = Section::from_id("pricing").unwrap_err();
        assert!(matches!(err, Error::UnknownSection { .. }));
    }

    #[test]
    fn test_next_and_prev_saturate() {
        assert_eq!(Section::Intro.prev(), Section::Intro);
        assert_eq!(Section::Intro.next(), Section::Types);
        assert_eq!(Section::OpenApi.next(), Section::OpenApi);
        assert_eq!(Section::OpenApi.prev(), Section::BestPractices);
    }

    #[test]
    fn test_nav_items_match_fixed_ids() {
        let ids: Vec<&str> = Section::nav_items().iter().map(|n| n.id).collect();
        assert_eq!(
            ids,
            vec!["intro", "types", "rest", "json", "status", "best-practices"]
        );
    }

    #[test]
    fn test_section_serde_uses_ids() {
        let json = serde_json::to_string(&Section::BestPractices).unwrap();
        assert_eq!(json, "\"best-practices\"");
        let section: Section = serde_json::from_str("\"openapi\"").unwrap();
        assert_eq!(section, Section::OpenApi);
    }

    #[test]
    fn test_json_section_has_no_subtitle() {
        assert!(Section::Json.subtitle().is_none());
        assert!(Section::Rest.subtitle().is_some());
    }
}
