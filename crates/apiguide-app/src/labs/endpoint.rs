//! Endpoint lab - compose a URL from resource, path and query segments

use std::str::FromStr;

/// Base of every composed URL
pub const BASE_URL: &str = "https://api.shop.com/v1/";
/// Path parameter appended when the id segment is on
pub const ID_SEGMENT: &str = "/12345";
/// Query string appended when the query segment is on
pub const QUERY_SEGMENT: &str = "?sort=desc";

/// Collection nouns the lab offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Resource {
    Users,
    #[default]
    Products,
    Orders,
}

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::Users, Resource::Products, Resource::Orders];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Users => "users",
            Resource::Products => "products",
            Resource::Orders => "orders",
        }
    }

    /// Next resource in display order, wrapping around
    pub fn next(&self) -> Resource {
        match self {
            Resource::Users => Resource::Products,
            Resource::Products => Resource::Orders,
            Resource::Orders => Resource::Users,
        }
    }
}

impl FromStr for Resource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| format!("unknown resource '{s}'"))
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role a URL segment plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Base,
    Collection,
    Identifier,
    Modifier,
}

impl SegmentKind {
    pub fn label(&self) -> &'static str {
        match self {
            SegmentKind::Base => "Base",
            SegmentKind::Collection => "Collection",
            SegmentKind::Identifier => "Identifier",
            SegmentKind::Modifier => "Modifier",
        }
    }
}

/// A piece of the composed URL with its role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlSegment {
    pub kind: SegmentKind,
    pub text: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointLab {
    resource: Resource,
    show_id: bool,
    show_query: bool,
}

impl Default for EndpointLab {
    fn default() -> Self {
        Self {
            resource: Resource::default(),
            show_id: true,
            show_query: true,
        }
    }
}

impl EndpointLab {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn id_visible(&self) -> bool {
        self.show_id
    }

    pub fn query_visible(&self) -> bool {
        self.show_query
    }

    pub fn set_resource(&mut self, resource: Resource) {
        self.resource = resource;
    }

    pub fn cycle_resource(&mut self) {
        self.resource = self.resource.next();
    }

    pub fn toggle_id_segment(&mut self) {
        self.show_id = !self.show_id;
    }

    pub fn toggle_query_segment(&mut self) {
        self.show_query = !self.show_query;
    }

    /// The URL as plain text
    pub fn compose(&self) -> String {
        compose_url(self.resource, self.show_id, self.show_query)
    }

    /// Segments in URL order. Inactive segments are kept so the renderer can
    /// dim their legend.
    pub fn segments(&self) -> Vec<UrlSegment> {
        vec![
            UrlSegment {
                kind: SegmentKind::Base,
                text: BASE_URL,
                active: true,
            },
            UrlSegment {
                kind: SegmentKind::Collection,
                text: self.resource.as_str(),
                active: true,
            },
            UrlSegment {
                kind: SegmentKind::Identifier,
                text: ID_SEGMENT,
                active: self.show_id,
            },
            UrlSegment {
                kind: SegmentKind::Modifier,
                text: QUERY_SEGMENT,
                active: self.show_query,
            },
        ]
    }
}

/// Pure composition: base + resource [+ id] [+ query]
pub fn compose_url(resource: Resource, show_id: bool, show_query: bool) -> String {
    let mut url = String::from(BASE_URL);
    url.push_str(resource.as_str());
    if show_id {
        url.push_str(ID_SEGMENT);
    }
    if show_query {
        url.push_str(QUERY_SEGMENT);
    }
    url
}
