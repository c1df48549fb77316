//! Content catalog - the read-only tables every section renders from
//!
//! The built-in catalog mirrors the guide's published content. A content
//! editor can replace it wholesale with a JSON file (see [`Catalog::load`]);
//! the replacement is validated before any component sees it.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, ResultExt};
use crate::types::{ColorTag, IconRef};

/// One architectural style of API (REST, GraphQL, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiType {
    pub title: String,
    pub description: String,
    pub icon: IconRef,
    pub color: ColorTag,
    #[serde(default)]
    pub details: Vec<String>,
}

/// An HTTP verb with its teaching notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpMethodSpec {
    pub name: String,
    pub description: String,
    pub action: String,
    pub color: ColorTag,
    /// Example request path, e.g. `/users/123`
    pub example: String,
    pub idempotent: bool,
}

impl HttpMethodSpec {
    /// Retry advice shown next to the method
    pub fn idempotency_label(&self) -> &'static str {
        if self.idempotent {
            "Yes (Safe to retry)"
        } else {
            "No (Caution on retry)"
        }
    }
}

/// A single status code with a short meaning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusExample {
    pub code: u16,
    pub meaning: String,
}

/// A hundred-range of status codes ("2xx", "4xx", ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCodeGroup {
    pub range: String,
    pub name: String,
    pub description: String,
    pub color: ColorTag,
    #[serde(default)]
    pub examples: Vec<StatusExample>,
}

impl StatusCodeGroup {
    /// Leading digit of the range ("4xx" -> 4), if the range is well formed
    pub fn hundreds(&self) -> Option<u16> {
        parse_range(&self.range)
    }

    /// Whether `code` falls inside this group's hundred-range
    pub fn contains(&self, code: u16) -> bool {
        self.hundreds().is_some_and(|h| code / 100 == h)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestPractice {
    pub title: String,
    pub description: String,
    pub icon: IconRef,
}

/// A canned outcome the status lab can reveal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub label: String,
    pub code: u16,
    pub message: String,
    pub description: String,
    pub icon: IconRef,
    pub color: ColorTag,
}

/// One line of the annotated JSON listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonLine {
    pub text: String,
    pub indent: u16,
    pub color: ColorTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// All static content of the guide
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub api_types: Vec<ApiType>,
    #[serde(default)]
    pub http_methods: Vec<HttpMethodSpec>,
    #[serde(default)]
    pub status_codes: Vec<StatusCodeGroup>,
    #[serde(default)]
    pub best_practices: Vec<BestPractice>,
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
    #[serde(default)]
    pub json_lines: Vec<JsonLine>,
    #[serde(default)]
    pub json_facts: Vec<String>,
}

impl Catalog {
    /// Look up an HTTP method by name (exact match)
    pub fn method(&self, name: &str) -> Option<&HttpMethodSpec> {
        self.http_methods.iter().find(|m| m.name == name)
    }

    pub fn scenario(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    pub fn status_group(&self, range: &str) -> Option<&StatusCodeGroup> {
        self.status_codes.iter().find(|g| g.range == range)
    }

    /// Load a replacement catalog from a JSON file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let catalog = Self::from_json(&content).context("Rejected replacement catalog")?;
        tracing::info!(
            "Loaded catalog from {} ({} methods, {} scenarios)",
            path.display(),
            catalog.http_methods.len(),
            catalog.scenarios.len()
        );
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Pretty JSON rendering, the starting point for a replacement file
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the uniqueness and range rules every renderer relies on
    pub fn validate(&self) -> Result<()> {
        ensure_unique(self.api_types.iter().map(|t| t.title.as_str()), "API type")?;
        ensure_unique(
            self.http_methods.iter().map(|m| m.name.as_str()),
            "HTTP method",
        )?;
        ensure_unique(self.scenarios.iter().map(|s| s.id.as_str()), "scenario")?;
        ensure_unique(
            self.status_codes.iter().map(|g| g.range.as_str()),
            "status range",
        )?;

        for group in &self.status_codes {
            let hundreds = group.hundreds().ok_or_else(|| {
                Error::catalog_invalid(format!("malformed status range '{}'", group.range))
            })?;
            for example in &group.examples {
                if !(100..=599).contains(&example.code) {
                    return Err(Error::catalog_invalid(format!(
                        "status code {} is outside 100..=599",
                        example.code
                    )));
                }
                if example.code / 100 != hundreds {
                    return Err(Error::catalog_invalid(format!(
                        "status code {} does not belong to range {}",
                        example.code, group.range
                    )));
                }
            }
        }

        for scenario in &self.scenarios {
            if !(100..=599).contains(&scenario.code) {
                return Err(Error::catalog_invalid(format!(
                    "scenario '{}' has out-of-range code {}",
                    scenario.id, scenario.code
                )));
            }
        }

        Ok(())
    }

    /// The guide's built-in content
    pub fn builtin() -> Self {
        Self {
            api_types: builtin_api_types(),
            http_methods: builtin_http_methods(),
            status_codes: builtin_status_codes(),
            best_practices: builtin_best_practices(),
            scenarios: builtin_scenarios(),
            json_lines: builtin_json_lines(),
            json_facts: builtin_json_facts(),
        }
    }
}

/// Parse "4xx" into 4. Only 1..=5 are valid leading digits.
fn parse_range(range: &str) -> Option<u16> {
    let bytes = range.as_bytes();
    if bytes.len() != 3 || range.get(1..) != Some("xx") {
        return None;
    }
    match bytes[0] {
        b @ b'1'..=b'5' => Some(u16::from(b - b'0')),
        _ => None,
    }
}

fn ensure_unique<'a>(keys: impl Iterator<Item = &'a str>, what: &str) -> Result<()> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(Error::catalog_invalid(format!("duplicate {what} '{key}'")));
        }
    }
    Ok(())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn builtin_api_types() -> Vec<ApiType> {
    vec![
        ApiType {
            title: "REST".into(),
            description: "The standard for web APIs. Uses HTTP & JSON.".into(),
            icon: IconRef::Globe,
            color: ColorTag::Blue,
            details: strings(&["Resource-focused", "Standard HTTP methods", "Stateless"]),
        },
        ApiType {
            title: "GraphQL".into(),
            description: "Client specifies exactly what data it needs.".into(),
            icon: IconRef::Database,
            color: ColorTag::Pink,
            details: strings(&["Single endpoint", "Avoids over-fetching", "Flexible queries"]),
        },
        ApiType {
            title: "Websockets".into(),
            description: "Bi-directional, real-time communication.".into(),
            icon: IconRef::Zap,
            color: ColorTag::Yellow,
            details: strings(&["Persistent connection", "Live updates", "Chat apps"]),
        },
        ApiType {
            title: "gRPC".into(),
            description: "High-performance, uses Protocol Buffers.".into(),
            icon: IconRef::Server,
            color: ColorTag::Green,
            details: strings(&["Binary serialization", "Microservices", "Efficient"]),
        },
        ApiType {
            title: "SOAP".into(),
            description: "Older, XML-based enterprise protocol.".into(),
            icon: IconRef::Layers,
            color: ColorTag::Gray,
            details: strings(&["Strict standards", "Enterprise legacy", "Verbose XML"]),
        },
    ]
}

fn method(
    name: &str,
    description: &str,
    action: &str,
    color: ColorTag,
    example: &str,
    idempotent: bool,
) -> HttpMethodSpec {
    HttpMethodSpec {
        name: name.into(),
        description: description.into(),
        action: action.into(),
        color,
        example: example.into(),
        idempotent,
    }
}

fn builtin_http_methods() -> Vec<HttpMethodSpec> {
    vec![
        method(
            "GET",
            "Retrieve data from a resource.",
            "Read",
            ColorTag::Blue,
            "/users/123",
            true,
        ),
        method(
            "POST",
            "Create a new resource.",
            "Create",
            ColorTag::Green,
            "/users",
            false,
        ),
        method(
            "PUT",
            "Update or replace a resource entirely.",
            "Update",
            ColorTag::Orange,
            "/users/123",
            true,
        ),
        method(
            "PATCH",
            "Partially update a resource.",
            "Modify",
            ColorTag::Yellow,
            "/users/123",
            false,
        ),
        method(
            "DELETE",
            "Remove a resource.",
            "Remove",
            ColorTag::Red,
            "/users/123",
            true,
        ),
    ]
}

fn example(code: u16, meaning: &str) -> StatusExample {
    StatusExample {
        code,
        meaning: meaning.into(),
    }
}

fn builtin_status_codes() -> Vec<StatusCodeGroup> {
    vec![
        StatusCodeGroup {
            range: "2xx".into(),
            name: "Success".into(),
            description: "The request was received and processed successfully.".into(),
            color: ColorTag::Green,
            examples: vec![
                example(200, "OK - Request succeeded"),
                example(201, "Created - Resource created (POST)"),
                example(204, "No Content - Action done, no body returned"),
            ],
        },
        StatusCodeGroup {
            range: "3xx".into(),
            name: "Redirection".into(),
            description: "Further action must be taken to complete the request.".into(),
            color: ColorTag::Blue,
            examples: vec![example(304, "Not Modified - Cached version is still valid")],
        },
        StatusCodeGroup {
            range: "4xx".into(),
            name: "Client Error".into(),
            description: "The request contains bad syntax or cannot be fulfilled.".into(),
            color: ColorTag::Yellow,
            examples: vec![
                example(400, "Bad Request - Invalid syntax/params"),
                example(401, "Unauthorized - Authentication required"),
                example(403, "Forbidden - Authenticated but not allowed"),
                example(404, "Not Found - Resource doesn't exist"),
            ],
        },
        StatusCodeGroup {
            range: "5xx".into(),
            name: "Server Error".into(),
            description: "The server failed to fulfill an apparently valid request.".into(),
            color: ColorTag::Red,
            examples: vec![
                example(500, "Internal Server Error"),
                example(503, "Service Unavailable"),
            ],
        },
    ]
}

fn builtin_best_practices() -> Vec<BestPractice> {
    vec![
        BestPractice {
            title: "Consistent Naming".into(),
            description: "Use plural nouns (e.g., /users, /posts). Use consistent casing (camelCase or snake_case) for fields.".into(),
            icon: IconRef::Refresh,
        },
        BestPractice {
            title: "Security First".into(),
            description: "Never put sensitive data in URLs. Use HTTPS (TLS). Authenticate via Headers (Tokens), not query params.".into(),
            icon: IconRef::Shield,
        },
        BestPractice {
            title: "Versioning".into(),
            description: "Always version your API (e.g., /api/v1/...) to manage changes without breaking existing clients.".into(),
            icon: IconRef::Link,
        },
        BestPractice {
            title: "JSON Everywhere".into(),
            description: "Use JSON as the standard payload format. It's lightweight and human-readable.".into(),
            icon: IconRef::FileJson,
        },
    ]
}

fn builtin_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            id: "success".into(),
            label: "Get User Profile".into(),
            code: 200,
            message: "OK".into(),
            description: "Perfect! The resource exists and was returned successfully.".into(),
            icon: IconRef::Check,
            color: ColorTag::Green,
        },
        Scenario {
            id: "bad_req".into(),
            label: "Register (No Email)".into(),
            code: 400,
            message: "Bad Request".into(),
            description: "Client Error: You sent data the server didn't understand or was missing fields.".into(),
            icon: IconRef::Alert,
            color: ColorTag::Orange,
        },
        Scenario {
            id: "unauth".into(),
            label: "Admin Dashboard".into(),
            code: 401,
            message: "Unauthorized".into(),
            description: "Security: You need to log in (provide a valid token) to see this.".into(),
            icon: IconRef::Lock,
            color: ColorTag::Red,
        },
        Scenario {
            id: "not_found".into(),
            label: "Get Order #999".into(),
            code: 404,
            message: "Not Found".into(),
            description: "Client Error: The ID you requested doesn't exist in the database.".into(),
            icon: IconRef::Search,
            color: ColorTag::Yellow,
        },
        Scenario {
            id: "server_err".into(),
            label: "Crash Server".into(),
            code: 500,
            message: "Internal Server Error".into(),
            description: "Server Error: The developers made a mistake in the code. It's not your fault.".into(),
            icon: IconRef::Offline,
            color: ColorTag::Rose,
        },
    ]
}

fn line(text: &str, indent: u16, color: ColorTag, note: Option<&str>) -> JsonLine {
    JsonLine {
        text: text.into(),
        indent,
        color,
        note: note.map(Into::into),
    }
}

fn builtin_json_lines() -> Vec<JsonLine> {
    vec![
        line("{", 0, ColorTag::Slate, None),
        line("\"data\": {", 2, ColorTag::Purple, Some("Root Object")),
        line("\"id\": 101,", 4, ColorTag::Blue, Some("Number")),
        line("\"active\": true,", 4, ColorTag::Blue, Some("Boolean")),
        line(
            "\"name\": \"API Guide\",",
            4,
            ColorTag::Green,
            Some("String (Key-Value Pair)"),
        ),
        line("\"tags\": [", 4, ColorTag::Yellow, Some("Array (List)")),
        line("\"tech\",", 6, ColorTag::Green, None),
        line("\"web\"", 6, ColorTag::Green, None),
        line("],", 4, ColorTag::Yellow, None),
        line("\"meta\": null", 4, ColorTag::Red, Some("Null Value")),
        line("}", 2, ColorTag::Purple, None),
        line("}", 0, ColorTag::Slate, None),
    ]
}

fn builtin_json_facts() -> Vec<String> {
    strings(&[
        "Key-Value Pairs: Like a dictionary.",
        "Universal: Supported by almost all programming languages.",
        "Strict Structure: Uses quotes for strings, curly braces for objects.",
        "Lightweight: Minimal formatting overhead compared to XML.",
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        Catalog::builtin().validate().unwrap();
    }

    #[test]
    fn test_one_group_per_range() {
        let catalog = Catalog::builtin();
        let ranges: Vec<&str> = catalog.status_codes.iter().map(|g| g.range.as_str()).collect();
        assert_eq!(ranges, vec!["2xx", "3xx", "4xx", "5xx"]);
    }

    #[test]
    fn test_every_example_code_within_its_range() {
        for group in Catalog::builtin().status_codes {
            let hundreds = group.hundreds().unwrap();
            for example in &group.examples {
                assert_eq!(example.code / 100, hundreds, "{} in {}", example.code, group.range);
                assert!(group.contains(example.code));
            }
        }
    }

    #[test]
    fn test_idempotent_flags_match_http_semantics() {
        let catalog = Catalog::builtin();
        let expected = [
            ("GET", true),
            ("POST", false),
            ("PUT", true),
            ("PATCH", false),
            ("DELETE", true),
        ];
        for (name, idempotent) in expected {
            assert_eq!(catalog.method(name).unwrap().idempotent, idempotent, "{name}");
        }
    }

    #[test]
    fn test_idempotency_label() {
        let catalog = Catalog::builtin();
        let get = catalog.method("GET").expect("GET");
        let post = catalog.method("POST").expect("POST");
        assert_eq!(get.idempotency_label(), "Yes (Safe to retry)");
        assert_eq!(post.idempotency_label(), "No (Caution on retry)");
    }

    #[test]
    fn test_five_scenarios_with_expected_codes() {
        let catalog = Catalog::builtin();
        let codes: Vec<(String, u16)> = catalog
            .scenarios
            .iter()
            .map(|s| (s.id.clone(), s.code))
            .collect();
        assert_eq!(
            codes,
            vec![
                ("success".to_string(), 200),
                ("bad_req".to_string(), 400),
                ("unauth".to_string(), 401),
                ("not_found".to_string(), 404),
                ("server_err".to_string(), 500),
            ]
        );
    }

    #[test]
    fn test_lookup_helpers() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.method("PUT").unwrap().action, "Update");
        assert!(catalog.method("get").is_none());
        assert_eq!(catalog.scenario("unauth").unwrap().code, 401);
        assert!(catalog.scenario("teapot").is_none());
        assert_eq!(catalog.status_group("3xx").unwrap().name, "Redirection");
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("2xx"), Some(2));
        assert_eq!(parse_range("5xx"), Some(5));
        assert_eq!(parse_range("6xx"), None);
        assert_eq!(parse_range("2XX"), None);
        assert_eq!(parse_range("20x"), None);
        assert_eq!(parse_range(""), None);
    }

    #[test]
    fn test_validate_rejects_duplicate_method() {
        let mut catalog = Catalog::builtin();
        let dup = catalog.http_methods[0].clone();
        catalog.http_methods.push(dup);
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate HTTP method 'GET'"));
    }

    #[test]
    fn test_validate_rejects_code_outside_group() {
        let mut catalog = Catalog::builtin();
        catalog.status_codes[0].examples.push(example(404, "misfiled"));
        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, Error::CatalogInvalid { .. }));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_validate_rejects_malformed_range() {
        let mut catalog = Catalog::builtin();
        catalog.status_codes[1].range = "redirects".into();
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_json_round_trip_preserves_catalog() {
        let catalog = Catalog::builtin();
        let json = catalog.to_json_pretty().unwrap();
        assert_eq!(Catalog::from_json(&json).unwrap(), catalog);
    }

    #[test]
    fn test_partial_override_defaults_missing_lists_to_empty() {
        let json = r#"{
            "http_methods": [
                {"name": "GET", "description": "Read it", "action": "Read",
                 "color": "blue", "example": "/books/1", "idempotent": true}
            ]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.http_methods.len(), 1);
        assert!(catalog.scenarios.is_empty());
        assert!(catalog.api_types.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, Catalog::builtin().to_json_pretty().unwrap()).unwrap();

        let loaded = Catalog::load(&path).unwrap();
        assert_eq!(loaded.scenarios.len(), 5);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_lines_notes() {
        let lines = builtin_json_lines();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines.iter().filter(|l| l.note.is_some()).count(), 6);
    }
}
