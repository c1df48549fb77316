//! REST simulator - method selector with a fake timed response

use apiguide_core::{Catalog, HttpMethodSpec};
use serde_json::json;

use super::{RevealToken, TokenSeq};

/// Host shown in front of a method's example path
pub const API_HOST: &str = "https://api.example.com";

/// Body shown for methods that carry a payload
pub const EXAMPLE_BODY: &str = "{\n  \"username\": \"jdoe\",\n  \"email\": \"jdoe@example.com\"\n}";

/// What the simulated server answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulatedResponse {
    /// Pretty-printed JSON body
    Json(String),
    /// "204 No Content" - the request succeeded without a body
    NoContent,
}

impl SimulatedResponse {
    pub fn is_no_content(&self) -> bool {
        matches!(self, SimulatedResponse::NoContent)
    }

    pub fn body(&self) -> Option<&str> {
        match self {
            SimulatedResponse::Json(body) => Some(body),
            SimulatedResponse::NoContent => None,
        }
    }
}

/// Canned payload for a method name. Unknown names get a generic
/// completion message rather than an error.
pub fn canned_response(method: &str) -> SimulatedResponse {
    let value = match method {
        "GET" => json!({ "id": 123, "username": "jdoe", "email": "jdoe@example.com" }),
        "POST" => json!({ "id": 124, "status": "created", "message": "User created successfully" }),
        "PUT" => json!({
            "id": 123,
            "status": "updated",
            "previous": { "username": "john" },
            "current": { "username": "jdoe" }
        }),
        "DELETE" => return SimulatedResponse::NoContent,
        _ => json!({ "message": "Action complete" }),
    };
    SimulatedResponse::Json(serde_json::to_string_pretty(&value).unwrap_or_default())
}

/// State of the request/response player
#[derive(Debug, Clone, Default)]
pub struct RestSimulator {
    selected: String,
    response: Option<SimulatedResponse>,
    in_flight: bool,
    tokens: TokenSeq,
}

impl RestSimulator {
    /// Start with the first method of the catalog selected
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            selected: catalog
                .http_methods
                .first()
                .map(|m| m.name.clone())
                .unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn selected_spec<'a>(&self, catalog: &'a Catalog) -> Option<&'a HttpMethodSpec> {
        catalog.method(&self.selected)
    }

    pub fn response(&self) -> Option<&SimulatedResponse> {
        self.response.as_ref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Most recently issued (or invalidated) token
    pub fn latest_token(&self) -> RevealToken {
        self.tokens.latest()
    }

    /// Full request line for the selected method, e.g. `https://api.example.com/users/123`
    pub fn request_url(&self, catalog: &Catalog) -> String {
        let path = self
            .selected_spec(catalog)
            .map(|m| m.example.as_str())
            .unwrap_or_default();
        format!("{API_HOST}{path}")
    }

    /// Whether the selected method sends a request body
    pub fn has_request_body(&self) -> bool {
        self.selected != "GET" && self.selected != "DELETE"
    }

    /// Select a method and clear any displayed response.
    ///
    /// A send that is still in flight is cancelled, so its payload never
    /// shows up under a different method. Returns `false` (and changes
    /// nothing) when `name` is not in the catalog.
    pub fn select_method(&mut self, catalog: &Catalog, name: &str) -> bool {
        if catalog.method(name).is_none() {
            return false;
        }
        self.selected = name.to_string();
        self.response = None;
        self.cancel();
        true
    }

    /// Move the selection to the next method, wrapping around
    pub fn select_next(&mut self, catalog: &Catalog) -> bool {
        self.select_offset(catalog, 1)
    }

    /// Move the selection to the previous method, wrapping around
    pub fn select_prev(&mut self, catalog: &Catalog) -> bool {
        let len = catalog.http_methods.len();
        self.select_offset(catalog, len.saturating_sub(1))
    }

    fn select_offset(&mut self, catalog: &Catalog, offset: usize) -> bool {
        let len = catalog.http_methods.len();
        if len == 0 {
            return false;
        }
        let current = catalog
            .http_methods
            .iter()
            .position(|m| m.name == self.selected)
            .unwrap_or(0);
        let name = catalog.http_methods[(current + offset) % len].name.clone();
        self.select_method(catalog, &name)
    }

    /// Start a simulated request. Returns the token the delayed reveal must
    /// present, or `None` when a request is already in flight.
    pub fn send(&mut self) -> Option<RevealToken> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        self.response = None;
        Some(self.tokens.issue())
    }

    /// Apply a delayed reveal. Stale tokens are ignored.
    pub fn reveal(&mut self, token: RevealToken) -> bool {
        if !self.in_flight || !self.tokens.is_current(token) {
            return false;
        }
        self.in_flight = false;
        self.response = Some(canned_response(&self.selected));
        true
    }

    /// Drop any pending request. Returns whether one was in flight.
    pub fn cancel(&mut self) -> bool {
        let was_in_flight = self.in_flight;
        self.in_flight = false;
        self.tokens.invalidate();
        was_in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim() -> (Catalog, RestSimulator) {
        let catalog = Catalog::builtin();
        let sim = RestSimulator::new(&catalog);
        (catalog, sim)
    }

    fn send_and_reveal(sim: &mut RestSimulator) -> SimulatedResponse {
        let token = sim.send().expect("send should start");
        assert!(sim.reveal(token));
        sim.response().cloned().expect("response after reveal")
    }

    #[test]
    fn test_canned_bodies_keep_written_key_order() {
        assert_eq!(
            canned_response("GET"),
            SimulatedResponse::Json(
                "{\n  \"id\": 123,\n  \"username\": \"jdoe\",\n  \"email\": \"jdoe@example.com\"\n}"
                    .to_string()
            )
        );
        assert_eq!(
            canned_response("POST"),
            SimulatedResponse::Json(
                "{\n  \"id\": 124,\n  \"status\": \"created\",\n  \"message\": \"User created successfully\"\n}"
                    .to_string()
            )
        );
        assert_eq!(
            canned_response("PUT"),
            SimulatedResponse::Json(
                "{\n  \"id\": 123,\n  \"status\": \"updated\",\n  \"previous\": {\n    \"username\": \"john\"\n  },\n  \"current\": {\n    \"username\": \"jdoe\"\n  }\n}"
                    .to_string()
            )
        );
        assert_eq!(
            canned_response("PATCH"),
            SimulatedResponse::Json("{\n  \"message\": \"Action complete\"\n}".to_string())
        );
    }

    #[test]
    fn test_defaults_to_first_method() {
        let (_, sim) = sim();
        assert_eq!(sim.selected(), "GET");
        assert!(sim.response().is_none());
        assert!(!sim.is_in_flight());
    }

    #[test]
    fn test_get_payload() {
        let (_, mut sim) = sim();
        let body = send_and_reveal(&mut sim);
        let value: serde_json::Value = serde_json::from_str(body.body().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({ "id": 123, "username": "jdoe", "email": "jdoe@example.com" })
        );
    }

    #[test]
    fn test_each_method_gets_its_own_payload() {
        let (catalog, mut sim) = sim();
        let mut seen = Vec::new();
        for name in ["GET", "POST", "PUT", "PATCH", "DELETE"] {
            assert!(sim.select_method(&catalog, name));
            let response = send_and_reveal(&mut sim);
            assert_eq!(response, canned_response(name), "{name}");
            assert!(!seen.contains(&response), "{name} payload not unique");
            seen.push(response);
        }
    }

    #[test]
    fn test_put_payload_has_previous_and_current() {
        let body = canned_response("PUT");
        let value: serde_json::Value = serde_json::from_str(body.body().unwrap()).unwrap();
        assert_eq!(value["previous"]["username"], "john");
        assert_eq!(value["current"]["username"], "jdoe");
        assert_eq!(value["status"], "updated");
    }

    #[test]
    fn test_delete_is_always_no_content() {
        let (catalog, mut sim) = sim();
        sim.select_method(&catalog, "DELETE");
        for _ in 0..3 {
            let response = send_and_reveal(&mut sim);
            assert!(response.is_no_content());
            assert!(response.body().is_none());
        }
    }

    #[test]
    fn test_unknown_method_gets_generic_message() {
        let body = canned_response("HEAD");
        let value: serde_json::Value = serde_json::from_str(body.body().unwrap()).unwrap();
        assert_eq!(value, json!({ "message": "Action complete" }));
        assert_eq!(canned_response("PATCH"), body);
    }

    #[test]
    fn test_payload_is_pretty_printed_with_two_spaces() {
        let body = canned_response("POST");
        assert!(body.body().unwrap().contains("\n  \"id\": 124"));
    }

    #[test]
    fn test_send_while_in_flight_is_noop() {
        let (_, mut sim) = sim();
        let first = sim.send().unwrap();
        assert!(sim.send().is_none());
        assert!(sim.reveal(first));
    }

    #[test]
    fn test_send_clears_previous_response() {
        let (_, mut sim) = sim();
        send_and_reveal(&mut sim);
        assert!(sim.response().is_some());
        sim.send().unwrap();
        assert!(sim.response().is_none());
        assert!(sim.is_in_flight());
    }

    #[test]
    fn test_reselecting_active_method_clears_response() {
        let (catalog, mut sim) = sim();
        send_and_reveal(&mut sim);
        assert!(sim.response().is_some());

        assert!(sim.select_method(&catalog, "GET"));
        assert!(sim.response().is_none());
    }

    #[test]
    fn test_select_during_flight_discards_pending_reveal() {
        let (catalog, mut sim) = sim();
        let token = sim.send().unwrap();
        sim.select_method(&catalog, "POST");

        assert!(!sim.is_in_flight());
        assert!(!sim.reveal(token));
        assert!(sim.response().is_none());
    }

    #[test]
    fn test_unknown_method_selection_is_ignored() {
        let (catalog, mut sim) = sim();
        assert!(!sim.select_method(&catalog, "TRACE"));
        assert_eq!(sim.selected(), "GET");
    }

    #[test]
    fn test_stale_token_is_ignored() {
        let (_, mut sim) = sim();
        let token = sim.send().unwrap();
        sim.cancel();
        assert!(!sim.reveal(token));
        let next = sim.send().unwrap();
        assert!(!sim.reveal(token));
        assert!(sim.reveal(next));
    }

    #[test]
    fn test_select_next_and_prev_wrap() {
        let (catalog, mut sim) = sim();
        sim.select_prev(&catalog);
        assert_eq!(sim.selected(), "DELETE");
        sim.select_next(&catalog);
        assert_eq!(sim.selected(), "GET");
        sim.select_next(&catalog);
        assert_eq!(sim.selected(), "POST");
    }

    #[test]
    fn test_request_url_and_body_visibility() {
        let (catalog, mut sim) = sim();
        assert_eq!(sim.request_url(&catalog), "https://api.example.com/users/123");
        assert!(!sim.has_request_body());

        sim.select_method(&catalog, "POST");
        assert_eq!(sim.request_url(&catalog), "https://api.example.com/users");
        assert!(sim.has_request_body());

        sim.select_method(&catalog, "DELETE");
        assert!(!sim.has_request_body());
    }

    #[test]
    fn test_empty_catalog_has_no_selection() {
        let catalog = Catalog::default();
        let mut sim = RestSimulator::new(&catalog);
        assert_eq!(sim.selected(), "");
        assert!(!sim.select_next(&catalog));
    }
}
