//! Status lab - pick a scenario, wait, see the status code the server sent

use apiguide_core::{Catalog, Scenario};

use super::{RevealToken, TokenSeq};

#[derive(Debug, Clone, Default)]
pub struct StatusLab {
    cursor: usize,
    pending: Option<Scenario>,
    active: Option<Scenario>,
    in_flight: bool,
    tokens: TokenSeq,
}

impl StatusLab {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the highlighted scenario in the picker
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn active(&self) -> Option<&Scenario> {
        self.active.as_ref()
    }

    /// Scenario waiting for its reveal, if any
    pub fn pending(&self) -> Option<&Scenario> {
        self.pending.as_ref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Most recently issued (or invalidated) token
    pub fn latest_token(&self) -> RevealToken {
        self.tokens.latest()
    }

    pub fn select_next(&mut self, catalog: &Catalog) {
        let len = catalog.scenarios.len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    pub fn select_prev(&mut self, catalog: &Catalog) {
        let len = catalog.scenarios.len();
        if len > 0 {
            self.cursor = (self.cursor + len - 1) % len;
        }
    }

    /// Id of the highlighted scenario
    pub fn selected_id<'a>(&self, catalog: &'a Catalog) -> Option<&'a str> {
        catalog.scenarios.get(self.cursor).map(|s| s.id.as_str())
    }

    /// Start revealing a scenario. Unknown ids are ignored (`None`).
    ///
    /// Triggering while another reveal is pending restarts the delay; the
    /// older token goes stale.
    pub fn trigger(&mut self, catalog: &Catalog, id: &str) -> Option<RevealToken> {
        let index = catalog.scenarios.iter().position(|s| s.id == id)?;
        self.cursor = index;
        self.pending = Some(catalog.scenarios[index].clone());
        self.active = None;
        self.in_flight = true;
        Some(self.tokens.issue())
    }

    /// Apply a delayed reveal. Stale tokens are ignored.
    pub fn reveal(&mut self, token: RevealToken) -> bool {
        if !self.in_flight || !self.tokens.is_current(token) {
            return false;
        }
        self.in_flight = false;
        self.active = self.pending.take();
        self.active.is_some()
    }

    /// Drop any pending reveal. Returns whether one was in flight.
    pub fn cancel(&mut self) -> bool {
        let was_in_flight = self.in_flight;
        self.in_flight = false;
        self.pending = None;
        self.tokens.invalidate();
        was_in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_then_reveal_shows_scenario() {
        let catalog = Catalog::builtin();
        let mut lab = StatusLab::new();

        let token = lab.trigger(&catalog, "not_found").unwrap();
        assert!(lab.is_in_flight());
        assert!(lab.active().is_none());

        assert!(lab.reveal(token));
        let active = lab.active().unwrap();
        assert_eq!(active.code, 404);
        assert_eq!(active.message, "Not Found");
        assert!(!lab.is_in_flight());
    }

    #[test]
    fn test_unknown_scenario_is_noop() {
        let catalog = Catalog::builtin();
        let mut lab = StatusLab::new();
        let token = lab.trigger(&catalog, "success").unwrap();
        lab.reveal(token);

        assert!(lab.trigger(&catalog, "teapot").is_none());
        assert_eq!(lab.active().unwrap().id, "success");
        assert!(!lab.is_in_flight());
    }

    #[test]
    fn test_later_trigger_wins_over_earlier_pending_reveal() {
        let catalog = Catalog::builtin();
        let mut lab = StatusLab::new();

        let a = lab.trigger(&catalog, "success").unwrap();
        let b = lab.trigger(&catalog, "server_err").unwrap();

        // A's timer fires first but is stale
        assert!(!lab.reveal(a));
        assert!(lab.active().is_none());
        assert!(lab.is_in_flight());

        assert!(lab.reveal(b));
        assert_eq!(lab.active().unwrap().id, "server_err");

        // A late duplicate of A must not flicker back
        assert!(!lab.reveal(a));
        assert_eq!(lab.active().unwrap().id, "server_err");
    }

    #[test]
    fn test_retrigger_clears_active_immediately() {
        let catalog = Catalog::builtin();
        let mut lab = StatusLab::new();
        let token = lab.trigger(&catalog, "unauth").unwrap();
        lab.reveal(token);

        lab.trigger(&catalog, "bad_req").unwrap();
        assert!(lab.active().is_none());
        assert_eq!(lab.pending().unwrap().id, "bad_req");
    }

    #[test]
    fn test_cancel_discards_pending() {
        let catalog = Catalog::builtin();
        let mut lab = StatusLab::new();
        let token = lab.trigger(&catalog, "success").unwrap();

        assert!(lab.cancel());
        assert!(!lab.reveal(token));
        assert!(lab.active().is_none());
        assert!(!lab.cancel());
    }

    #[test]
    fn test_cursor_wraps_and_follows_trigger() {
        let catalog = Catalog::builtin();
        let mut lab = StatusLab::new();
        lab.select_prev(&catalog);
        assert_eq!(lab.selected_id(&catalog), Some("server_err"));
        lab.select_next(&catalog);
        assert_eq!(lab.selected_id(&catalog), Some("success"));

        lab.trigger(&catalog, "unauth");
        assert_eq!(lab.cursor(), 2);
    }

    #[test]
    fn test_empty_catalog_cursor_is_stable() {
        let catalog = Catalog::default();
        let mut lab = StatusLab::new();
        lab.select_next(&catalog);
        assert_eq!(lab.cursor(), 0);
        assert!(lab.selected_id(&catalog).is_none());
    }
}
