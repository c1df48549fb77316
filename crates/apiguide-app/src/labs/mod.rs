//! Simulated labs: the interactive widgets of the guide
//!
//! Each lab owns only local selection state. Labs that fake network latency
//! stamp every request with a [`RevealToken`]; the delayed completion is
//! applied only when its token is still the latest one issued, so a later
//! trigger always supersedes an earlier pending reveal.

pub mod endpoint;
pub mod json;
pub mod rest;
pub mod status;

pub use endpoint::{EndpointLab, Resource, SegmentKind, UrlSegment};
pub use json::JsonExplainerState;
pub use rest::{canned_response, RestSimulator, SimulatedResponse};
pub use status::StatusLab;

/// Labs that schedule delayed reveals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabKind {
    /// REST request/response player
    Rest,
    /// Status-code scenario picker
    Status,
}

impl LabKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabKind::Rest => "rest",
            LabKind::Status => "status",
        }
    }
}

impl std::fmt::Display for LabKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sequence number stamped on a scheduled reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RevealToken(pub u64);

impl std::fmt::Display for RevealToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic token source for one lab instance
#[derive(Debug, Clone, Default)]
pub struct TokenSeq {
    latest: u64,
}

impl TokenSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh token; every previously issued token becomes stale
    pub fn issue(&mut self) -> RevealToken {
        self.latest += 1;
        RevealToken(self.latest)
    }

    /// Invalidate all outstanding tokens without issuing a usable one
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, token: RevealToken) -> bool {
        token.0 == self.latest
    }

    pub fn latest(&self) -> RevealToken {
        RevealToken(self.latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_monotonic() {
        let mut seq = TokenSeq::new();
        let a = seq.issue();
        let b = seq.issue();
        assert!(b > a);
        assert!(seq.is_current(b));
        assert!(!seq.is_current(a));
    }

    #[test]
    fn test_invalidate_makes_latest_stale() {
        let mut seq = TokenSeq::new();
        let a = seq.issue();
        seq.invalidate();
        assert!(!seq.is_current(a));
        let b = seq.issue();
        assert!(seq.is_current(b));
        assert_eq!(b, RevealToken(3));
    }

    #[test]
    fn test_lab_kind_display() {
        assert_eq!(LabKind::Rest.to_string(), "rest");
        assert_eq!(LabKind::Status.to_string(), "status");
    }
}
