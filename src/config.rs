//! Parser configuration.

use serde::{Deserialize, Serialize};

/// Options for [`parse_with`](crate::parse_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Mirror every forward relation into the target's reverse set.
    pub track_reverse: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { track_reverse: true }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track_reverse(mut self, enabled: bool) -> Self {
        self.track_reverse = enabled;
        self
    }

    /// Load options from JSON, e.g. an application config section.
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
