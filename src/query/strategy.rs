//! Matching strategies selectable per query.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How query terms are combined when matching lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchStrategy {
    /// Lines with the highest number of term hits.
    All,
    /// Lines matching at least one term.
    Any,
    /// Lines matching no term.
    None,
}

impl MatchStrategy {
    /// Every strategy, in menu order.
    pub const VARIANTS: [MatchStrategy; 3] =
        [MatchStrategy::All, MatchStrategy::Any, MatchStrategy::None];

    /// Look a strategy up by name, ignoring case.
    ///
    /// Returns `None` for anything other than `ALL`, `ANY` or `NONE`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_uppercase().as_str() {
            "ALL" => Some(MatchStrategy::All),
            "ANY" => Some(MatchStrategy::Any),
            "NONE" => Some(MatchStrategy::None),
            _ => None,
        }
    }

    /// The canonical upper-case name.
    pub fn name(self) -> &'static str {
        match self {
            MatchStrategy::All => "ALL",
            MatchStrategy::Any => "ANY",
            MatchStrategy::None => "NONE",
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
