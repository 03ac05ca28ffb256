//! Lifecycle action recorded on ledger transactions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The lifecycle event a transaction records.
///
/// Only these three actions exist; anything else is rejected at the API
/// boundary before reaching the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleAction {
    New,
    Extend,
    Cancel,
}

impl LifecycleAction {
    /// The label stored on the transaction row.
    pub fn label(&self) -> &'static str {
        match self {
            LifecycleAction::New => "New",
            LifecycleAction::Extend => "Extend",
            LifecycleAction::Cancel => "Cancel",
        }
    }

    /// Parses a stored label back into an action.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "New" => Some(LifecycleAction::New),
            "Extend" => Some(LifecycleAction::Extend),
            "Cancel" => Some(LifecycleAction::Cancel),
            _ => None,
        }
    }
}

impl fmt::Display for LifecycleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_roundtrip_through_parse() {
        for action in [
            LifecycleAction::New,
            LifecycleAction::Extend,
            LifecycleAction::Cancel,
        ] {
            assert_eq!(LifecycleAction::parse(action.label()), Some(action));
        }
    }

    #[test]
    fn parse_rejects_unknown_labels() {
        assert_eq!(LifecycleAction::parse("Refund"), None);
        assert_eq!(LifecycleAction::parse("new"), None);
        assert_eq!(LifecycleAction::parse(""), None);
    }
}
