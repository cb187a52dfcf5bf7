//! Controller types

use serde::{Deserialize, Serialize};
use std::fmt;

/// What to do with a fetch result that completes after a newer fetch was
/// issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaleResponsePolicy {
    /// Store it anyway; the last fetch to complete wins
    #[default]
    Apply,
    /// Drop it and keep the current state
    Discard,
}

/// Fetching operations a controller runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operation {
    First,
    Next,
    Refresh,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "get_first"),
            Self::Next => write!(f, "get_next"),
            Self::Refresh => write!(f, "refresh_current"),
        }
    }
}
