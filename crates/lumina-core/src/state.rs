//! Shared UI state types.

use serde::{Deserialize, Serialize};

/// Main view tabs offered by every Lumina client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewTab {
    #[default]
    Notes,
    Spaces,
    Graph,
}
