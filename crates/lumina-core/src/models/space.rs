//! Space model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A unique identifier for a space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpaceId(Uuid);

impl SpaceId {
    /// Create a new unique space ID
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for SpaceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SpaceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A grouping container for notes.
///
/// `color` and `icon` are free-form labels interpreted by the presentation
/// layer; the store never validates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    /// Unique identifier
    pub id: SpaceId,
    /// Display name
    pub name: String,
    /// Accent color label (e.g. "blue")
    pub color: String,
    /// Icon label (e.g. "briefcase")
    pub icon: String,
    /// Display ordering position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<u32>,
}

impl Space {
    /// Create a new space with the given display attributes
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
        sort_order: u32,
    ) -> Self {
        Self {
            id: SpaceId::new(),
            name: name.into(),
            color: color.into(),
            icon: icon.into(),
            sort_order: Some(sort_order),
        }
    }

    /// Merge a partial update into this space
    pub fn apply(&mut self, patch: SpacePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(icon) = patch.icon {
            self.icon = icon;
        }
        if let Some(sort_order) = patch.sort_order {
            self.sort_order = Some(sort_order);
        }
    }
}

/// A partial space update; unset fields leave the stored value untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpacePatch {
    pub name: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub sort_order: Option<u32>,
}

impl SpacePatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub const fn sort_order(mut self, sort_order: u32) -> Self {
        self.sort_order = Some(sort_order);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_id_unique() {
        let id1 = SpaceId::new();
        let id2 = SpaceId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_space_new() {
        let space = Space::new("Work", "blue", "briefcase", 0);
        assert_eq!(space.name, "Work");
        assert_eq!(space.color, "blue");
        assert_eq!(space.icon, "briefcase");
        assert_eq!(space.sort_order, Some(0));
    }

    #[test]
    fn test_space_apply_partial() {
        let mut space = Space::new("Work", "blue", "briefcase", 0);
        space.apply(SpacePatch::new().name("Projects").color("purple"));
        assert_eq!(space.name, "Projects");
        assert_eq!(space.color, "purple");
        assert_eq!(space.icon, "briefcase");
    }
}
