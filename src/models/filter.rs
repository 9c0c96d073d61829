//! View filter selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which contacts the list shows before search is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Filter {
    /// Every contact
    #[default]
    All,

    /// Only starred contacts
    Favourites,

    /// Only contacts whose group equals the name
    Group(String),
}

impl Filter {
    /// Build a filter from a kind string and an optional group name.
    ///
    /// Accepts `all`, `favourites` (or `favorites`) and `group`; `group` requires a
    /// non-empty name.
    pub fn from_parts(kind: &str, group: Option<&str>) -> Result<Self, String> {
        match kind.trim().to_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "favourites" | "favorites" => Ok(Filter::Favourites),
            "group" => match group {
                Some(name) if !name.is_empty() => Ok(Filter::Group(name.to_string())),
                _ => Err("Group filter requires a group name".to_string()),
            },
            other => Err(format!("Unknown filter: {}", other)),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => write!(f, "all"),
            Filter::Favourites => write!(f, "favourites"),
            Filter::Group(name) => write!(f, "group:{}", name),
        }
    }
}
