//! A named option attached to a user action.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::localized::LocalizedStrings;

/// One selectable option of a [`UserAction`](crate::UserAction), such
/// as a severity level or a reason code. Naturally ordered by name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserActionOption {
    pub localized_names: Option<LocalizedStrings>,
    pub name: String,
}

impl UserActionOption {
    /// Creates an option with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            localized_names: None,
        }
    }

    /// Trims the name and cascades to the localized names.
    pub fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        if let Some(localized_names) = &mut self.localized_names {
            localized_names.normalize();
        }
    }
}

// Ordered by name alone; equality still covers every field.
impl Ord for UserActionOption {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl PartialOrd for UserActionOption {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
