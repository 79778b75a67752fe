//! Free-form data attached to a user or to one of its registrations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Caller-defined attributes plus the user's preferred languages, in
/// preference order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserData {
    pub attributes: BTreeMap<String, String>,
    /// Locale codes, most preferred first.
    pub preferred_languages: Vec<String>,
}

impl UserData {
    /// Trims surrounding whitespace from every language tag.
    pub fn normalize(&mut self) {
        for language in &mut self.preferred_languages {
            *language = language.trim().to_string();
        }
    }
}
