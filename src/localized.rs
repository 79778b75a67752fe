//! Localized display strings keyed by locale code.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An ordered map of locale code (`"en"`, `"fr_CA"`, ...) to the
/// display string for that locale.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedStrings(BTreeMap<String, String>);

impl LocalizedStrings {
    /// Creates an empty set of localized strings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display string for a locale, replacing any previous
    /// value.
    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.0.insert(locale.into(), value.into());
    }

    /// Returns the display string for a locale.
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(locale, value)` pairs in locale order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Trims surrounding whitespace from every display string.
    pub fn normalize(&mut self) {
        for value in self.0.values_mut() {
            *value = value.trim().to_string();
        }
    }
}

impl<L, V> FromIterator<(L, V)> for LocalizedStrings
where
    L: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (L, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(locale, value)| (locale.into(), value.into()))
                .collect(),
        )
    }
}
