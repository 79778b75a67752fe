//! Moderation and consent states attached to an account.

use serde::{Deserialize, Serialize};

/// Moderation status of a piece of user-submitted content, such as a
/// chosen username.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContentStatus {
    #[default]
    Active,
    Pending,
    Rejected,
}

/// How parental consent was obtained for a child account.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum ParentalConsentType {
    EmailOnly,
    EmailPlus,
}
