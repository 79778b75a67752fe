//! Actions that can be executed on a user, discipline or reward.

mod option;

pub use option::UserActionOption;

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::localized::LocalizedStrings;

/// A configurable action taken on a user: ban, mute, warn, reward.
///
/// Time-based (`temporal`) actions carry a lifecycle — start, modify,
/// cancel, end — and an optional email template for each stage.
/// Actions order naturally by name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserAction {
    pub active: bool,
    /// Time-based actions only. Template sent when cancelled.
    pub cancel_email_template_id: Option<Uuid>,
    /// Time-based actions only. Template sent when the action ends.
    pub end_email_template_id: Option<Uuid>,
    pub id: Option<Uuid>,
    /// Whether notification payloads carry the user's email address.
    pub include_email_in_notification_json: bool,
    pub localized_names: Option<LocalizedStrings>,
    /// Time-based actions only. Template sent when modified.
    pub modify_email_template_id: Option<Uuid>,
    pub name: String,
    /// The action's selectable options, owner-sorted via
    /// [`sort_options`](UserAction::sort_options).
    pub options: Vec<UserActionOption>,
    /// Whether the user is kept from logging in while actioned.
    pub prevent_login: bool,
    /// Time-based actions only. Send a notification when the action
    /// expires.
    pub send_end_notification: bool,
    /// All actions. Template sent when the action is first taken.
    pub start_email_template_id: Option<Uuid>,
    pub temporal: bool,
    pub user_emailing_enabled: bool,
    /// Instructs notification consumers to notify the user.
    pub user_notifications_enabled: bool,
}

impl UserAction {
    /// Creates an inactive action with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// The option with the given name, scanning in list order.
    pub fn option(&self, name: &str) -> Option<&UserActionOption> {
        self.options.iter().find(|option| option.name == name)
    }

    /// Trims the name and cascades to the localized names and every
    /// option.
    pub fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        if let Some(localized_names) = &mut self.localized_names {
            localized_names.normalize();
        }
        for option in &mut self.options {
            option.normalize();
        }
    }

    /// Sorts the options in place into natural (name) order.
    pub fn sort_options(&mut self) {
        self.options.sort();
    }

    /// Whether the given email template is used by any stage of this
    /// action's lifecycle.
    pub fn uses_email_template(&self, email_template_id: Uuid) -> bool {
        [
            self.start_email_template_id,
            self.modify_email_template_id,
            self.cancel_email_template_id,
            self.end_email_template_id,
        ]
        .contains(&Some(email_template_id))
    }
}

// Ordered by name alone; equality still covers every field.
impl Ord for UserAction {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl PartialOrd for UserAction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for UserAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json =
            serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
