//! A user's association with a single application.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::identity::data::UserData;
use crate::identity::status::ContentStatus;
use crate::normalize;

/// Per-application state for one user: the roles they hold there, an
/// optional application-local username, and free-form data scoped to
/// that application.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRegistration {
    pub id: Option<Uuid>,
    /// The application this registration belongs to. A user holds at
    /// most one registration per application.
    pub application_id: Uuid,
    pub data: Option<UserData>,
    pub insert_instant: Option<DateTime<Utc>>,
    pub last_login_instant: Option<DateTime<Utc>>,
    /// Names of the roles held within the application.
    pub roles: BTreeSet<String>,
    /// Application-local username, when it differs from the global one.
    pub username: Option<String>,
    pub username_status: Option<ContentStatus>,
}

impl UserRegistration {
    /// Creates a registration for an application.
    pub fn new(application_id: Uuid) -> Self {
        Self {
            application_id,
            ..Default::default()
        }
    }

    /// Trims the username and cascades to the attached data.
    pub fn normalize(&mut self) {
        self.username = normalize::trim(self.username.take());
        if let Some(data) = &mut self.data {
            data.normalize();
        }
    }
}
