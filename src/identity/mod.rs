//! The global view of a user and its per-application registrations.

mod builder;
mod data;
mod registration;
mod status;

pub use builder::{Missing, Present, UserBuilder};
pub use data::UserData;
pub use registration::UserRegistration;
pub use status::{ContentStatus, ParentalConsentType};

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::normalize;

/// The global view of a user: identity, credentials, status flags, and
/// the registrations tying the account to individual applications.
///
/// String fields are expected to be [`normalize`](User::normalize)d
/// before persistence or comparison, and [`secure`](User::secure)
/// strips credentials before the object crosses a trust boundary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    child_ids: Vec<Uuid>,
    registrations: Vec<UserRegistration>,

    pub active: bool,
    pub birth_date: Option<NaiveDate>,
    /// Identifier of this account in the content-moderation service.
    pub clean_speak_id: Option<Uuid>,
    pub parental_consent_type: Option<ParentalConsentType>,
    pub data: Option<UserData>,
    pub email: Option<String>,
    /// Name of the scheme the password was hashed with.
    pub encryption_scheme: Option<String>,
    /// When the account expires and can no longer log in.
    pub expiry: Option<DateTime<Utc>>,
    pub first_name: Option<String>,
    pub full_name: Option<String>,
    pub id: Option<Uuid>,
    pub image_url: Option<Url>,
    pub last_login_instant: Option<DateTime<Utc>>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub mobile_phone: Option<String>,
    /// Parent account, for child accounts under parental consent.
    pub parent_id: Option<Uuid>,
    pub password: Option<String>,
    pub password_change_required: bool,
    pub salt: Option<String>,
    pub timezone: Option<String>,
    pub two_factor_enabled: bool,
    pub two_factor_secret: Option<String>,
    pub username: Option<String>,
    pub username_status: Option<ContentStatus>,
    /// Outstanding email-verification id, if a verification is pending.
    pub verification_id: Option<String>,
    pub verification_id_create_instant: Option<DateTime<Utc>>,
    pub verified: bool,
}

impl User {
    /// Starts a [`UserBuilder`]; `build()` becomes available once an
    /// id or an email has been supplied.
    pub fn builder() -> UserBuilder<Missing, Missing> {
        UserBuilder::new()
    }

    /// Identifiers of the child accounts tied to this one.
    pub fn child_ids(&self) -> &[Uuid] {
        &self.child_ids
    }

    /// Ties a child account to this one.
    pub fn add_child_id(&mut self, id: Uuid) {
        self.child_ids.push(id);
    }

    /// The user's registrations, in insertion order.
    pub fn registrations(&self) -> &[UserRegistration] {
        &self.registrations
    }

    /// Appends a registration. At most one registration per
    /// application is expected; the lookups below return the first
    /// match.
    pub fn add_registration(&mut self, registration: UserRegistration) {
        self.registrations.push(registration);
    }

    /// The canonical login identifier: the email when present,
    /// otherwise the username. Used by mobile UIs.
    pub fn login(&self) -> Option<&str> {
        self.email.as_deref().or(self.username.as_deref())
    }

    /// The display name: the full name when present, otherwise
    /// "first last" (just "first" when there is no last name).
    pub fn name(&self) -> Option<String> {
        if let Some(full_name) = &self.full_name {
            return Some(full_name.clone());
        }

        self.first_name.as_ref().map(|first| match &self.last_name {
            Some(last) => format!("{first} {last}"),
            None => first.clone(),
        })
    }

    /// The user's preferred languages, empty when no data is attached.
    pub fn preferred_languages(&self) -> &[String] {
        self.data
            .as_ref()
            .map(|data| data.preferred_languages.as_slice())
            .unwrap_or_default()
    }

    /// The registration for an application, if the user has one.
    pub fn registration_for_application(
        &self,
        id: Uuid,
    ) -> Option<&UserRegistration> {
        self.registrations
            .iter()
            .find(|registration| registration.application_id == id)
    }

    /// The data attached to the user's registration for an application.
    pub fn data_for_application(&self, id: Uuid) -> Option<&UserData> {
        self.registration_for_application(id)
            .and_then(|registration| registration.data.as_ref())
    }

    /// Names of the roles the user holds within an application. `None`
    /// when the user is not registered there.
    pub fn role_names_for_application(
        &self,
        id: Uuid,
    ) -> Option<&BTreeSet<String>> {
        self.registration_for_application(id)
            .map(|registration| &registration.roles)
    }

    /// Normalizes all of the string fields: trims them, lower-cases
    /// the email after trimming, and cascades to the attached data and
    /// every registration. Idempotent.
    pub fn normalize(&mut self) {
        self.email =
            normalize::to_lower_case(normalize::trim(self.email.take()));
        if let Some(data) = &mut self.data {
            data.normalize();
        }
        self.encryption_scheme =
            normalize::trim(self.encryption_scheme.take());
        self.first_name = normalize::trim(self.first_name.take());
        self.full_name = normalize::trim(self.full_name.take());
        self.last_name = normalize::trim(self.last_name.take());
        self.middle_name = normalize::trim(self.middle_name.take());
        self.mobile_phone = normalize::trim(self.mobile_phone.take());
        self.timezone = normalize::trim(self.timezone.take());
        self.username = normalize::trim(self.username.take());
        for registration in &mut self.registrations {
            registration.normalize();
        }
    }

    /// Clears the password, salt and two-factor secret before the
    /// object crosses a trust boundary, recording whether two-factor
    /// was set up in `two_factor_enabled`.
    ///
    /// The flag is recomputed from the secret at call time, so a
    /// second call clears it again. Call once, right before exposure.
    pub fn secure(&mut self) -> &mut Self {
        self.salt = None;
        self.password = None;
        self.two_factor_enabled = self.two_factor_secret.is_some();
        self.two_factor_secret = None;
        self
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json =
            serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::{DefaultHasher, Hash, Hasher};

    fn hash_of(user: &User) -> u64 {
        let mut hasher = DefaultHasher::new();
        user.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_login_prefers_email() {
        let mut user = User {
            email: Some("  A@B.com ".to_string()),
            username: Some("bob".to_string()),
            ..Default::default()
        };
        user.normalize();
        assert_eq!(user.login(), Some("a@b.com"));

        user.email = None;
        assert_eq!(user.login(), Some("bob"));

        user.username = None;
        assert_eq!(user.login(), None);
    }

    #[test]
    fn test_name_fallback_chain() {
        let mut user = User {
            full_name: Some("Jane Doe".to_string()),
            first_name: Some("Janet".to_string()),
            last_name: Some("Smith".to_string()),
            ..Default::default()
        };
        assert_eq!(user.name().as_deref(), Some("Jane Doe"));

        user.full_name = None;
        assert_eq!(user.name().as_deref(), Some("Janet Smith"));

        user.last_name = None;
        assert_eq!(user.name().as_deref(), Some("Janet"));

        user.first_name = None;
        assert_eq!(user.name(), None);
    }

    #[test]
    fn test_secure_redacts_credentials() {
        let mut user = User {
            password: Some("p".to_string()),
            salt: Some("s".to_string()),
            two_factor_secret: Some("t2f".to_string()),
            ..Default::default()
        };

        user.secure();
        assert_eq!(user.password, None);
        assert_eq!(user.salt, None);
        assert_eq!(user.two_factor_secret, None);
        assert!(user.two_factor_enabled);

        // Recomputed from the (now cleared) secret: a second call
        // drops the flag. Preserved behavior, not a feature.
        user.secure();
        assert!(!user.two_factor_enabled);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut user = User {
            email: Some(" Jane@Example.COM ".to_string()),
            first_name: Some(" Jane ".to_string()),
            timezone: Some(" America/Denver ".to_string()),
            ..Default::default()
        };
        let mut registration = UserRegistration::new(Uuid::new_v4());
        registration.username = Some(" jane ".to_string());
        user.add_registration(registration);

        user.normalize();
        let once = user.clone();
        user.normalize();
        assert_eq!(user, once);
        assert_eq!(user.email.as_deref(), Some("jane@example.com"));
        assert_eq!(
            user.registrations()[0].username.as_deref(),
            Some("jane")
        );
    }

    #[test]
    fn test_registration_lookups() {
        let app = Uuid::new_v4();
        let other = Uuid::new_v4();

        let mut registration = UserRegistration::new(app);
        registration.roles.insert("admin".to_string());
        registration.data = Some(UserData {
            preferred_languages: vec!["en".to_string()],
            ..Default::default()
        });

        let mut user = User::default();
        user.add_registration(registration);

        assert!(user.registration_for_application(app).is_some());
        assert!(user.registration_for_application(other).is_none());
        assert!(
            user.role_names_for_application(app)
                .unwrap()
                .contains("admin")
        );
        assert_eq!(user.role_names_for_application(other), None);
        assert_eq!(
            user.data_for_application(app).unwrap().preferred_languages,
            vec!["en"]
        );
        assert_eq!(user.data_for_application(other), None);
    }

    #[test]
    fn test_preferred_languages_without_data() {
        let user = User::default();
        assert!(user.preferred_languages().is_empty());
    }

    #[test]
    fn test_equality_and_hash() {
        let id = Uuid::new_v4();
        let make = || User {
            id: Some(id),
            email: Some("jane@example.com".to_string()),
            active: true,
            ..Default::default()
        };

        let a = make();
        let b = make();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let mut c = make();
        c.verified = true;
        assert_ne!(a, c);

        let mut d = make();
        d.add_child_id(Uuid::new_v4());
        assert_ne!(a, d);
    }

    #[test]
    fn test_serialized_shape_is_camel_case() {
        let user = User {
            first_name: Some("Jane".to_string()),
            password: Some("secret".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["firstName"], "Jane");
        // Credentials stay in the document; secure() is the redaction
        // step, not serialization.
        assert_eq!(json["password"], "secret");
        assert!(json.get("childIds").is_some());
        // Derived accessors are methods and never serialized.
        assert!(json.get("login").is_none());
        assert!(json.get("name").is_none());
    }

    #[test]
    fn test_deserializes_partial_document() {
        let user: User =
            serde_json::from_str(r#"{ "email": "a@b.com", "active": true }"#)
                .unwrap();
        assert!(user.active);
        assert_eq!(user.email.as_deref(), Some("a@b.com"));
        assert!(user.registrations().is_empty());
    }
}
