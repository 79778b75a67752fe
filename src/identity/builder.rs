//! Typed builder for [`User`].

use chrono::{DateTime, NaiveDate, Utc};
use url::Url;
use uuid::Uuid;

use crate::error::{DomainError, Result};
use crate::identity::{
    ContentStatus, User, UserData, UserRegistration,
};

/// Value is missing on [`UserBuilder`].
#[derive(Debug, Clone)]
pub struct Missing;

/// Value is present on [`UserBuilder`].
#[derive(Debug, Clone)]
pub struct Present<T>(pub T);

/// A builder tracking presence of the two identity fields. `build()`
/// only exists once an id, an email, or both have been supplied.
#[derive(Debug, Clone)]
pub struct UserBuilder<Id, Email> {
    id: Id,
    email: Email,
    user: User,
}

impl UserBuilder<Missing, Missing> {
    /// Creates a new [`UserBuilder`] with both identity fields
    /// [`Missing`].
    pub fn new() -> Self {
        Self {
            id: Missing,
            email: Missing,
            user: User::default(),
        }
    }
}

impl Default for UserBuilder<Missing, Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Email> UserBuilder<Missing, Email> {
    /// Sets the account identifier.
    pub fn id(self, id: Uuid) -> UserBuilder<Present<Uuid>, Email> {
        UserBuilder {
            id: Present(id),
            email: self.email,
            user: self.user,
        }
    }
}

impl<Id> UserBuilder<Id, Missing> {
    /// Sets the email address.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the address is not of the `local@domain`
    /// shape. Casing and surrounding whitespace are handled by the
    /// normalization pass on `build()`.
    pub fn email(
        self,
        email: impl Into<String>,
    ) -> Result<UserBuilder<Id, Present<String>>> {
        let email = email.into();
        let valid = match email.trim().split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.is_empty()
                    && !domain.contains('@')
            }
            None => false,
        };

        if valid {
            Ok(UserBuilder {
                id: self.id,
                email: Present(email),
                user: self.user,
            })
        } else {
            Err(DomainError::InvalidEmailFormat)
        }
    }
}

impl<Id, Email> UserBuilder<Id, Email> {
    /// Sets the global username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.user.username = Some(username.into());
        self
    }

    /// Sets the already-hashed password and its salt.
    pub fn password(
        mut self,
        password: impl Into<String>,
        salt: Option<String>,
    ) -> Self {
        self.user.password = Some(password.into());
        self.user.salt = salt;
        self
    }

    /// Names the scheme the password was hashed with.
    pub fn encryption_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.user.encryption_scheme = Some(scheme.into());
        self
    }

    pub fn birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.user.birth_date = Some(birth_date);
        self
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.user.full_name = Some(full_name.into());
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.user.first_name = Some(first_name.into());
        self
    }

    pub fn middle_name(mut self, middle_name: impl Into<String>) -> Self {
        self.user.middle_name = Some(middle_name.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.user.last_name = Some(last_name.into());
        self
    }

    /// Sets when the account expires.
    pub fn expiry(mut self, expiry: DateTime<Utc>) -> Self {
        self.user.expiry = Some(expiry);
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.user.active = active;
        self
    }

    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.user.timezone = Some(timezone.into());
        self
    }

    /// Links the account to the content-moderation service.
    pub fn clean_speak_id(mut self, clean_speak_id: Uuid) -> Self {
        self.user.clean_speak_id = Some(clean_speak_id);
        self
    }

    /// Attaches free-form user data.
    pub fn data(mut self, data: UserData) -> Self {
        self.user.data = Some(data);
        self
    }

    pub fn verified(mut self, verified: bool) -> Self {
        self.user.verified = verified;
        self
    }

    pub fn verification_id(mut self, id: impl Into<String>) -> Self {
        self.user.verification_id = Some(id.into());
        self
    }

    pub fn username_status(mut self, status: ContentStatus) -> Self {
        self.user.username_status = Some(status);
        self
    }

    pub fn two_factor_secret(mut self, secret: impl Into<String>) -> Self {
        self.user.two_factor_secret = Some(secret.into());
        self
    }

    pub fn image_url(mut self, image_url: Url) -> Self {
        self.user.image_url = Some(image_url);
        self
    }

    /// Appends a per-application registration.
    pub fn registration(mut self, registration: UserRegistration) -> Self {
        self.user.add_registration(registration);
        self
    }
}

/// Finalizes the user the way the full constructor does: fields in
/// place, then one normalization pass.
fn finish(mut user: User) -> User {
    user.normalize();
    user
}

impl UserBuilder<Present<Uuid>, Missing> {
    /// Builds a [`User`] identified by id only.
    pub fn build(self) -> User {
        let UserBuilder {
            id: Present(id),
            email: _,
            mut user,
        } = self;
        user.id = Some(id);
        finish(user)
    }
}

impl UserBuilder<Missing, Present<String>> {
    /// Builds a [`User`] identified by email only.
    pub fn build(self) -> User {
        let UserBuilder {
            id: _,
            email: Present(email),
            mut user,
        } = self;
        user.email = Some(email);
        finish(user)
    }
}

impl UserBuilder<Present<Uuid>, Present<String>> {
    /// Builds a [`User`] carrying both identity fields.
    pub fn build(self) -> User {
        let UserBuilder {
            id: Present(id),
            email: Present(email),
            mut user,
        } = self;
        user.id = Some(id);
        user.email = Some(email);
        finish(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_normalizes_fields() {
        let user = User::builder()
            .email(" Jane@Example.COM ")
            .unwrap()
            .username("  jane ")
            .first_name(" Jane ")
            .build();

        assert_eq!(user.email.as_deref(), Some("jane@example.com"));
        assert_eq!(user.username.as_deref(), Some("jane"));
        assert_eq!(user.first_name.as_deref(), Some("Jane"));
    }

    #[test]
    fn test_build_with_id_and_registration() {
        let id = Uuid::new_v4();
        let app = Uuid::new_v4();
        let user = User::builder()
            .id(id)
            .active(true)
            .registration(UserRegistration::new(app))
            .build();

        assert_eq!(user.id, Some(id));
        assert!(user.active);
        assert!(user.registration_for_application(app).is_some());
    }

    #[test]
    fn test_rejects_malformed_email() {
        for bad in ["not-an-email", "a@b@c", "@domain", "local@"] {
            assert!(
                User::builder().email(bad).is_err(),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_both_identities() {
        let id = Uuid::new_v4();
        let user = User::builder()
            .id(id)
            .email("a@b.com")
            .unwrap()
            .build();
        assert_eq!(user.id, Some(id));
        assert_eq!(user.login(), Some("a@b.com"));
    }
}
