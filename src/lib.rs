//! Core domain model for the identity service.
//!
//! This crate is the innermost layer of the service: plain value
//! objects shared by the persistence and API layers. It performs no
//! I/O — everything here is synchronous, in-memory computation over
//! the objects' own fields.
//!
//! The three aggregates are:
//! - [`User`], the global view of an account, with per-application
//!   registrations and a [`secure`](User::secure) step that redacts
//!   credentials before the object crosses a trust boundary;
//! - [`UserAction`], a configurable action taken on a user (discipline
//!   or reward), with lifecycle email templates and named options;
//! - [`IntervalCount`], usage counts for a single time bucket.

pub mod action;
pub mod error;
pub mod identity;
pub mod interval;
pub mod localized;
pub mod normalize;

pub use action::{UserAction, UserActionOption};
pub use error::{DomainError, Result};
pub use identity::{
    ContentStatus, ParentalConsentType, User, UserBuilder, UserData,
    UserRegistration,
};
pub use interval::IntervalCount;
pub use localized::LocalizedStrings;
