//! User profile entity and the contact summary joined onto bookings and reviews.
//!
//! Credentials live with the identity provider that issues access tokens;
//! this service keeps the profile guests are booked and reviewed under.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::non_blank;

/// Access role carried by a user and by their access token
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    #[default]
    User,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::User => "USER",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(UserRole::Admin),
            "USER" => Ok(UserRole::User),
            other => Err(format!("Unknown user role: {}", other)),
        }
    }
}

/// A registered guest or staff member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Contact email, unique across users
    pub email: String,

    /// Contact phone number, if the user provided one
    pub phone_number: Option<String>,

    /// Access role
    pub role: UserRole,

    /// Deactivated users keep their history but can no longer book or review
    pub active: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for registering a user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
}

/// Partial update of a user's own profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub name: Option<String>,
    pub phone_number: Option<String>,
}

impl User {
    /// Creates an active user with the default role
    pub fn new(input: NewUser) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            email: input.email,
            phone_number: non_blank(input.phone_number),
            role: UserRole::default(),
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merges the provided fields; blank strings leave the field unchanged
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = non_blank(patch.name) {
            self.name = name;
        }
        if let Some(phone_number) = non_blank(patch.phone_number) {
            self.phone_number = Some(phone_number);
        }
        self.updated_at = Utc::now();
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.updated_at = Utc::now();
    }
}

/// Contact summary of a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Contact phone number, if the user provided one
    pub phone_number: Option<String>,
}
