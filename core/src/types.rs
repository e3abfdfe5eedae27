//! Domain DTOs for the user-record API.
//!
//! # Design
//! These types mirror the server's wire schema but are defined independently
//! of the server crate; integration tests catch schema drift. `Draft` keeps
//! the raw form values as strings because that is what a form produces; the
//! typed `UserInput` only exists once validation has passed.

use serde::{Deserialize, Serialize};

/// A single user record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: u32,
}

/// Validated payload for creating or replacing a record. Updates are
/// wholesale: all three fields travel together, there is no partial patch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub age: u32,
}

/// In-progress form state, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub age: String,
}

impl From<&User> for Draft {
    /// Seed the form from an existing record, rendering numbers back to the
    /// strings a form field holds.
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            age: user.age.to_string(),
        }
    }
}
