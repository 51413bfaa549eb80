/// User domain types
use crate::error::{Result, RosterError};
use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// Stored user record
///
/// Serializes as exactly `id`, `name`, `phone`, `email`; a missing phone is
/// written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Display name (at most 100 characters)
    pub name: String,

    /// Optional phone number
    pub phone: Option<i64>,

    /// Email address (at most 120 characters, unique)
    pub email: String,
}

/// Data for creating a new user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Optional phone number
    pub phone: Option<i64>,
}

impl CreateUser {
    /// Create the insert data for a user
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: Option<i64>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone,
        }
    }

    /// Check that `name` and `email` are present
    pub fn validate(&self) -> Result<()> {
        require_fields(&self.name, &self.email)
    }
}

/// Full replacement of a user's mutable fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New display name
    pub name: String,
    /// New email address
    pub email: String,
    /// New phone number, `None` clears it
    pub phone: Option<i64>,
}

impl UpdateUser {
    /// Check that `name` and `email` are present
    pub fn validate(&self) -> Result<()> {
        require_fields(&self.name, &self.email)
    }
}

impl From<&User> for UpdateUser {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone,
        }
    }
}

fn require_fields(name: &str, email: &str) -> Result<()> {
    let missing: Vec<&str> = [("name", name), ("email", email)]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(RosterError::validation(format!(
            "missing required fields: {}",
            missing.join(", ")
        )))
    }
}
