//! User domain entity.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::email::is_valid_email;
use crate::error::{DomainError, DomainResult};

/// User domain entity, keyed by email.
///
/// Field names on the wire are `email`, `firstName` and `lastName`. Missing
/// or null fields decode to empty strings, so the zero value doubles as the
/// "no such record" marker returned by a lookup of an absent key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub last_name: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl User {
    /// Create a new user
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Decode a user from a raw JSON request body.
    ///
    /// The body must be a JSON object; arrays and scalars are rejected even
    /// where serde could read them positionally.
    pub fn from_json(body: &str) -> DomainResult<Self> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| DomainError::invalid_data(e.to_string()))?;
        if !value.is_object() {
            return Err(DomainError::invalid_data("body is not a JSON object"));
        }
        serde_json::from_value(value).map_err(|e| DomainError::invalid_data(e.to_string()))
    }

    /// Decode and validate a user from a raw JSON request body.
    pub fn from_request_body(body: &str) -> DomainResult<Self> {
        let user = Self::from_json(body)?;
        user.validate()?;
        Ok(user)
    }

    /// Check the email against the validity predicate
    pub fn validate(&self) -> DomainResult<()> {
        if !is_valid_email(&self.email) {
            return Err(DomainError::invalid_email(self.email.clone()));
        }
        Ok(())
    }

    /// Whether this value came from a stored record (non-empty key)
    pub fn exists(&self) -> bool {
        !self.email.is_empty()
    }
}
