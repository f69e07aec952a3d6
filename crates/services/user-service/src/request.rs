//! API-gateway proxy request and helpers that feed it to a repository.
//!
//! The hosting environment routes by HTTP method and formats the response;
//! these helpers only pull the body and the `email` query parameter out of
//! the request.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use common::AppResult;
use domain::{User, EMAIL_QUERY_PARAM};

use crate::repository::UserRepository;

/// Proxy request as delivered by an API gateway.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GatewayRequest {
    pub body: Option<String>,
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl GatewayRequest {
    /// Raw body, empty when the request carried none
    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }

    /// Value of the `email` query parameter
    pub fn email_param(&self) -> Option<&str> {
        self.query_string_parameters
            .as_ref()?
            .get(EMAIL_QUERY_PARAM)
            .map(String::as_str)
    }
}

/// Result of a read request: a single user or the whole table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Lookup {
    One(User),
    All(Vec<User>),
}

/// Fetch one user when `email` is given, otherwise scan the table.
pub async fn fetch_from_request(
    repo: &dyn UserRepository,
    request: &GatewayRequest,
    table: &str,
) -> AppResult<Lookup> {
    match request.email_param() {
        Some(email) => Ok(Lookup::One(repo.fetch(email, table).await?)),
        None => Ok(Lookup::All(repo.fetch_all(table).await?)),
    }
}

/// Create a user from the request body.
pub async fn create_from_request(
    repo: &dyn UserRepository,
    request: &GatewayRequest,
    table: &str,
) -> AppResult<User> {
    repo.create(request.body(), table).await
}

/// Replace a user from the request body.
pub async fn update_from_request(
    repo: &dyn UserRepository,
    request: &GatewayRequest,
    table: &str,
) -> AppResult<User> {
    repo.update(request.body(), table).await
}

/// Delete the user named by the `email` query parameter.
///
/// A missing parameter deletes the empty key, which succeeds like any other
/// delete of an absent record.
pub async fn delete_from_request(
    repo: &dyn UserRepository,
    request: &GatewayRequest,
    table: &str,
) -> AppResult<()> {
    repo.delete(request.email_param().unwrap_or_default(), table)
        .await
}
