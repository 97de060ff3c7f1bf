use crate::query::{is_default, QueryParams};
use serde::Serialize;

/// Optional filters for listing the users of a realm.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUsersParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brief_representation: Option<bool>,
    #[serde(skip_serializing_if = "is_default")]
    pub email: String,
    #[serde(skip_serializing_if = "is_default")]
    pub first: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub first_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub last_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub max: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub search: String,
    #[serde(skip_serializing_if = "is_default")]
    pub username: String,
}

impl QueryParams for GetUsersParams {}

/// Optional filters for listing the groups of a realm.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GetGroupsParams {
    #[serde(skip_serializing_if = "is_default")]
    pub first: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub max: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub search: String,
}

impl QueryParams for GetGroupsParams {}

/// Filters of the clients listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetClientsParams {
    #[serde(skip_serializing_if = "is_default")]
    pub client_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub viewable_only: bool,
}

impl QueryParams for GetClientsParams {}

/// Parameters for sending a user the "execute actions" email.
///
/// `user_id` belongs in the request path and `actions` in the request body;
/// neither is part of the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExecuteActionsEmail {
    #[serde(skip)]
    pub user_id: String,
    #[serde(rename = "clientId", skip_serializing_if = "is_default")]
    pub client_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub lifespan: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub redirect_uri: String,
    #[serde(skip)]
    pub actions: Vec<String>,
}

impl ExecuteActionsEmail {
    /// JSON body of the request: the required actions to perform.
    pub fn body(&self) -> &[String] {
        &self.actions
    }
}

impl QueryParams for ExecuteActionsEmail {}
