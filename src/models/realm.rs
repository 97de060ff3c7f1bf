use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use super::lenient::null_as_default;

/// Full realm representation as exported and updated by the admin API.
///
/// Nested collections whose shape depends on the server version (clients,
/// users, flows, federation providers...) are kept as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RealmRepresentation {
    #[serde(deserialize_with = "null_as_default")]
    pub access_code_lifespan: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub access_code_lifespan_login: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub access_code_lifespan_user_action: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub access_token_lifespan: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub access_token_lifespan_for_implicit_flow: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub account_theme: String,
    #[serde(deserialize_with = "null_as_default")]
    pub action_token_generated_by_admin_lifespan: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub action_token_generated_by_user_lifespan: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub admin_events_details_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub admin_events_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub admin_theme: String,
    #[serde(deserialize_with = "null_as_default")]
    pub attributes: HashMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub authentication_flows: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub authenticator_config: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub browser_flow: String,
    #[serde(deserialize_with = "null_as_default")]
    pub browser_security_headers: HashMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub brute_force_protected: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub client_authentication_flow: String,
    #[serde(deserialize_with = "null_as_default")]
    pub client_scope_mappings: HashMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub client_scopes: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub clients: Vec<Value>,
    pub components: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub default_default_client_scopes: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub default_groups: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub default_locale: String,
    #[serde(deserialize_with = "null_as_default")]
    pub default_optional_client_scopes: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub default_roles: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub default_signature_algorithm: String,
    #[serde(deserialize_with = "null_as_default")]
    pub direct_grant_flow: String,
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub display_name_html: String,
    #[serde(deserialize_with = "null_as_default")]
    pub docker_authentication_flow: String,
    #[serde(deserialize_with = "null_as_default")]
    pub duplicate_emails_allowed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub edit_username_allowed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub email_theme: String,
    #[serde(deserialize_with = "null_as_default")]
    pub enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub enabled_event_types: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub events_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub events_expiration: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub events_listeners: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub failure_factor: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub federated_users: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub groups: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub identity_provider_mappers: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub identity_providers: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub internationalization_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub keycloak_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub login_theme: String,
    #[serde(deserialize_with = "null_as_default")]
    pub login_with_email_allowed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub max_delta_time_seconds: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub max_failure_wait_seconds: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub minimum_quick_login_wait_seconds: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub not_before: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub offline_session_idle_timeout: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub offline_session_max_lifespan: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub offline_session_max_lifespan_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub otp_policy_algorithm: String,
    #[serde(deserialize_with = "null_as_default")]
    pub otp_policy_digits: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub otp_policy_initial_counter: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub otp_policy_look_ahead_window: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub otp_policy_period: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub otp_policy_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub otp_supported_applications: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub password_policy: String,
    #[serde(deserialize_with = "null_as_default")]
    pub permanent_lockout: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub protocol_mappers: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub quick_login_check_milli_seconds: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub realm: String,
    #[serde(deserialize_with = "null_as_default")]
    pub refresh_token_max_reuse: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub registration_allowed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub registration_email_as_username: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub registration_flow: String,
    #[serde(deserialize_with = "null_as_default")]
    pub remember_me: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub required_actions: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub reset_credentials_flow: String,
    #[serde(deserialize_with = "null_as_default")]
    pub reset_password_allowed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub revoke_refresh_token: bool,
    pub roles: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub scope_mappings: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub smtp_server: HashMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub ssl_required: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sso_session_idle_timeout: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub sso_session_idle_timeout_remember_me: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub sso_session_max_lifespan: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub sso_session_max_lifespan_remember_me: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub supported_locales: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub user_federation_mappers: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub user_federation_providers: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub user_managed_access_allowed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub users: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub verify_email: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub wait_increment_seconds: i32,
}
