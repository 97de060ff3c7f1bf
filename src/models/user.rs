use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use super::lenient::null_as_default;

/// User account as returned by the users endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totp: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub federation_link: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "HashMap::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub attributes: HashMap<String, Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub disableable_credential_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub required_actions: Vec<String>,
    #[serde(
        default,
        skip_serializing_if = "HashMap::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub access: HashMap<String, bool>,
}

/// Group membership entry as listed under a user.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UserGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Body of the reset-password call.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SetPasswordRequest {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub type_: String,
    #[serde(deserialize_with = "null_as_default")]
    pub temporary: bool,
    #[serde(rename = "value", deserialize_with = "null_as_default")]
    pub password: String,
}

impl SetPasswordRequest {
    pub const PASSWORD_TYPE: &'static str = "password";

    pub fn password(password: impl Into<String>, temporary: bool) -> Self {
        Self {
            type_: Self::PASSWORD_TYPE.to_string(),
            temporary,
            password: password.into(),
        }
    }
}

/// Admin permissions of the caller on a user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Access {
    #[serde(deserialize_with = "null_as_default")]
    pub manage_group_membership: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub view: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub map_roles: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub impersonate: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub manage: bool,
}

/// Attributes set on users imported through LDAP federation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Attributes {
    #[serde(rename = "LDAP_ENTRY_DN", deserialize_with = "null_as_default")]
    pub ldap_entry_dn: Vec<String>,
    #[serde(rename = "LDAP_ID", deserialize_with = "null_as_default")]
    pub ldap_id: Vec<String>,
}

/// Claims returned by the OIDC userinfo endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct UserInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub sub: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email_verified: bool,
    pub address: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub preferred_username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_omits_unset_fields() {
        let user = User {
            username: Some("alice".to_string()),
            enabled: Some(false),
            ..User::default()
        };
        let value = serde_json::to_value(&user).expect("json");
        assert_eq!(value, json!({"username": "alice", "enabled": false}));
    }

    #[test]
    fn user_decodes_server_representation() {
        let body = r#"{
            "id":"6a0e0f3c-5d1f-4a5e-9d7b-3c1d2f3e4a5b",
            "createdTimestamp":1700000000000,
            "username":"alice",
            "enabled":true,
            "totp":false,
            "emailVerified":true,
            "firstName":"Alice",
            "lastName":"Liddell",
            "email":"alice@example.com",
            "attributes":{"locale":["en"]},
            "disableableCredentialTypes":[],
            "requiredActions":["VERIFY_EMAIL"],
            "notBefore":0,
            "access":{"manageGroupMembership":true,"view":true,"mapRoles":true,"impersonate":false,"manage":true}
        }"#;
        let user: User = serde_json::from_str(body).expect("user");
        assert_eq!(user.created_timestamp, Some(1_700_000_000_000));
        assert_eq!(user.totp, Some(false));
        assert_eq!(user.attributes["locale"], vec!["en".to_string()]);
        assert_eq!(user.required_actions, vec!["VERIFY_EMAIL".to_string()]);
        assert_eq!(user.access.get("impersonate"), Some(&false));
    }

    #[test]
    fn user_null_collections_decode_as_empty() {
        let body = r#"{"id":"6a0e","attributes":null,"requiredActions":null,"access":null}"#;
        let user: User = serde_json::from_str(body).expect("user");
        assert_eq!(user.id.as_deref(), Some("6a0e"));
        assert!(user.attributes.is_empty());
        assert!(user.required_actions.is_empty());
        assert!(user.access.is_empty());
        assert_eq!(serde_json::to_string(&user).expect("json"), r#"{"id":"6a0e"}"#);
    }

    #[test]
    fn set_password_request_wire_names() {
        let request = SetPasswordRequest::password("s3cret", true);
        let value = serde_json::to_value(&request).expect("json");
        assert_eq!(
            value,
            json!({"type": "password", "temporary": true, "value": "s3cret"})
        );
    }

    #[test]
    fn ldap_attributes_use_upper_case_names() {
        let attrs: Attributes = serde_json::from_value(json!({
            "LDAP_ENTRY_DN": ["uid=alice,ou=people,dc=example,dc=com"],
            "LDAP_ID": ["1001"]
        }))
        .expect("attributes");
        assert_eq!(attrs.ldap_id, vec!["1001".to_string()]);
        assert_eq!(attrs.ldap_entry_dn.len(), 1);
    }

    #[test]
    fn userinfo_keeps_free_form_address() {
        let info: UserInfo = serde_json::from_value(json!({
            "sub": "6a0e0f3c",
            "email_verified": true,
            "address": {"country": "NZ", "locality": "Wellington"},
            "preferred_username": "alice",
            "email": "alice@example.com"
        }))
        .expect("userinfo");
        assert_eq!(info.address["country"], "NZ");
        assert!(info.email_verified);
    }
}
