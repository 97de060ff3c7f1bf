use serde::{Deserialize, Serialize};
use super::lenient::null_as_default;

/// Client entry of the clients listing.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Client {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub client_id: String,
}

/// Client scope with its protocol mappers.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientScope {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub protocol: String,
    #[serde(rename = "attributes", deserialize_with = "null_as_default")]
    pub client_scope_attributes: ClientScopeAttributes,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub protocol_mappers: Vec<ProtocolMappers>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ClientScopeAttributes {
    #[serde(rename = "consent.screen.text", deserialize_with = "null_as_default")]
    pub consent_screen_text: String,
    #[serde(rename = "display.on.consent.screen", deserialize_with = "null_as_default")]
    pub display_on_consent_screen: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ProtocolMappers {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub protocol: String,
    #[serde(deserialize_with = "null_as_default")]
    pub protocol_mapper: String,
    #[serde(deserialize_with = "null_as_default")]
    pub consent_required: bool,
    #[serde(rename = "config", deserialize_with = "null_as_default")]
    pub protocol_mappers_config: ProtocolMappersConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProtocolMappersConfig {
    #[serde(rename = "userinfo.token.claim", deserialize_with = "null_as_default")]
    pub userinfo_token_claim: String,
    #[serde(rename = "user.attribute", deserialize_with = "null_as_default")]
    pub user_attribute: String,
    #[serde(rename = "id.token.claim", deserialize_with = "null_as_default")]
    pub id_token_claim: String,
    #[serde(rename = "access.token.claim", deserialize_with = "null_as_default")]
    pub access_token_claim: String,
    #[serde(rename = "claim.name", deserialize_with = "null_as_default")]
    pub claim_name: String,
    #[serde(rename = "jsonType.label", deserialize_with = "null_as_default")]
    pub json_type_label: String,
}
