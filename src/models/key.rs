use serde::{Deserialize, Serialize};
use super::lenient::null_as_default;

/// Realm component, e.g. a key provider or a user storage provider.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Component {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub provider_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub provider_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub parent_id: String,
    #[serde(rename = "config", deserialize_with = "null_as_default")]
    pub component_config: ComponentConfig,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub sub_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ComponentConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub priority: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub algorithm: Vec<String>,
}

/// Response of the realm keys endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct KeyStoreConfig {
    #[serde(rename = "active", deserialize_with = "null_as_default")]
    pub active_keys: ActiveKeys,
    #[serde(rename = "keys", deserialize_with = "null_as_default")]
    pub key: Vec<Key>,
}

impl KeyStoreConfig {
    /// The key currently used for `algorithm`, if any.
    pub fn active_key(&self, algorithm: &str) -> Option<&Key> {
        let kid = self.active_keys.kid_for(algorithm)?;
        self.key.iter().find(|key| key.kid == kid)
    }
}

/// Key id of the active key per algorithm.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ActiveKeys {
    #[serde(rename = "HS256", deserialize_with = "null_as_default")]
    pub hs256: String,
    #[serde(rename = "RS256", deserialize_with = "null_as_default")]
    pub rs256: String,
    #[serde(rename = "AES", deserialize_with = "null_as_default")]
    pub aes: String,
}

impl ActiveKeys {
    pub fn kid_for(&self, algorithm: &str) -> Option<&str> {
        let kid = match algorithm {
            "HS256" => &self.hs256,
            "RS256" => &self.rs256,
            "AES" => &self.aes,
            _ => return None,
        };
        (!kid.is_empty()).then_some(kid.as_str())
    }
}

/// One realm key as listed by the keys endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Key {
    #[serde(deserialize_with = "null_as_default")]
    pub provider_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub provider_priority: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub kid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub type_: String,
    #[serde(deserialize_with = "null_as_default")]
    pub algorithm: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub public_key: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub certificate: String,
}
