use crate::error::Error;
use jsonwebtoken::{Algorithm, DecodingKey};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use super::lenient::null_as_default;

/// One key of the realm certs (JWKS) endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CertResponseKey {
    #[serde(deserialize_with = "null_as_default")]
    pub kid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub kty: String,
    #[serde(deserialize_with = "null_as_default")]
    pub alg: String,
    #[serde(rename = "use", deserialize_with = "null_as_default")]
    pub use_: String,
    #[serde(deserialize_with = "null_as_default")]
    pub n: String,
    #[serde(deserialize_with = "null_as_default")]
    pub e: String,
}

impl CertResponseKey {
    pub fn algorithm(&self) -> Result<Algorithm, Error> {
        Algorithm::from_str(&self.alg).map_err(|_| Error::UnsupportedAlg(self.alg.clone()))
    }

    /// Verification key built from the RSA modulus and exponent.
    pub fn decoding_key(&self) -> Result<DecodingKey, Error> {
        if self.kty != "RSA" {
            return Err(Error::UnsupportedKeyType(self.kty.clone()));
        }
        Ok(DecodingKey::from_rsa_components(&self.n, &self.e)?)
    }
}

/// Key set served by the realm certs endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CertResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub keys: Vec<CertResponseKey>,
}

impl CertResponse {
    pub fn find(&self, kid: &str) -> Option<&CertResponseKey> {
        self.keys.iter().find(|key| key.kid == kid)
    }
}

/// Public realm information served at the realm issuer url.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct IssuerResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub realm: String,
    #[serde(deserialize_with = "null_as_default")]
    pub public_key: String,
    #[serde(rename = "token-service", deserialize_with = "null_as_default")]
    pub token_service: String,
    #[serde(rename = "account-service", deserialize_with = "null_as_default")]
    pub account_service: String,
    #[serde(rename = "tokens-not-before", deserialize_with = "null_as_default")]
    pub tokens_not_before: i32,
}

/// Result of the token introspection endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct IntrospectTokenResult {
    #[serde(
        default,
        skip_serializing_if = "HashMap::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub permissions: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    #[serde(rename = "typ", default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

impl IntrospectTokenResult {
    /// Whether the server reported the token as active.
    pub fn is_active(&self) -> bool {
        self.active.unwrap_or(false)
    }
}
