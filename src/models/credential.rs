use serde::{Deserialize, Serialize};
use super::lenient::null_as_default;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct MultivaluedHashMap {
    #[serde(deserialize_with = "null_as_default")]
    pub empty: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub load_factor: f32,
    #[serde(deserialize_with = "null_as_default")]
    pub threshold: i32,
}

/// Stored credential of a user (password hash, OTP secret...).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CredentialRepresentation {
    #[serde(deserialize_with = "null_as_default")]
    pub algorithm: String,
    #[serde(deserialize_with = "null_as_default")]
    pub config: MultivaluedHashMap,
    #[serde(deserialize_with = "null_as_default")]
    pub counter: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub created_date: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub device: String,
    #[serde(deserialize_with = "null_as_default")]
    pub digits: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub hash_iterations: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub hashed_salted_value: String,
    #[serde(deserialize_with = "null_as_default")]
    pub period: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub salt: String,
    #[serde(deserialize_with = "null_as_default")]
    pub temporary: bool,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub type_: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_otp_credential() {
        let body = r#"{
            "type":"otp","device":"pixel","digits":6,"period":30,"counter":0,
            "algorithm":"HmacSHA1","createdDate":1700000000000,
            "config":{"empty":false,"loadFactor":0.75,"threshold":12}
        }"#;
        let credential: CredentialRepresentation = serde_json::from_str(body).expect("credential");
        assert_eq!(credential.type_, "otp");
        assert_eq!(credential.digits, 6);
        assert_eq!(credential.created_date, 1_700_000_000_000);
        assert_eq!(credential.config.threshold, 12);
        assert!((credential.config.load_factor - 0.75).abs() < f32::EPSILON);
        assert!(credential.value.is_empty());
    }
}
