use keycloak_rs::{
    ApiError, CertResponse, Group, IntrospectTokenResult, KeyStoreConfig, RealmRepresentation,
    User,
};
use serde_json::{json, Value};

#[test]
fn certs_response_exposes_key_fields() {
    let body = r#"{"keys":[{"kid":"FJ86GcF3jTbNLOco4NvZkUCIUmfYCqoqtOQeMfbhNlE","kty":"RSA","alg":"RS256","use":"sig","n":"q1awrk7QK24Gmcy9Yb4dMbS-ZnO6NDaj1Z2F5C74HMIgtXA0YvRjs8P1QGFxrXcCDbGA5YlEd8C5SpD8MAoHSDE","e":"AQAB"}]}"#;
    let certs: CertResponse = serde_json::from_str(body).expect("certs");
    assert_eq!(certs.keys.len(), 1);
    let key = certs
        .find("FJ86GcF3jTbNLOco4NvZkUCIUmfYCqoqtOQeMfbhNlE")
        .expect("key");
    assert_eq!(key.kty, "RSA");
    assert_eq!(key.alg, "RS256");
    assert_eq!(key.use_, "sig");
    assert!(key.n.starts_with("q1awrk7QK24G"));
    assert_eq!(key.e, "AQAB");
}

#[test]
fn explicit_null_members_decode_to_defaults() {
    let body = r#"{"keys":[{"kid":"k1","kty":"RSA","alg":"RS256","use":null,"n":"AQAB","e":"AQAB"}]}"#;
    let certs: CertResponse = serde_json::from_str(body).expect("certs");
    assert_eq!(certs.find("k1").expect("key").use_, "");

    let realm: RealmRepresentation =
        serde_json::from_value(json!({"realm": "demo", "displayName": null})).expect("realm");
    assert_eq!(realm.realm, "demo");
    assert_eq!(realm.display_name, "");
}

#[test]
fn user_round_trips_without_field_loss() {
    let original = json!({
        "id": "6a0e0f3c",
        "createdTimestamp": 1700000000000i64,
        "username": "alice",
        "enabled": true,
        "totp": false,
        "emailVerified": false,
        "firstName": "Alice",
        "lastName": "Liddell",
        "email": "alice@example.com",
        "federationLink": "ldap-1",
        "attributes": {"LDAP_ID": ["1001"]},
        "disableableCredentialTypes": ["otp"],
        "requiredActions": ["CONFIGURE_TOTP"],
        "access": {"view": true, "manage": false}
    });
    let user: User = serde_json::from_value(original.clone()).expect("user");
    let encoded = serde_json::to_value(&user).expect("json");
    assert_eq!(encoded, original);
}

#[test]
fn unknown_server_fields_are_ignored() {
    let user: User = serde_json::from_value(json!({
        "username": "bob",
        "notBefore": 0,
        "origin": "ldap",
        "userProfileMetadata": {"attributes": []}
    }))
    .expect("user");
    assert_eq!(user.username.as_deref(), Some("bob"));

    let groups: Vec<Group> = serde_json::from_value(json!([
        {"id": "g1", "name": "ops", "path": "/ops", "attributes": {}, "realmRoles": [], "subGroupCount": 0}
    ]))
    .expect("groups");
    assert_eq!(groups[0].name.as_deref(), Some("ops"));
}

#[test]
fn realm_round_trips_free_form_sections() {
    let realm: RealmRepresentation = serde_json::from_value(json!({
        "realm": "demo",
        "components": {"org.keycloak.keys.KeyProvider": [{"name": "rsa-generated"}]},
        "clients": [{"clientId": "account", "redirectUris": ["/realms/demo/account/*"]}]
    }))
    .expect("realm");
    let encoded = serde_json::to_value(&realm).expect("json");
    assert_eq!(
        encoded["components"]["org.keycloak.keys.KeyProvider"][0]["name"],
        "rsa-generated"
    );
    assert_eq!(encoded["clients"][0]["redirectUris"][0], "/realms/demo/account/*");
    let decoded: RealmRepresentation = serde_json::from_value(encoded).expect("realm");
    assert_eq!(decoded, realm);
}

#[test]
fn keys_endpoint_resolves_active_rsa_key() {
    let config: KeyStoreConfig = serde_json::from_value(json!({
        "active": {"RS256": "rs-kid", "HS256": "hs-kid"},
        "keys": [
            {"providerId": "p1", "providerPriority": 100, "kid": "rs-kid", "status": "ACTIVE",
             "type": "RSA", "algorithm": "RS256", "publicKey": "MIIBIjAN"}
        ]
    }))
    .expect("keys");
    let key = config.active_key("RS256").expect("active key");
    assert_eq!(key.public_key, "MIIBIjAN");
    assert!(config.active_key("HS256").is_none());
}

#[test]
fn introspection_envelope_preserves_permissions() {
    let body = json!({
        "active": true,
        "exp": 1700000300,
        "permissions": {"resource": "orders"},
        "typ": "Bearer"
    });
    let result: IntrospectTokenResult = serde_json::from_value(body.clone()).expect("result");
    assert!(result.is_active());
    assert_eq!(result.permissions["resource"], "orders");
    assert_eq!(serde_json::to_value(&result).expect("json"), body);
}

#[test]
fn api_error_from_failed_admin_call() {
    let err = ApiError::from_response(409, br#"{"errorMessage":"Group name is missing"}"#);
    assert_eq!(err.code, 409);
    assert_eq!(err.to_string(), "Group name is missing");
    let value: Value = serde_json::to_value(&err).expect("json");
    assert_eq!(value, json!({"code": 409, "message": "Group name is missing"}));
}
