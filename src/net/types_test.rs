use super::*;

#[test]
fn identity_deserializes_login_response_ignoring_extra_fields() {
    let raw = r#"{
        "id": "u-42",
        "name": "Alice",
        "email": "a@b.com",
        "accessToken": "jwt-opaque"
    }"#;
    let identity: Identity = serde_json::from_str(raw).unwrap();
    assert_eq!(identity.name, "Alice");
    assert_eq!(identity.access_token, "jwt-opaque");
}

#[test]
fn identity_serializes_credential_under_wire_name() {
    let identity = Identity {
        name: "Alice".to_owned(),
        access_token: "jwt-opaque".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&identity).unwrap(),
        serde_json::json!({ "name": "Alice", "accessToken": "jwt-opaque" })
    );
}

#[test]
fn persisted_identity_round_trips() {
    let identity = Identity {
        name: "Alice".to_owned(),
        access_token: "jwt-opaque".to_owned(),
    };
    let raw = serde_json::to_string(&identity).unwrap();
    assert_eq!(serde_json::from_str::<Identity>(&raw).unwrap(), identity);
}
