#![cfg(test)]

use crate::error::FetchError;
use crate::types::{CommandListing, CommandsResponse};

#[test]
fn listing_keeps_server_order() {
    let body = r#"{"/profile":"Show a profile","/abyss":"Spiral Abyss stats","/check-in":"Daily check-in"}"#;
    let listing: CommandListing = serde_json::from_str(body).unwrap();
    let names: Vec<&str> = listing.names().collect();
    assert_eq!(names, vec!["/profile", "/abyss", "/check-in"]);
    assert_eq!(listing.get("/abyss"), Some("Spiral Abyss stats"));
}

#[test]
fn listing_reserializes_in_the_same_order() {
    let listing: CommandListing = [("zeta", "last letter"), ("alpha", "first letter")]
        .into_iter()
        .collect();
    assert_eq!(
        serde_json::to_string(&listing).unwrap(),
        r#"{"zeta":"last letter","alpha":"first letter"}"#
    );
}

#[test]
fn listing_rejects_non_string_descriptions() {
    let err = serde_json::from_str::<CommandListing>(r#"{"/help": 3}"#).unwrap_err();
    assert!(matches!(FetchError::from(err), FetchError::Decode(_)));
}

#[test]
fn empty_object_is_an_empty_listing() {
    let listing: CommandListing = serde_json::from_str("{}").unwrap();
    assert!(listing.is_empty());
}

#[test]
fn response_wire_shape() {
    let listing: CommandListing = [("/help", "Help")].into_iter().collect();
    let ok = CommandsResponse::from(Ok::<_, FetchError>(listing));
    assert_eq!(
        serde_json::to_value(&ok).unwrap(),
        serde_json::json!({"status": "ok", "commands": {"/help": "Help"}})
    );

    let failed = CommandsResponse::from(Err::<CommandListing, _>(FetchError::Server { status: 502 }));
    assert_eq!(
        serde_json::to_value(&failed).unwrap(),
        serde_json::json!({
            "status": "failed",
            "error": {"kind": "server", "detail": {"status": 502}}
        })
    );
}

#[test]
fn response_into_result() {
    let failed = CommandsResponse::Failed {
        error: FetchError::Network("timed out".into()),
    };
    assert_eq!(
        failed.into_result(),
        Err(FetchError::Network("timed out".into()))
    );
}
