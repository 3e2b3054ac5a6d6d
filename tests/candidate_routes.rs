//! Candidate endpoint tests
//!
//! Covers the create/read/update/delete cycle, required-field checks and
//! the `party_name` join.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{add_party, app, empty_store, get, send, send_raw};

// =============================================================================
// Create and read
// =============================================================================

#[tokio::test]
async fn test_create_then_read_candidate() {
    let store = empty_store();

    let (status, body) = send(
        app(&store),
        Method::POST,
        "/candidate",
        Some(json!({ "first_name": "Ronald", "last_name": "Firbank", "industry_connected": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "success");
    assert_eq!(
        body["data"],
        json!({ "first_name": "Ronald", "last_name": "Firbank", "industry_connected": 1 })
    );
    let id = body["id"].as_i64().unwrap();

    let (status, body) = get(app(&store), &format!("/candidate/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "message": "success",
            "data": {
                "id": id,
                "first_name": "Ronald",
                "last_name": "Firbank",
                "industry_connected": 1,
                "party_id": null,
                "party_name": null
            }
        })
    );
}

#[tokio::test]
async fn test_list_empty_table() {
    let store = empty_store();

    let (status, body) = get(app(&store), "/candidates").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "success", "data": [] }));
}

#[tokio::test]
async fn test_list_includes_party_name() {
    let store = empty_store();
    let party = add_party(&store, "Heroes of HTML").await;

    let (_, created) = send(
        app(&store),
        Method::POST,
        "/candidate",
        Some(json!({ "first_name": "Edward", "last_name": "Lear", "industry_connected": false })),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    send(
        app(&store),
        Method::PUT,
        &format!("/candidate/{id}"),
        Some(json!({ "party_id": party })),
    )
    .await;

    let (_, body) = get(app(&store), "/candidates").await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["party_name"], "Heroes of HTML");
    assert_eq!(rows[0]["industry_connected"], 0);
}

/// Only the create fields are written; a party is assigned through PUT.
#[tokio::test]
async fn test_create_ignores_party_id() {
    let store = empty_store();
    let party = add_party(&store, "Git Gurus").await;

    let (status, created) = send(
        app(&store),
        Method::POST,
        "/candidate",
        Some(json!({
            "first_name": "Octavia",
            "last_name": "Butler",
            "industry_connected": 1,
            "party_id": party
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_i64().unwrap();

    let (_, body) = get(app(&store), &format!("/candidate/{id}")).await;
    assert!(body["data"]["party_id"].is_null());
    assert!(body["data"]["party_name"].is_null());
}

/// Unknown ids read as success without a data member.
#[tokio::test]
async fn test_missing_candidate_omits_data() {
    let store = empty_store();

    let (status, body) = get(app(&store), "/candidate/42").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "success" }));

    let (status, body) = get(app(&store), "/candidate/not-a-number").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "success" }));
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn test_create_reports_every_missing_field() {
    let store = empty_store();

    let (status, body) = send(
        app(&store),
        Method::POST,
        "/candidate",
        Some(json!({ "first_name": "  ", "industry_connected": true })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": ["No first_name specified.", "No last_name specified."] })
    );

    // nothing was written
    let (_, body) = get(app(&store), "/candidates").await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_create_without_body_is_validation_error() {
    let store = empty_store();

    let (status, body) = send_raw(app(&store), Method::POST, "/candidate", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_update_requires_party_id() {
    let store = empty_store();

    let (status, body) = send(
        app(&store),
        Method::PUT,
        "/candidate/1",
        Some(json!({ "first_name": "Renamed" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": ["No party_id specified."] }));
}

/// Constraint violations surface as a 400 with the store's message.
#[tokio::test]
async fn test_null_required_column_rejected_by_store() {
    let store = empty_store();

    let (status, body) = send(
        app(&store),
        Method::POST,
        "/candidate",
        Some(json!({ "first_name": "Ronald", "last_name": null, "industry_connected": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("NOT NULL"));
}

// =============================================================================
// Update and party join
// =============================================================================

#[tokio::test]
async fn test_update_party_reflects_party_name() {
    let store = empty_store();
    add_party(&store, "Republican").await;
    let democratic = add_party(&store, "Democratic").await;
    assert_eq!(democratic, 2);

    let (_, created) = send(
        app(&store),
        Method::POST,
        "/candidate",
        Some(json!({ "first_name": "Ronald", "last_name": "Firbank", "industry_connected": 1 })),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(
        app(&store),
        Method::PUT,
        &format!("/candidate/{id}"),
        Some(json!({ "party_id": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "message": "success", "data": { "party_id": 2 }, "changes": 1 })
    );

    let (_, body) = get(app(&store), &format!("/candidate/{id}")).await;
    assert_eq!(body["data"]["party_name"], "Democratic");
}

#[tokio::test]
async fn test_update_to_unknown_party_reads_null_name() {
    let store = empty_store();

    let (_, created) = send(
        app(&store),
        Method::POST,
        "/candidate",
        Some(json!({ "first_name": "Ronald", "last_name": "Firbank", "industry_connected": 1 })),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, _) = send(
        app(&store),
        Method::PUT,
        &format!("/candidate/{id}"),
        Some(json!({ "party_id": 77 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(app(&store), &format!("/candidate/{id}")).await;
    assert_eq!(body["data"]["party_id"], 77);
    assert!(body["data"]["party_name"].is_null());
}

#[tokio::test]
async fn test_update_missing_candidate_changes_nothing() {
    let store = empty_store();

    let (status, body) = send(
        app(&store),
        Method::PUT,
        "/candidate/999999",
        Some(json!({ "party_id": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["changes"], 0);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_missing_candidate() {
    let store = empty_store();

    let (status, body) = send(app(&store), Method::DELETE, "/candidate/999999", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "successfully deleted", "changes": 0 }));
}

#[tokio::test]
async fn test_delete_then_read() {
    let store = empty_store();

    let (_, created) = send(
        app(&store),
        Method::POST,
        "/candidate",
        Some(json!({ "first_name": "Unica", "last_name": "Zurn", "industry_connected": 1 })),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (_, body) = send(app(&store), Method::DELETE, &format!("/candidate/{id}"), None).await;
    assert_eq!(body["changes"], 1);

    let (_, body) = get(app(&store), &format!("/candidate/{id}")).await;
    assert!(body.get("data").is_none());
}
