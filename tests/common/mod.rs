//! Shared helpers for router-level tests.
//!
//! Each test gets its own in-memory database and drives the router with
//! `oneshot`, so no socket is bound.

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use election::http_server::{HttpServer, HttpServerConfig};
use election::store::{Resource, Store};

pub fn empty_store() -> Store {
    let store = Store::open_in_memory().unwrap();
    store.apply_schema().unwrap();
    store
}

/// A store whose tables were never created, so every statement fails.
pub fn unprepared_store() -> Store {
    Store::open_in_memory().unwrap()
}

pub fn seeded_store() -> Store {
    let store = empty_store();
    store.seed().unwrap();
    store
}

pub fn app(store: &Store) -> Router {
    HttpServer::new(HttpServerConfig::default(), store.clone()).router()
}

pub async fn add_party(store: &Store, name: &str) -> i64 {
    store
        .insert(
            Resource::Parties,
            vec![("name".to_string(), json!(name))],
        )
        .await
        .unwrap()
        .last_insert_id
        .unwrap()
}

/// Sends a request and returns the status with the raw body.
pub async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(text) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(text.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

/// Sends a request and parses the response body as JSON.
pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let text = body.map(|v| v.to_string());
    let (status, bytes) = send_raw(app, method, uri, text.as_deref()).await;
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}
