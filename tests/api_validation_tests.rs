// SPDX-License-Identifier: MIT

//! API input validation tests (no database required).

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

mod common;

fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_register_empty_nickname_rejected() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_post(
            "/usuarios",
            serde_json::json!({"nickname": "", "senha": "abc123"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_register_empty_senha_rejected() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_post(
            "/usuarios",
            serde_json::json!({"nickname": "joao", "senha": ""}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_photo_malformed_base64_rejected() {
    let (app, _state) = common::create_test_app();

    // Decoding happens before any user lookup, so this needs no database.
    let response = app
        .oneshot(json_post(
            "/usuarios/some-uid/foto",
            serde_json::json!({"imagem_base64": "!!!not-base64!!!"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_create_aula_invalid_date_rejected() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_post(
            "/aulas",
            serde_json::json!({
                "uid": "some-uid",
                "data": "not-a-date",
                "titulo": "Fundamentos",
                "faixaEsperada": "branca"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_store_failure_maps_to_server_error() {
    let (app, _state) = common::create_test_app();

    // The offline mock fails every store call; a valid registration must
    // surface that as a 500 database error.
    let response = app
        .oneshot(json_post(
            "/usuarios",
            serde_json::json!({"nickname": "joao", "senha": "abc123"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "database_error");
}
