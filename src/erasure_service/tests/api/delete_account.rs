use reqwest::{Method, StatusCode};
use serde_json::{Value, json};

use crate::helpers::MemoryApp;

#[tokio::test]
async fn should_return_200_and_delete_identity_and_profile() {
    let app = MemoryApp::spawn_with_users(&["uid-1", "uid-2"]).await;

    let response = app
        .app
        .post_delete_account(&json!({ "firebaseUid": "uid-1" }))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({ "message": "Account deleted" })
    );

    assert!(!app.has_user("uid-1").await);
    assert!(!app.has_profile("uid-1").await);
    // Other accounts are untouched
    assert!(app.has_user("uid-2").await);
    assert!(app.has_profile("uid-2").await);
}

#[tokio::test]
async fn should_return_405_for_non_post_methods() {
    let app = MemoryApp::spawn_with_users(&["uid-1"]).await;

    for method in [Method::GET, Method::PUT, Method::PATCH, Method::DELETE] {
        let response = app
            .app
            .send_raw(method.clone(), r#"{"firebaseUid":"uid-1"}"#)
            .await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{method}");
        assert_eq!(response.text().await.unwrap(), "Method Not Allowed");
    }

    assert!(app.has_user("uid-1").await);
    assert!(app.has_profile("uid-1").await);
}

#[tokio::test]
async fn should_return_400_if_firebase_uid_is_missing() {
    let app = MemoryApp::spawn_with_users(&["uid-1"]).await;

    let test_cases = [
        json!({}),
        json!({ "postSystemMessages": true }),
        json!({ "firebaseUid": "" }),
        json!({ "firebaseUid": null }),
        json!({ "firebaseUid": false }),
    ];

    for test_case in test_cases {
        let response = app.app.post_delete_account(&test_case).await;

        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "Failed for input: {test_case:?}"
        );
        assert_eq!(
            response.json::<Value>().await.unwrap(),
            json!({ "message": "Missing firebaseUid" })
        );
    }

    assert!(app.has_user("uid-1").await);
}

#[tokio::test]
async fn should_return_400_for_malformed_body() {
    let app = MemoryApp::spawn_with_users(&["uid-1"]).await;

    let response = app.app.send_raw(Method::POST, "{\"firebaseUid\": ").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>().await.unwrap();
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("Malformed request body")
    );
    assert!(app.has_user("uid-1").await);
}

#[tokio::test]
async fn should_return_500_when_identity_does_not_exist() {
    let app = MemoryApp::spawn_with_users(&[]).await;

    let response = app
        .app
        .post_delete_account(&json!({ "firebaseUid": "ghost" }))
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({ "message": "There is no user record corresponding to the provided identifier." })
    );
}

#[tokio::test]
async fn should_ignore_post_system_messages_flag() {
    let with_flag = MemoryApp::spawn_with_users(&["uid-1"]).await;
    let without_flag = MemoryApp::spawn_with_users(&["uid-1"]).await;

    let first = with_flag
        .app
        .post_delete_account(&json!({ "firebaseUid": "uid-1", "postSystemMessages": true }))
        .await;
    let second = without_flag
        .app
        .post_delete_account(&json!({ "firebaseUid": "uid-1" }))
        .await;

    assert_eq!(first.status(), second.status());
    assert_eq!(
        first.json::<Value>().await.unwrap(),
        second.json::<Value>().await.unwrap()
    );
    assert!(!with_flag.has_user("uid-1").await);
    assert!(!without_flag.has_user("uid-1").await);
}

#[tokio::test]
async fn should_answer_cors_preflight_for_allowed_origin() {
    let app = MemoryApp::spawn_with_users(&[]).await;

    let response = app
        .app
        .http_client
        .request(Method::OPTIONS, &app.app.address)
        .header("origin", "https://app.example")
        .header("access-control-request-method", "POST")
        .send()
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("https://app.example")
    );
}

#[tokio::test]
async fn should_return_405_for_options_that_is_not_a_cors_preflight() {
    let app = MemoryApp::spawn_with_users(&["uid-1"]).await;

    let plain = app
        .app
        .http_client
        .request(Method::OPTIONS, &app.app.address)
        .send()
        .await
        .unwrap();
    assert_eq!(plain.status().as_u16(), 405);
    assert_eq!(plain.text().await.unwrap(), "Method Not Allowed");

    let origin_only = app
        .app
        .http_client
        .request(Method::OPTIONS, &app.app.address)
        .header("origin", "https://app.example")
        .send()
        .await
        .unwrap();
    assert_eq!(origin_only.status().as_u16(), 405);

    assert!(app.has_user("uid-1").await);
}
