use reqwest::StatusCode;
use serde_json::{Value, json};
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

use crate::helpers::FirebaseApp;

const ACCOUNTS_DELETE_PATH: &str = "/projects/test-project/accounts:delete";
const USER_DOC_PATH: &str = "/projects/test-project/databases/(default)/documents/users/uid-1";

fn google_error(code: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(code).set_body_json(json!({
        "error": { "code": code, "message": message }
    }))
}

#[tokio::test]
async fn should_delete_identity_then_document() {
    let app = FirebaseApp::spawn().await;

    Mock::given(method("POST"))
        .and(path(ACCOUNTS_DELETE_PATH))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(json!({ "localId": "uid-1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&app.auth_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(USER_DOC_PATH))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&app.firestore_server)
        .await;

    let response = app
        .app
        .post_delete_account(&json!({ "firebaseUid": "uid-1" }))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({ "message": "Account deleted" })
    );
}

#[tokio::test]
async fn should_not_touch_document_when_identity_deletion_fails() {
    let app = FirebaseApp::spawn().await;

    Mock::given(method("POST"))
        .and(path(ACCOUNTS_DELETE_PATH))
        .respond_with(google_error(503, "E1"))
        .expect(1)
        .mount(&app.auth_server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.firestore_server)
        .await;

    let response = app
        .app
        .post_delete_account(&json!({ "firebaseUid": "uid-1" }))
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({ "message": "E1" })
    );
}

#[tokio::test]
async fn should_report_document_failure_after_identity_deleted() {
    let app = FirebaseApp::spawn().await;

    Mock::given(method("POST"))
        .and(path(ACCOUNTS_DELETE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&app.auth_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(USER_DOC_PATH))
        .respond_with(google_error(500, "E2"))
        .expect(1)
        .mount(&app.firestore_server)
        .await;

    let response = app
        .app
        .post_delete_account(&json!({ "firebaseUid": "uid-1" }))
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({ "message": "E2" })
    );
}

#[tokio::test]
async fn should_treat_absent_profile_document_as_success() {
    let app = FirebaseApp::spawn().await;

    Mock::given(method("POST"))
        .and(path(ACCOUNTS_DELETE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&app.auth_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(USER_DOC_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&app.firestore_server)
        .await;

    let response = app
        .app
        .post_delete_account(&json!({ "firebaseUid": "uid-1" }))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
}
