//! Framework-neutral HTTP response building.
//!
//! Handlers produce responses through [`ResponseBuilder`] so the deletion flow
//! does not depend on any particular web framework. Framework crates implement
//! the trait on their own builder types:
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  erasure_core: ResponseBuilder trait     │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  erasure_axum: AxumResponseBuilder       │
//! └──────────────────────────────────────────┘
//! ```

/// Builder for an HTTP response.
///
/// ```ignore
/// builder
///     .status(200)
///     .json_body(json!({"message": "Account deleted"}))
///     .build()
/// ```
pub trait ResponseBuilder: Sized {
    /// The final response type produced by this builder
    type Response;

    /// Set the HTTP status code
    fn status(self, code: u16) -> Self;

    /// Add an HTTP header
    fn header(self, name: &str, value: &str) -> Self;

    /// Set a JSON body and `Content-Type: application/json`
    fn json_body(self, body: serde_json::Value) -> Self;

    /// Set a plain text body and `Content-Type: text/plain; charset=utf-8`
    fn text_body(self, body: &str) -> Self;

    /// Consume the builder and produce the framework's response type.
    fn build(self) -> Self::Response;
}

/// Shortcuts for the `{"message": ...}` responses the service emits.
///
/// Implemented for every [`ResponseBuilder`].
pub trait ResponseHelpers: ResponseBuilder {
    fn message(self, code: u16, message: &str) -> Self::Response {
        self.status(code)
            .json_body(serde_json::json!({ "message": message }))
            .build()
    }

    fn ok_message(self, message: &str) -> Self::Response {
        self.message(200, message)
    }

    fn bad_request(self, message: &str) -> Self::Response {
        self.message(400, message)
    }

    fn internal_error(self, message: &str) -> Self::Response {
        self.message(500, message)
    }

    /// 405 with a plain text body
    fn method_not_allowed(self) -> Self::Response {
        self.status(405)
            .header("allow", "POST")
            .text_body("Method Not Allowed")
            .build()
    }
}

impl<T: ResponseBuilder> ResponseHelpers for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockBuilder {
        status: u16,
        headers: Vec<(String, String)>,
        body: String,
    }

    impl ResponseBuilder for MockBuilder {
        type Response = Self;

        fn status(mut self, code: u16) -> Self {
            self.status = code;
            self
        }

        fn header(mut self, name: &str, value: &str) -> Self {
            self.headers.push((name.to_string(), value.to_string()));
            self
        }

        fn json_body(mut self, body: serde_json::Value) -> Self {
            self.body = body.to_string();
            self.header("content-type", "application/json")
        }

        fn text_body(mut self, body: &str) -> Self {
            self.body = body.to_string();
            self.header("content-type", "text/plain; charset=utf-8")
        }

        fn build(self) -> Self::Response {
            self
        }
    }

    #[test]
    fn test_message_helpers() {
        let resp = MockBuilder::default().bad_request("Missing firebaseUid");
        assert_eq!(resp.status, 400);
        assert_eq!(resp.body, r#"{"message":"Missing firebaseUid"}"#);

        let resp = MockBuilder::default().ok_message("Account deleted");
        assert_eq!(resp.status, 200);

        let resp = MockBuilder::default().internal_error("boom");
        assert_eq!(resp.status, 500);
        assert_eq!(resp.body, r#"{"message":"boom"}"#);
    }

    #[test]
    fn test_method_not_allowed_is_plain_text() {
        let resp = MockBuilder::default().method_not_allowed();
        assert_eq!(resp.status, 405);
        assert_eq!(resp.body, "Method Not Allowed");
        assert!(
            resp.headers
                .iter()
                .any(|(k, v)| k == "content-type" && v.starts_with("text/plain"))
        );
    }
}
