use serde_json::Value;
use thiserror::Error;

use super::firebase_uid::FirebaseUid;

const FIREBASE_UID_FIELD: &str = "firebaseUid";
const POST_SYSTEM_MESSAGES_FIELD: &str = "postSystemMessages";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeletionRequestError {
    #[error("Missing firebaseUid")]
    MissingFirebaseUid,
    #[error("Invalid firebaseUid: {0}")]
    InvalidFirebaseUid(String),
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

/// A validated request to delete a user's account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionRequest {
    firebase_uid: FirebaseUid,
    post_system_messages: bool,
}

impl DeletionRequest {
    pub fn new(firebase_uid: FirebaseUid, post_system_messages: bool) -> Self {
        Self {
            firebase_uid,
            post_system_messages,
        }
    }

    /// Parse a raw request body. An empty body is read as `{}`.
    pub fn from_body(body: &[u8]) -> Result<Self, DeletionRequestError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Self::from_json(&Value::Object(Default::default()));
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| DeletionRequestError::MalformedBody(e.to_string()))?;
        Self::from_json(&value)
    }

    /// Build a request from an already-decoded JSON payload.
    ///
    /// Field presence follows loose truthiness: `null`, `false`, `0` and `""`
    /// count as absent for both fields.
    pub fn from_json(value: &Value) -> Result<Self, DeletionRequestError> {
        let fields = value.as_object().ok_or_else(|| {
            DeletionRequestError::MalformedBody("expected a JSON object".to_string())
        })?;

        let firebase_uid = match fields.get(FIREBASE_UID_FIELD) {
            Some(uid) if is_truthy(uid) => match uid {
                Value::String(uid) => FirebaseUid::try_from(uid.as_str())
                    .map_err(|e| DeletionRequestError::InvalidFirebaseUid(e.to_string()))?,
                _ => {
                    return Err(DeletionRequestError::InvalidFirebaseUid(
                        "firebaseUid must be a string".to_string(),
                    ));
                }
            },
            _ => return Err(DeletionRequestError::MissingFirebaseUid),
        };

        let post_system_messages = fields
            .get(POST_SYSTEM_MESSAGES_FIELD)
            .is_some_and(is_truthy);

        Ok(Self {
            firebase_uid,
            post_system_messages,
        })
    }

    pub fn firebase_uid(&self) -> &FirebaseUid {
        &self.firebase_uid
    }

    pub fn post_system_messages(&self) -> bool {
        self.post_system_messages
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
