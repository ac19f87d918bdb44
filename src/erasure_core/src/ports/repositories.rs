use async_trait::async_trait;
use thiserror::Error;

use crate::domain::firebase_uid::FirebaseUid;

/// Collection holding one profile document per user, keyed by uid.
pub const USERS_COLLECTION: &str = "users";

// DocumentStore port trait and errors
#[derive(Debug, Error)]
pub enum DocumentStoreError {
    #[error("{0}")]
    PermissionDenied(String),
    #[error("{0}")]
    Unavailable(String),
    #[error("{0}")]
    UnexpectedError(String),
}

impl PartialEq for DocumentStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::PermissionDenied(_), Self::PermissionDenied(_))
                | (Self::Unavailable(_), Self::Unavailable(_))
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Remove `collection/key`. Removing a document that does not exist succeeds.
    async fn delete_document(
        &self,
        collection: &str,
        key: &FirebaseUid,
    ) -> Result<(), DocumentStoreError>;
}
