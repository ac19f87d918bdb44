use async_trait::async_trait;
use thiserror::Error;

use crate::domain::firebase_uid::FirebaseUid;

// IdentityProvider port trait and errors
#[derive(Debug, Error)]
pub enum IdentityProviderError {
    #[error("There is no user record corresponding to the provided identifier.")]
    UserNotFound,
    #[error("{0}")]
    InvalidUid(String),
    #[error("{0}")]
    PermissionDenied(String),
    #[error("{0}")]
    Unavailable(String),
    #[error("{0}")]
    UnexpectedError(String),
}

impl PartialEq for IdentityProviderError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserNotFound, Self::UserNotFound)
                | (Self::InvalidUid(_), Self::InvalidUid(_))
                | (Self::PermissionDenied(_), Self::PermissionDenied(_))
                | (Self::Unavailable(_), Self::Unavailable(_))
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn delete_user(&self, uid: &FirebaseUid) -> Result<(), IdentityProviderError>;
}

// SystemMessagePoster port trait and errors
#[derive(Debug, Error)]
#[error("{0}")]
pub struct SystemMessageError(pub String);

/// Side effects to run after an account is gone, e.g. telling other users.
#[async_trait]
pub trait SystemMessagePoster: Send + Sync {
    async fn post_account_deleted(&self, uid: &FirebaseUid) -> Result<(), SystemMessageError>;
}
