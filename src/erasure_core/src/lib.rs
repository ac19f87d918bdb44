pub mod domain;
pub mod http_abstraction;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    deletion_request::{DeletionRequest, DeletionRequestError},
    firebase_uid::{FirebaseUid, FirebaseUidError},
};

pub use ports::{
    repositories::{DocumentStore, DocumentStoreError, USERS_COLLECTION},
    services::{IdentityProvider, IdentityProviderError, SystemMessageError, SystemMessagePoster},
};

pub use http_abstraction::{ResponseBuilder, ResponseHelpers};
