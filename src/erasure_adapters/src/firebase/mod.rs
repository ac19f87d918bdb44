//! REST clients for the Firebase services that own user state.

pub mod auth_client;
pub mod credentials;
pub mod error;
pub mod firestore;

pub use auth_client::FirebaseAuthClient;
pub use credentials::{
    AccessTokenSource, CredentialsError, FirebaseCredentials, ServiceAccountKey,
    ServiceAccountTokenSource, StaticTokenSource,
};
pub use firestore::FirestoreDocumentStore;
