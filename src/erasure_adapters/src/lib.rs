pub mod config;
pub mod firebase;
pub mod handlers;
pub mod persistence;
pub mod system_messages;

pub use firebase::{
    AccessTokenSource, CredentialsError, FirebaseAuthClient, FirebaseCredentials,
    FirestoreDocumentStore, ServiceAccountKey, ServiceAccountTokenSource, StaticTokenSource,
};
pub use persistence::{HashMapDocumentStore, HashMapIdentityProvider};
pub use system_messages::NoopSystemMessagePoster;
