use std::time::Duration;

use erasure_adapters::{
    CredentialsError, FirebaseAuthClient, FirebaseCredentials, FirestoreDocumentStore,
    HashMapDocumentStore, HashMapIdentityProvider, NoopSystemMessagePoster, ServiceAccountKey,
    ServiceAccountTokenSource, StaticTokenSource,
    config::{Backend, ErasureServiceSetting, FirebaseSetting},
};
use reqwest::Client;
use thiserror::Error;

use crate::AccountService;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Credentials(#[from] CredentialsError),
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error(
        "No Firebase project id: set ERASURE__FIREBASE__PROJECT_ID or GOOGLE_CLOUD_PROJECT, or use a service account key that names one"
    )]
    MissingProjectId,
    #[error(
        "No service account key configured: set GOOGLE_APPLICATION_CREDENTIALS or point the emulator hosts at local emulators"
    )]
    MissingCredentials,
}

/// Create the HTTP client shared by every Firebase adapter
pub fn get_http_client(timeout: Duration) -> Result<Client, BootstrapError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// Build the identity and document adapters described by `settings`.
///
/// Each service talks to its emulator when an emulator host is set and to
/// the production endpoint otherwise. Production endpoints need a service
/// account key.
pub async fn configure_firebase(
    settings: &FirebaseSetting,
    http_client: Client,
) -> Result<
    (
        FirebaseAuthClient<FirebaseCredentials>,
        FirestoreDocumentStore<FirebaseCredentials>,
    ),
    BootstrapError,
> {
    let service_account = match &settings.credentials_path {
        Some(path) => {
            let key = ServiceAccountKey::from_file(path).await?;
            Some(ServiceAccountTokenSource::new(key, http_client.clone())?)
        }
        None => None,
    };

    let project_id = settings
        .project_id
        .clone()
        .or_else(|| {
            service_account
                .as_ref()
                .and_then(|source| source.project_id().map(String::from))
        })
        .ok_or(BootstrapError::MissingProjectId)?;

    let production_credentials = || {
        service_account
            .clone()
            .map(FirebaseCredentials::ServiceAccount)
            .ok_or(BootstrapError::MissingCredentials)
    };
    let emulator_credentials = || FirebaseCredentials::Static(StaticTokenSource::emulator());

    let auth_client = match &settings.auth_emulator_host {
        Some(host) => {
            tracing::info!(host = %host, "using Firebase Auth emulator");
            FirebaseAuthClient::emulator(
                host,
                project_id.clone(),
                emulator_credentials(),
                http_client.clone(),
            )
        }
        None => FirebaseAuthClient::production(
            project_id.clone(),
            production_credentials()?,
            http_client.clone(),
        ),
    };

    let document_store = match &settings.firestore_emulator_host {
        Some(host) => {
            tracing::info!(host = %host, "using Firestore emulator");
            FirestoreDocumentStore::emulator(host, project_id, emulator_credentials(), http_client)
        }
        None => {
            FirestoreDocumentStore::production(project_id, production_credentials()?, http_client)
        }
    };

    Ok((auth_client, document_store))
}

/// Wire the configured backend into an [`AccountService`].
pub async fn build_service(settings: &ErasureServiceSetting) -> Result<AccountService, BootstrapError> {
    let system_messages = NoopSystemMessagePoster::new();

    match settings.backend {
        Backend::Memory => {
            tracing::warn!("using in-memory stores; nothing is deleted from Firebase");
            Ok(AccountService::new(
                HashMapIdentityProvider::new(),
                HashMapDocumentStore::new(),
                system_messages,
            ))
        }
        Backend::Firebase => {
            let http_client = get_http_client(settings.firebase.timeout())?;
            let (auth_client, document_store) =
                configure_firebase(&settings.firebase, http_client).await?;
            Ok(AccountService::new(
                auth_client,
                document_store,
                system_messages,
            ))
        }
    }
}
