use async_trait::async_trait;
use erasure_core::{DocumentStore, DocumentStoreError, FirebaseUid};
use reqwest::{Client, StatusCode, Url};
use secrecy::ExposeSecret;

use super::{
    credentials::{AccessTokenSource, CredentialsError},
    error::GoogleApiError,
};
use crate::config::prod;

const DEFAULT_DATABASE: &str = "(default)";

/// Document store backed by the Cloud Firestore REST API.
#[derive(Clone)]
pub struct FirestoreDocumentStore<T> {
    http_client: Client,
    base_url: String,
    project_id: String,
    token_source: T,
}

impl<T> FirestoreDocumentStore<T>
where
    T: AccessTokenSource,
{
    pub fn new(base_url: String, project_id: String, token_source: T, http_client: Client) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id,
            token_source,
        }
    }

    pub fn production(project_id: String, token_source: T, http_client: Client) -> Self {
        Self::new(
            prod::firebase::FIRESTORE_BASE_URL.to_string(),
            project_id,
            token_source,
            http_client,
        )
    }

    /// Store for the Firestore emulator listening on `host` (e.g. `localhost:8080`).
    pub fn emulator(host: &str, project_id: String, token_source: T, http_client: Client) -> Self {
        Self::new(
            format!("http://{host}/v1"),
            project_id,
            token_source,
            http_client,
        )
    }

    /// `{base}/projects/{project}/databases/(default)/documents/{collection}/{key}`
    ///
    /// Collection and key are each encoded as a single path segment. Firestore
    /// forbids `.` and `..` as ids, and URL normalisation would turn them into
    /// a path to the parent collection, so they are rejected here.
    fn document_url(&self, collection: &str, key: &FirebaseUid) -> Result<Url, DocumentStoreError> {
        for segment in [collection, key.as_str()] {
            if matches!(segment, "." | "..") {
                return Err(DocumentStoreError::UnexpectedError(format!(
                    "Invalid document path segment: {segment:?}"
                )));
            }
        }

        let mut url = Url::parse(&format!(
            "{}/projects/{}/databases/{}/documents",
            self.base_url, self.project_id, DEFAULT_DATABASE
        ))
        .map_err(|e| DocumentStoreError::UnexpectedError(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| {
                DocumentStoreError::UnexpectedError(format!(
                    "cannot append document path to {}",
                    self.base_url
                ))
            })?
            .push(collection)
            .push(key.as_str());

        Ok(url)
    }
}

#[async_trait]
impl<T> DocumentStore for FirestoreDocumentStore<T>
where
    T: AccessTokenSource,
{
    #[tracing::instrument(name = "Deleting profile document", skip(self, key))]
    async fn delete_document(
        &self,
        collection: &str,
        key: &FirebaseUid,
    ) -> Result<(), DocumentStoreError> {
        let url = self.document_url(collection, key)?;
        let token = self.token_source.access_token().await?;

        let response = self
            .http_client
            .delete(url)
            .bearer_auth(token.expose_secret())
            .send()
            .await
            .map_err(|e| DocumentStoreError::Unavailable(e.to_string()))?;

        // Firestore answers 200 for absent documents; 404 is treated the same.
        if response.status().is_success() || response.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }

        let error = GoogleApiError::from_response(response).await;
        tracing::debug!(status = %error.status, message = %error.message, "firestore error");
        Err(error.into())
    }
}

impl From<GoogleApiError> for DocumentStoreError {
    fn from(error: GoogleApiError) -> Self {
        if error.is_permission_error() {
            DocumentStoreError::PermissionDenied(error.message)
        } else if error.is_transient() {
            DocumentStoreError::Unavailable(error.message)
        } else {
            DocumentStoreError::UnexpectedError(error.message)
        }
    }
}

impl From<CredentialsError> for DocumentStoreError {
    fn from(error: CredentialsError) -> Self {
        DocumentStoreError::UnexpectedError(error.to_string())
    }
}
