use async_trait::async_trait;
use erasure_core::{FirebaseUid, IdentityProvider, IdentityProviderError};
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Serialize;

use super::{
    credentials::{AccessTokenSource, CredentialsError},
    error::GoogleApiError,
};
use crate::config::prod;

/// Identity provider backed by the Identity Toolkit REST API that stores
/// Firebase Authentication users.
#[derive(Clone)]
pub struct FirebaseAuthClient<T> {
    http_client: Client,
    base_url: String,
    project_id: String,
    token_source: T,
}

impl<T> FirebaseAuthClient<T>
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

    /// Client for the production endpoint.
    pub fn production(project_id: String, token_source: T, http_client: Client) -> Self {
        Self::new(
            prod::firebase::IDENTITY_TOOLKIT_BASE_URL.to_string(),
            project_id,
            token_source,
            http_client,
        )
    }

    /// Client for the Auth emulator listening on `host` (e.g. `localhost:9099`).
    pub fn emulator(host: &str, project_id: String, token_source: T, http_client: Client) -> Self {
        Self::new(
            format!("http://{host}/identitytoolkit.googleapis.com/v1"),
            project_id,
            token_source,
            http_client,
        )
    }

    fn delete_url(&self) -> String {
        format!(
            "{}/projects/{}/accounts:delete",
            self.base_url, self.project_id
        )
    }
}

#[async_trait]
impl<T> IdentityProvider for FirebaseAuthClient<T>
where
    T: AccessTokenSource,
{
    #[tracing::instrument(name = "Deleting identity record", skip_all)]
    async fn delete_user(&self, uid: &FirebaseUid) -> Result<(), IdentityProviderError> {
        let token = self.token_source.access_token().await?;

        let response = self
            .http_client
            .post(self.delete_url())
            .bearer_auth(token.expose_secret())
            .json(&DeleteAccountRequest {
                local_id: uid.as_str(),
            })
            .send()
            .await
            .map_err(|e| IdentityProviderError::Unavailable(e.to_string()))?;

        if response.status().is_success() {
            return Ok(());
        }

        let error = GoogleApiError::from_response(response).await;
        tracing::debug!(status = %error.status, message = %error.message, "identity toolkit error");
        Err(error.into())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteAccountRequest<'a> {
    local_id: &'a str,
}

impl From<GoogleApiError> for IdentityProviderError {
    fn from(error: GoogleApiError) -> Self {
        let reason = error.reason().to_string();
        match reason.as_str() {
            "USER_NOT_FOUND" => IdentityProviderError::UserNotFound,
            "INVALID_ID" | "INVALID_LOCAL_ID" => IdentityProviderError::InvalidUid(error.message),
            _ if error.is_permission_error() => {
                IdentityProviderError::PermissionDenied(error.message)
            }
            _ if error.is_transient() => IdentityProviderError::Unavailable(error.message),
            _ => IdentityProviderError::UnexpectedError(error.message),
        }
    }
}

impl From<CredentialsError> for IdentityProviderError {
    fn from(error: CredentialsError) -> Self {
        IdentityProviderError::UnexpectedError(error.to_string())
    }
}
