use std::{path::Path, sync::Arc};

use arc_swap::ArcSwapOption;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;

use crate::config::EMULATOR_TOKEN;

const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const SCOPES: &str = "https://www.googleapis.com/auth/cloud-platform \
https://www.googleapis.com/auth/identitytoolkit \
https://www.googleapis.com/auth/datastore";
const ASSERTION_LIFETIME_SECONDS: i64 = 3600;
const REFRESH_MARGIN_SECONDS: i64 = 60;

#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("Failed to read service account key: {0}")]
    ReadKey(#[from] std::io::Error),
    #[error("Invalid service account key: {0}")]
    InvalidKey(String),
    #[error("Failed to sign token assertion: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
    #[error("Failed to fetch a valid Google OAuth2 access token: {0}")]
    TokenExchange(String),
}

/// Supplies the bearer token sent with every Firebase REST call.
#[async_trait]
pub trait AccessTokenSource: Send + Sync {
    async fn access_token(&self) -> Result<Secret<String>, CredentialsError>;
}

/// A fixed token. The emulators accept the literal `owner`.
#[derive(Clone)]
pub struct StaticTokenSource {
    token: Secret<String>,
}

impl StaticTokenSource {
    pub fn new(token: Secret<String>) -> Self {
        Self { token }
    }

    pub fn emulator() -> Self {
        Self::new(Secret::new(EMULATOR_TOKEN.to_string()))
    }
}

#[async_trait]
impl AccessTokenSource for StaticTokenSource {
    async fn access_token(&self) -> Result<Secret<String>, CredentialsError> {
        Ok(self.token.clone())
    }
}

/// The fields of a Google service account JSON key that the token exchange needs.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: Secret<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
    pub project_id: Option<String>,
}

impl ServiceAccountKey {
    pub fn from_json(json: &str) -> Result<Self, CredentialsError> {
        serde_json::from_str(json).map_err(|e| CredentialsError::InvalidKey(e.to_string()))
    }

    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, CredentialsError> {
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json(&json)
    }
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

#[derive(Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Secret<String>,
    expires_in: i64,
}

struct CachedToken {
    token: Secret<String>,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(REFRESH_MARGIN_SECONDS) < self.expires_at
    }
}

/// OAuth2 access tokens minted from a service account key.
///
/// A signed JWT assertion is exchanged at the key's `token_uri`; the resulting
/// token is shared by all clones and reused until shortly before it expires.
/// Only one refresh runs at a time.
#[derive(Clone)]
pub struct ServiceAccountTokenSource {
    key: Arc<ServiceAccountKey>,
    encoding_key: Arc<EncodingKey>,
    http_client: Client,
    cached: Arc<ArcSwapOption<CachedToken>>,
    refresh_lock: Arc<Mutex<()>>,
}

impl ServiceAccountTokenSource {
    pub fn new(key: ServiceAccountKey, http_client: Client) -> Result<Self, CredentialsError> {
        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.expose_secret().as_bytes())
            .map_err(|e| CredentialsError::InvalidKey(e.to_string()))?;

        Ok(Self {
            key: Arc::new(key),
            encoding_key: Arc::new(encoding_key),
            http_client,
            cached: Arc::new(ArcSwapOption::empty()),
            refresh_lock: Arc::new(Mutex::new(())),
        })
    }

    pub fn project_id(&self) -> Option<&str> {
        self.key.project_id.as_deref()
    }

    fn sign_assertion(&self, now: DateTime<Utc>) -> Result<String, CredentialsError> {
        let iat = now.timestamp();
        let claims = AssertionClaims {
            iss: &self.key.client_email,
            scope: SCOPES,
            aud: &self.key.token_uri,
            iat,
            exp: iat + ASSERTION_LIFETIME_SECONDS,
        };

        Ok(encode(
            &Header::new(Algorithm::RS256),
            &claims,
            &self.encoding_key,
        )?)
    }

    fn fresh_cached_token(&self) -> Option<Secret<String>> {
        self.cached
            .load_full()
            .filter(|cached| cached.is_fresh(Utc::now()))
            .map(|cached| cached.token.clone())
    }

    #[tracing::instrument(name = "Fetching access token", skip_all)]
    async fn fetch_token(&self) -> Result<CachedToken, CredentialsError> {
        let now = Utc::now();
        let assertion = self.sign_assertion(now)?;

        let response = self
            .http_client
            .post(&self.key.token_uri)
            .form(&[
                ("grant_type", JWT_BEARER_GRANT_TYPE),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await
            .map_err(|e| CredentialsError::TokenExchange(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CredentialsError::TokenExchange(format!(
                "token endpoint returned {status}: {body}"
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| CredentialsError::TokenExchange(e.to_string()))?;

        let expires_at = Duration::try_seconds(token.expires_in)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                CredentialsError::TokenExchange(format!(
                    "token endpoint returned an out of range expires_in: {}",
                    token.expires_in
                ))
            })?;

        Ok(CachedToken {
            token: token.access_token,
            expires_at,
        })
    }
}

#[async_trait]
impl AccessTokenSource for ServiceAccountTokenSource {
    async fn access_token(&self) -> Result<Secret<String>, CredentialsError> {
        if let Some(token) = self.fresh_cached_token() {
            return Ok(token);
        }

        let _guard = self.refresh_lock.lock().await;
        // Another caller may have refreshed while we waited.
        if let Some(token) = self.fresh_cached_token() {
            return Ok(token);
        }

        let fresh = self.fetch_token().await?;
        let token = fresh.token.clone();
        self.cached.store(Some(Arc::new(fresh)));
        tracing::debug!("access token refreshed");

        Ok(token)
    }
}

/// Credentials chosen at startup: emulator/static token or a service account.
#[derive(Clone)]
pub enum FirebaseCredentials {
    Static(StaticTokenSource),
    ServiceAccount(ServiceAccountTokenSource),
}

#[async_trait]
impl AccessTokenSource for FirebaseCredentials {
    async fn access_token(&self) -> Result<Secret<String>, CredentialsError> {
        match self {
            Self::Static(source) => source.access_token().await,
            Self::ServiceAccount(source) => source.access_token().await,
        }
    }
}
