use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use super::constants::{CONFIG_FILE, ENV_PREFIX, ENV_SEPARATOR, env, prod};

/// Which adapters back the deletion flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Firebase,
    /// In-process stores, for local runs without Google credentials
    Memory,
}

/// CORS origins, configured as a comma separated list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn contains(&self, origin: &str) -> bool {
        self.0.iter().any(|allowed| allowed == origin)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for AllowedOrigins {
    fn from(value: String) -> Self {
        Self(
            value
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSetting {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

impl Default for ApplicationSetting {
    fn default() -> Self {
        Self {
            address: default_address(),
            allowed_origins: AllowedOrigins::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FirebaseSetting {
    pub project_id: Option<String>,
    /// Path to a service account key file
    pub credentials_path: Option<String>,
    pub auth_emulator_host: Option<String>,
    pub firestore_emulator_host: Option<String>,
    #[serde(default = "default_timeout_in_millis")]
    pub timeout_in_millis: u64,
}

impl FirebaseSetting {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }

    /// Fill unset fields from the variables the Google client libraries read.
    pub fn apply_env_fallbacks<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.project_id.is_none() {
            self.project_id = lookup(env::GOOGLE_CLOUD_PROJECT_ENV_VAR)
                .or_else(|| lookup(env::GCLOUD_PROJECT_ENV_VAR));
        }
        if self.credentials_path.is_none() {
            self.credentials_path = lookup(env::GOOGLE_APPLICATION_CREDENTIALS_ENV_VAR);
        }
        if self.auth_emulator_host.is_none() {
            self.auth_emulator_host = lookup(env::FIREBASE_AUTH_EMULATOR_HOST_ENV_VAR);
        }
        if self.firestore_emulator_host.is_none() {
            self.firestore_emulator_host = lookup(env::FIRESTORE_EMULATOR_HOST_ENV_VAR);
        }
    }
}

impl Default for FirebaseSetting {
    fn default() -> Self {
        Self {
            project_id: None,
            credentials_path: None,
            auth_emulator_host: None,
            firestore_emulator_host: None,
            timeout_in_millis: default_timeout_in_millis(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErasureServiceSetting {
    #[serde(default)]
    pub application: ApplicationSetting,
    #[serde(default)]
    pub firebase: FirebaseSetting,
    #[serde(default)]
    pub backend: Backend,
}

impl ErasureServiceSetting {
    /// Load settings from `.env`, the optional `config/base.*` file and
    /// `ERASURE__*` environment variables, in increasing precedence.
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!(error = %e, "failed to read .env file");
            }
        }

        let config = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR),
            )
            .build()?;

        let mut settings = Self::from_config(config)?;
        settings
            .firebase
            .apply_env_fallbacks(|key| std::env::var(key).ok());
        Ok(settings)
    }

    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        config.try_deserialize()
    }
}

fn default_address() -> String {
    prod::APP_ADDRESS.to_string()
}

fn default_timeout_in_millis() -> u64 {
    prod::firebase::TIMEOUT_IN_MILLIS
}
