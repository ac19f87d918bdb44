pub mod env {
    pub const GOOGLE_APPLICATION_CREDENTIALS_ENV_VAR: &str = "GOOGLE_APPLICATION_CREDENTIALS";
    pub const GOOGLE_CLOUD_PROJECT_ENV_VAR: &str = "GOOGLE_CLOUD_PROJECT";
    pub const GCLOUD_PROJECT_ENV_VAR: &str = "GCLOUD_PROJECT";
    pub const FIREBASE_AUTH_EMULATOR_HOST_ENV_VAR: &str = "FIREBASE_AUTH_EMULATOR_HOST";
    pub const FIRESTORE_EMULATOR_HOST_ENV_VAR: &str = "FIRESTORE_EMULATOR_HOST";
}

/// Prefix for settings read from the environment, e.g. `ERASURE__FIREBASE__PROJECT_ID`.
pub const ENV_PREFIX: &str = "ERASURE";
pub const ENV_SEPARATOR: &str = "__";
pub const CONFIG_FILE: &str = "config/base";

/// Bearer token the Firebase emulators accept in place of an OAuth token.
pub const EMULATOR_TOKEN: &str = "owner";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:8080";
    pub mod firebase {
        pub const IDENTITY_TOOLKIT_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";
        pub const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";
        pub const TIMEOUT_IN_MILLIS: u64 = 10_000;
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub mod firebase {
        use std::time::Duration;

        pub const PROJECT_ID: &str = "test-project";
        pub const TIMEOUT: Duration = std::time::Duration::from_millis(500);
    }
}
