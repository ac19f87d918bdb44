use erasure_adapters::{
    FirebaseAuthClient, FirestoreDocumentStore, HashMapDocumentStore, HashMapIdentityProvider,
    NoopSystemMessagePoster, StaticTokenSource,
    config::{AllowedOrigins, test as test_config},
};
use erasure_core::{DocumentStore, FirebaseUid, IdentityProvider, USERS_COLLECTION};
use erasure_service::AccountService;
use secrecy::Secret;
use tokio::net::TcpListener;
use wiremock::MockServer;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
}

impl TestApp {
    async fn spawn<I, D>(identity_provider: I, document_store: D) -> Self
    where
        I: IdentityProvider + Clone + 'static,
        D: DocumentStore + Clone + 'static,
    {
        let service = AccountService::new(
            identity_provider,
            document_store,
            NoopSystemMessagePoster::new(),
        );

        let listener = TcpListener::bind(test_config::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let allowed_origins = AllowedOrigins::from("https://app.example".to_string());
        tokio::spawn(service.run_standalone(listener, Some(allowed_origins)));

        Self {
            address,
            http_client: reqwest::Client::new(),
        }
    }

    pub async fn post_delete_account<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/deleteAccount", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn send_raw(&self, method: reqwest::Method, body: &'static str) -> reqwest::Response {
        self.http_client
            .request(method, &self.address)
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// App backed by in-memory stores, seeded with the given users and their profile documents.
pub struct MemoryApp {
    pub app: TestApp,
    pub identity_provider: HashMapIdentityProvider,
    pub document_store: HashMapDocumentStore,
}

impl MemoryApp {
    pub async fn spawn_with_users(uids: &[&str]) -> Self {
        let identity_provider = HashMapIdentityProvider::new();
        let document_store = HashMapDocumentStore::new();

        for uid in uids {
            let uid = FirebaseUid::try_from(*uid).unwrap();
            identity_provider.add_user(uid.clone()).await;
            document_store
                .insert_document(
                    USERS_COLLECTION,
                    uid,
                    serde_json::json!({ "displayName": "Test User" }),
                )
                .await;
        }

        let app = TestApp::spawn(identity_provider.clone(), document_store.clone()).await;

        Self {
            app,
            identity_provider,
            document_store,
        }
    }

    pub async fn has_user(&self, uid: &str) -> bool {
        self.identity_provider
            .contains_user(&FirebaseUid::try_from(uid).unwrap())
            .await
    }

    pub async fn has_profile(&self, uid: &str) -> bool {
        self.document_store
            .contains_document(USERS_COLLECTION, &FirebaseUid::try_from(uid).unwrap())
            .await
    }
}

/// App talking to mocked Identity Toolkit and Firestore endpoints.
pub struct FirebaseApp {
    pub app: TestApp,
    pub auth_server: MockServer,
    pub firestore_server: MockServer,
}

impl FirebaseApp {
    pub async fn spawn() -> Self {
        let auth_server = MockServer::start().await;
        let firestore_server = MockServer::start().await;

        let http_client = reqwest::Client::builder()
            .timeout(test_config::firebase::TIMEOUT)
            .build()
            .unwrap();
        let token_source = StaticTokenSource::new(Secret::new("test-token".to_string()));

        let auth_client = FirebaseAuthClient::new(
            auth_server.uri(),
            test_config::firebase::PROJECT_ID.to_string(),
            token_source.clone(),
            http_client.clone(),
        );
        let document_store = FirestoreDocumentStore::new(
            firestore_server.uri(),
            test_config::firebase::PROJECT_ID.to_string(),
            token_source,
            http_client,
        );

        let app = TestApp::spawn(auth_client, document_store).await;

        Self {
            app,
            auth_server,
            firestore_server,
        }
    }
}
