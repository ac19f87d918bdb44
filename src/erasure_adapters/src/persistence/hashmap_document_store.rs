use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use erasure_core::{DocumentStore, DocumentStoreError, FirebaseUid};
use serde_json::Value;

type DocumentPath = (String, FirebaseUid);

#[derive(Default, Clone)]
pub struct HashMapDocumentStore {
    documents: Arc<RwLock<HashMap<DocumentPath, Value>>>,
}

impl HashMapDocumentStore {
    pub fn new() -> Self {
        Self {
            documents: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn insert_document(&self, collection: &str, key: FirebaseUid, document: Value) {
        self.documents
            .write()
            .await
            .insert((collection.to_string(), key), document);
    }

    pub async fn contains_document(&self, collection: &str, key: &FirebaseUid) -> bool {
        self.documents
            .read()
            .await
            .contains_key(&(collection.to_string(), key.clone()))
    }
}

#[async_trait::async_trait]
impl DocumentStore for HashMapDocumentStore {
    async fn delete_document(
        &self,
        collection: &str,
        key: &FirebaseUid,
    ) -> Result<(), DocumentStoreError> {
        self.documents
            .write()
            .await
            .remove(&(collection.to_string(), key.clone()));
        Ok(())
    }
}
