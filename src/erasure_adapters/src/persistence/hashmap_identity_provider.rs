use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use erasure_core::{FirebaseUid, IdentityProvider, IdentityProviderError};

#[derive(Default, Clone)]
pub struct HashMapIdentityProvider {
    users: Arc<RwLock<HashSet<FirebaseUid>>>,
}

impl HashMapIdentityProvider {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    pub async fn add_user(&self, uid: FirebaseUid) {
        self.users.write().await.insert(uid);
    }

    pub async fn contains_user(&self, uid: &FirebaseUid) -> bool {
        self.users.read().await.contains(uid)
    }
}

#[async_trait::async_trait]
impl IdentityProvider for HashMapIdentityProvider {
    async fn delete_user(&self, uid: &FirebaseUid) -> Result<(), IdentityProviderError> {
        let mut users = self.users.write().await;
        if users.remove(uid) {
            Ok(())
        } else {
            Err(IdentityProviderError::UserNotFound)
        }
    }
}
