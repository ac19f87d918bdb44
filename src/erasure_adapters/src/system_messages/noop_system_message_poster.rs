use erasure_core::{FirebaseUid, SystemMessageError, SystemMessagePoster};

/// Accepts `postSystemMessages` requests without doing anything.
#[derive(Debug, Clone, Default)]
pub struct NoopSystemMessagePoster;

impl NoopSystemMessagePoster {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl SystemMessagePoster for NoopSystemMessagePoster {
    async fn post_account_deleted(&self, uid: &FirebaseUid) -> Result<(), SystemMessageError> {
        tracing::debug!(firebase_uid = %uid, "no system message poster configured");
        Ok(())
    }
}
