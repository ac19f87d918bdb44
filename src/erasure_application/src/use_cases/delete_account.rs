use erasure_core::{
    DeletionRequest, DocumentStore, DocumentStoreError, IdentityProvider, IdentityProviderError,
    SystemMessageError, SystemMessagePoster, USERS_COLLECTION,
};

/// Error types for delete account use case
///
/// Every variant displays as the delegate's own message.
#[derive(Debug, thiserror::Error)]
pub enum DeleteAccountError {
    #[error(transparent)]
    IdentityProviderError(#[from] IdentityProviderError),
    #[error(transparent)]
    DocumentStoreError(#[from] DocumentStoreError),
    #[error(transparent)]
    SystemMessageError(#[from] SystemMessageError),
}

/// Delete account use case - removes the identity record, then the profile document
pub struct DeleteAccountUseCase<I, D, S>
where
    I: IdentityProvider,
    D: DocumentStore,
    S: SystemMessagePoster,
{
    identity_provider: I,
    document_store: D,
    system_messages: S,
}

impl<I, D, S> DeleteAccountUseCase<I, D, S>
where
    I: IdentityProvider,
    D: DocumentStore,
    S: SystemMessagePoster,
{
    pub fn new(identity_provider: I, document_store: D, system_messages: S) -> Self {
        Self {
            identity_provider,
            document_store,
            system_messages,
        }
    }

    /// Execute the delete account use case
    ///
    /// The steps run strictly in order and the first failure aborts the rest.
    /// Nothing is rolled back: if the profile document cannot be removed the
    /// identity record stays deleted.
    ///
    /// # Arguments
    /// * `request` - Validated deletion request
    ///
    /// # Returns
    /// Ok(()) on success, or DeleteAccountError
    #[tracing::instrument(
        name = "DeleteAccountUseCase::execute",
        skip(self, request),
        fields(firebase_uid = %request.firebase_uid())
    )]
    pub async fn execute(&self, request: DeletionRequest) -> Result<(), DeleteAccountError> {
        let uid = request.firebase_uid();

        self.identity_provider.delete_user(uid).await?;
        tracing::debug!("identity record deleted");

        if let Err(e) = self
            .document_store
            .delete_document(USERS_COLLECTION, uid)
            .await
        {
            tracing::warn!(error = %e, "identity deleted but profile document remains");
            return Err(e.into());
        }
        tracing::debug!("profile document deleted");

        if request.post_system_messages() {
            self.system_messages.post_account_deleted(uid).await?;
        }

        tracing::info!("account deleted");
        Ok(())
    }
}
