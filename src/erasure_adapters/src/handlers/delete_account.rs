//! Framework-agnostic account deletion handler.

use erasure_application::{DeleteAccountError, DeleteAccountUseCase};
use erasure_core::{
    DeletionRequest, DocumentStore, IdentityProvider, ResponseHelpers, SystemMessagePoster,
};

pub const ACCOUNT_DELETED_MESSAGE: &str = "Account deleted";

/// Framework-agnostic account deletion handler.
///
/// Runs the deletion use case for an already validated request.
///
/// # Type Parameters
/// * `I`, `D`, `S` - Identity provider, document store and system message poster
/// * `B` - Response builder for the framework being used
///
/// # Returns
/// A `200 {"message": "Account deleted"}` response, or the delegate error
pub async fn handle_delete_account<I, D, S, B>(
    use_case: &DeleteAccountUseCase<I, D, S>,
    request: DeletionRequest,
    builder: B,
) -> Result<B::Response, DeleteAccountError>
where
    I: IdentityProvider,
    D: DocumentStore,
    S: SystemMessagePoster,
    B: ResponseHelpers,
{
    use_case.execute(request).await?;

    Ok(builder.ok_message(ACCOUNT_DELETED_MESSAGE))
}
