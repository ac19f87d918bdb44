//! Axum-specific account deletion route.

use axum::{
    body,
    extract::{Request, State},
    http::Method,
    response::{IntoResponse, Response},
};
use erasure_adapters::handlers;
use erasure_application::{DeleteAccountError, DeleteAccountUseCase};
use erasure_core::{
    DeletionRequest, DeletionRequestError, DocumentStore, IdentityProvider, ResponseHelpers,
    SystemMessagePoster,
};
use thiserror::Error;

use crate::adapters::response_builder;

/// Largest request body accepted, matching Axum's default body limit.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Axum account deletion route.
///
/// Mounted for every method so that anything but `POST` gets the plain text
/// 405 body rather than Axum's empty one. The method is checked before the
/// body is read; the deletion itself runs in the framework-agnostic handler.
#[tracing::instrument(name = "Delete Account", skip_all, fields(method = %request.method()))]
pub async fn delete_account<I, D, S>(
    State((identity_provider, document_store, system_messages)): State<(I, D, S)>,
    request: Request,
) -> Result<Response, DeleteAccountRouteError>
where
    I: IdentityProvider + Clone + 'static,
    D: DocumentStore + Clone + 'static,
    S: SystemMessagePoster + Clone + 'static,
{
    if request.method() != Method::POST {
        return Err(DeleteAccountRouteError::MethodNotAllowed);
    }

    let body = body::to_bytes(request.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|e| DeleteAccountRouteError::UnreadableBody(e.to_string()))?;
    let request = DeletionRequest::from_body(&body)?;

    let use_case = DeleteAccountUseCase::new(identity_provider, document_store, system_messages);

    handlers::handle_delete_account(&use_case, request, response_builder())
        .await
        .map_err(DeleteAccountRouteError::DeletionFailed)
}

/// Errors that can occur during account deletion
#[derive(Debug, Error)]
pub enum DeleteAccountRouteError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Failed to read request body: {0}")]
    UnreadableBody(String),

    #[error(transparent)]
    InvalidRequest(#[from] DeletionRequestError),

    #[error(transparent)]
    DeletionFailed(DeleteAccountError),
}

impl IntoResponse for DeleteAccountRouteError {
    fn into_response(self) -> Response {
        let builder = response_builder();
        match self {
            DeleteAccountRouteError::MethodNotAllowed => builder.method_not_allowed(),
            e @ (DeleteAccountRouteError::UnreadableBody(_)
            | DeleteAccountRouteError::InvalidRequest(_)) => {
                tracing::debug!(error = %e, "rejected deletion request");
                builder.bad_request(&e.to_string())
            }
            DeleteAccountRouteError::DeletionFailed(e) => {
                tracing::error!(error = %e, "account deletion failed");
                builder.internal_error(&e.to_string())
            }
        }
    }
}
