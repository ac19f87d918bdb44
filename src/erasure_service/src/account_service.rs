use axum::{
    Router,
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, Method, header, request},
    middleware::{self, Next},
    response::Response,
    routing::any,
};
use erasure_adapters::config::AllowedOrigins;
use erasure_axum::routes::delete_account;
use erasure_core::{DocumentStore, IdentityProvider, SystemMessagePoster};
use tokio::net::TcpListener;
use tower::ServiceExt;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// HTTP service exposing the account deletion endpoint
pub struct AccountService {
    router: Router,
}

impl AccountService {
    /// Create a new AccountService with the provided collaborators
    ///
    /// # Arguments
    /// * `identity_provider` - Owner of the users' identity records
    /// * `document_store` - Owner of the users' profile documents
    /// * `system_messages` - Hook run when a request sets `postSystemMessages`
    ///
    /// The deletion endpoint answers on `/` and on `/deleteAccount`.
    pub fn new<I, D, S>(identity_provider: I, document_store: D, system_messages: S) -> Self
    where
        I: IdentityProvider + Clone + 'static,
        D: DocumentStore + Clone + 'static,
        S: SystemMessagePoster + Clone + 'static,
    {
        let router = Router::new()
            .route("/", any(delete_account::<I, D, S>))
            .route("/deleteAccount", any(delete_account::<I, D, S>))
            .with_state((identity_provider, document_store, system_messages));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AccountService into a router that can be nested into another application
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    ///
    /// Only OPTIONS requests carrying both `Origin` and
    /// `Access-Control-Request-Method` are answered as CORS preflights. Any
    /// other OPTIONS request reaches the deletion route and gets its 405.
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins.filter(|origins| !origins.is_empty()) {
            let cors = CorsLayer::new()
                .allow_methods([Method::POST])
                .allow_headers([header::CONTENT_TYPE])
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        origin
                            .to_str()
                            .is_ok_and(|origin| allowed_origins.contains(origin))
                    },
                ));

            let without_cors = self.router.clone();
            self.router = self
                .router
                .layer(cors)
                .layer(middleware::from_fn_with_state(
                    without_cors,
                    bypass_cors_for_plain_options,
                ));
        }
        self.with_trace_layer().router
    }

    /// Run the service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Account service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}

fn is_cors_preflight(headers: &HeaderMap) -> bool {
    headers.contains_key(header::ORIGIN) && headers.contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
}

/// `CorsLayer` answers every OPTIONS request itself, so plain ones are sent
/// straight to the router underneath it.
async fn bypass_cors_for_plain_options(
    State(without_cors): State<Router>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS && !is_cors_preflight(request.headers()) {
        return without_cors
            .oneshot(request)
            .await
            .unwrap_or_else(|never| match never {});
    }

    next.run(request).await
}
