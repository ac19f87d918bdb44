//! Axum integration for the account deletion service.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  erasure_core: ResponseBuilder trait     │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  erasure_axum: Axum implementations      │
//! │  - AxumResponseBuilder                   │
//! │  - delete_account route                  │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use erasure_axum::routes;
//!
//! let app = Router::new()
//!     .route("/", any(routes::delete_account::<I, D, S>))
//!     .with_state((identity_provider, document_store, system_messages));
//! ```

pub mod adapters;
pub mod routes;

// Re-export for convenience
pub use adapters::{AxumResponseBuilder, response_builder};
