//! Axum-specific route handlers.
//!
//! Routes use Axum's extractors to get data from requests, call the
//! framework-agnostic handlers, and convert results to Axum responses.

pub mod delete_account;

pub use delete_account::delete_account;
