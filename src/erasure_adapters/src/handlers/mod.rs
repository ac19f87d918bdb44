//! Framework-agnostic request handlers.
//!
//! Framework-specific routes extract and validate request data, call these
//! handlers, and convert the results back to framework responses.

pub mod delete_account;

pub use delete_account::handle_delete_account;
