pub mod account_service;
pub mod helpers;
pub mod tracing;

pub use account_service::AccountService;
pub use helpers::{BootstrapError, build_service, configure_firebase, get_http_client};
