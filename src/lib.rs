//! # Erasure - Account Deletion Service Library
//!
//! This is a facade crate that re-exports all public APIs from the service components.
//! Use this crate to get access to all account deletion functionality in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `FirebaseUid`, `DeletionRequest`
//! - **Port traits**: `IdentityProvider`, `DocumentStore`, `SystemMessagePoster`
//! - **Use cases**: `DeleteAccountUseCase`
//! - **Adapters**: `FirebaseAuthClient`, `FirestoreDocumentStore`, in-memory stores
//! - **Service**: `AccountService` - The main entry point for the HTTP service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use erasure_core::*;
}

// Re-export most commonly used core types at the root level
pub use erasure_core::{DeletionRequest, DeletionRequestError, FirebaseUid, FirebaseUidError};

// ============================================================================
// Port Traits
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use erasure_core::{
        DocumentStore, DocumentStoreError, IdentityProvider, IdentityProviderError,
        SystemMessageError, SystemMessagePoster, USERS_COLLECTION,
    };
}

pub use ports::{DocumentStore, IdentityProvider, SystemMessagePoster};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use erasure_application::*;
}

pub use erasure_application::{DeleteAccountError, DeleteAccountUseCase};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Firebase REST clients and credentials
    pub mod firebase {
        pub use erasure_adapters::firebase::*;
    }

    /// In-memory implementations
    pub mod persistence {
        pub use erasure_adapters::persistence::*;
    }

    /// Framework-agnostic handlers
    pub mod handlers {
        pub use erasure_adapters::handlers::*;
    }

    /// Axum routes and response builder
    pub mod axum {
        pub use erasure_axum::*;
    }

    /// Configuration
    pub mod config {
        pub use erasure_adapters::config::*;
    }
}

pub use erasure_adapters::{
    FirebaseAuthClient, FirebaseCredentials, FirestoreDocumentStore, HashMapDocumentStore,
    HashMapIdentityProvider, NoopSystemMessagePoster, ServiceAccountTokenSource,
    StaticTokenSource,
};

// ============================================================================
// Account Service (Main Entry Point)
// ============================================================================

/// Main account service
pub use erasure_service::{AccountService, build_service, configure_firebase, get_http_client};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
