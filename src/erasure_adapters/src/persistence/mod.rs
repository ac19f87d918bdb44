pub mod hashmap_document_store;
pub mod hashmap_identity_provider;

pub use hashmap_document_store::HashMapDocumentStore;
pub use hashmap_identity_provider::HashMapIdentityProvider;
