pub mod deletion_request;
pub mod firebase_uid;
