mod delete_account;
mod firebase_backend;
mod helpers;
