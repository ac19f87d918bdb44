pub mod use_cases;

pub use use_cases::delete_account::{DeleteAccountError, DeleteAccountUseCase};
