use std::fmt;

use thiserror::Error;

/// Longest identifier the identity provider accepts for a user record.
pub const MAX_UID_LENGTH: usize = 128;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FirebaseUidError {
    #[error("firebaseUid must be a non-empty string")]
    Empty,
    #[error("firebaseUid must be at most {MAX_UID_LENGTH} characters long")]
    TooLong,
}

/// Identifier assigned to a user by the identity provider.
///
/// The same value keys the user's profile document, so it is treated as an
/// opaque string and never normalised.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FirebaseUid(String);

impl FirebaseUid {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for FirebaseUid {
    type Error = FirebaseUidError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(FirebaseUidError::Empty);
        }
        if value.chars().count() > MAX_UID_LENGTH {
            return Err(FirebaseUidError::TooLong);
        }
        Ok(Self(value))
    }
}

impl TryFrom<&str> for FirebaseUid {
    type Error = FirebaseUidError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_string())
    }
}

impl AsRef<str> for FirebaseUid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FirebaseUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
