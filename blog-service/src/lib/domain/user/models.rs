use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::errors::UserIdError;
use crate::user::errors::UsernameError;

/// User aggregate entity.
///
/// Represents a registered account capable of owning blogs and authoring
/// comments. The password hash is opaque: it is produced only by the
/// policy-validated hashing path and is never serialized outward.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub name: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Ensures the username is at least 4 characters and contains only letters
/// and digits. Uniqueness is case-sensitive and enforced by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    const MIN_LENGTH: usize = 4;

    /// Create a new valid username.
    ///
    /// # Errors
    /// * `TooShort` - Username shorter than 4 characters
    /// * `InvalidCharacters` - Contains non-alphanumeric characters
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let length = username.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(UsernameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        if !username.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(UsernameError::InvalidCharacters);
        }
        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new user with domain types.
///
/// Carries the plaintext password only for the duration of the request; the
/// service exchanges it for a hash before anything is persisted.
#[derive(Debug)]
pub struct CreateUserCommand {
    pub username: Username,
    pub name: Option<String>,
    pub password: String,
}

impl CreateUserCommand {
    pub fn new(username: Username, name: Option<String>, password: String) -> Self {
        Self {
            username,
            name,
            password,
        }
    }
}

/// A user together with the blogs they own, as returned by the user listing.
#[derive(Debug, Clone)]
pub struct UserWithBlogs {
    pub user: User,
    pub blogs: Vec<OwnedBlog>,
}

/// Summary of a blog embedded in the user listing.
#[derive(Debug, Clone)]
pub struct OwnedBlog {
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_valid() {
        let username = Username::new("alice1".to_string()).unwrap();
        assert_eq!(username.as_str(), "alice1");
    }

    #[test]
    fn test_username_too_short() {
        let result = Username::new("abc".to_string());
        assert_eq!(result, Err(UsernameError::TooShort { min: 4, actual: 3 }));
    }

    #[test]
    fn test_username_invalid_characters() {
        let result = Username::new("al ice!".to_string());
        assert_eq!(result, Err(UsernameError::InvalidCharacters));
    }

    #[test]
    fn test_user_id_round_trip() {
        let id = UserId::new();
        let parsed = UserId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_user_id_invalid_format() {
        assert!(UserId::from_string("not-a-uuid").is_err());
    }
}
