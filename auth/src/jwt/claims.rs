use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Session token claims.
///
/// Carries the authenticated identity (id and username) plus issue and
/// expiry timestamps. Nothing else is embedded; in particular the signing
/// secret and the password hash never appear in the payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the user's unique identifier
    pub sub: String,

    /// Username at issue time
    pub username: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for an authenticated user, expiring `ttl_seconds`
    /// from now.
    pub fn for_user(user_id: impl ToString, username: String, ttl_seconds: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: user_id.to_string(),
            username,
            iat: now,
            exp: now + ttl_seconds,
        }
    }

    /// Whether the token has expired at `now`.
    ///
    /// A token is valid through `exp` inclusive and expired strictly after,
    /// matching the verifier's boundary behavior.
    pub fn is_expired(&self, now: i64) -> bool {
        self.exp < now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_user() {
        let claims = Claims::for_user("user123", "alice".to_string(), 3600);

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_expiry_boundary() {
        let claims = Claims {
            sub: "user123".to_string(),
            username: "alice".to_string(),
            iat: 0,
            exp: 1000,
        };

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000)); // Valid exactly at expiry
        assert!(claims.is_expired(1001));
    }
}
