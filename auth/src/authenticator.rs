use crate::jwt::Claims;
use crate::jwt::JwtHandler;
use crate::jwt::TokenError;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::password::PasswordPolicy;
use crate::password::PolicyError;

/// Authentication coordinator combining policy validation, password
/// hashing/verification, and session token handling.
///
/// Holds the only reference to the signing secret; constructed once at
/// startup and shared read-only across requests.
pub struct Authenticator {
    policy: PasswordPolicy,
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_ttl_seconds: i64,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed bearer token, safe to return to the client
    pub access_token: String,
}

/// Failure while turning a candidate password into a stored hash.
///
/// Policy violations are the caller's fault (4xx); hashing failures are
/// server faults (5xx). The two must stay distinguishable.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CredentialError {
    #[error("{0}")]
    Policy(#[from] PolicyError),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),
}

/// Authentication operation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    /// * `token_ttl_seconds` - Lifetime of issued tokens
    pub fn new(jwt_secret: &[u8], token_ttl_seconds: i64) -> Self {
        Self {
            policy: PasswordPolicy::new(),
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
            token_ttl_seconds,
        }
    }

    /// Validate a candidate password against the composition policy and,
    /// on success, hash it for storage.
    ///
    /// This is the only path that produces a password hash; identities
    /// never accept a plaintext-settable field.
    ///
    /// # Errors
    /// * `Policy` - Candidate fails a composition rule
    /// * `Password` - Hashing operation failed
    pub fn validate_and_hash(&self, password: &str) -> Result<String, CredentialError> {
        self.policy.validate(password)?;
        let hash = self.password_hasher.hash(password)?;
        Ok(hash)
    }

    /// Verify credentials and issue a session token for the identity.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `user_id` - Identity's unique id, embedded as the token subject
    /// * `username` - Identity's username, embedded in the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `Password` - Stored hash could not be checked
    /// * `Token` - Token signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: impl ToString,
        username: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let claims = Claims::for_user(user_id, username.to_string(), self.token_ttl_seconds);
        let access_token = self.jwt_handler.encode(&claims)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Verify a bearer token and recover the identity claims.
    ///
    /// # Errors
    /// * `Malformed` / `BadSignature` / `Expired` - See [`TokenError`]
    pub fn verify_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.jwt_handler.decode(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_validate_and_hash_success() {
        let authenticator = Authenticator::new(SECRET, 3600);

        let hash = authenticator
            .validate_and_hash("Passw0rd1")
            .expect("Failed to hash password");

        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn test_validate_and_hash_rejects_policy_violation() {
        let authenticator = Authenticator::new(SECRET, 3600);

        for candidate in ["Pw1", "password1", "PASSWORD1", "Passwords"] {
            let result = authenticator.validate_and_hash(candidate);
            assert!(
                matches!(result, Err(CredentialError::Policy(_))),
                "expected policy rejection for {candidate:?}"
            );
        }
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = Authenticator::new(SECRET, 3600);

        let password = "Passw0rd1";
        let hash = authenticator
            .validate_and_hash(password)
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate(password, &hash, "user123", "alice")
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        let claims = authenticator
            .verify_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.username, "alice");
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = Authenticator::new(SECRET, 3600);

        let hash = authenticator
            .validate_and_hash("Passw0rd1")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("Wr0ngPass1", &hash, "user123", "alice");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_verify_invalid_token() {
        let authenticator = Authenticator::new(SECRET, 3600);

        let result = authenticator.verify_token("invalid.token.here");
        assert!(result.is_err());
    }
}
