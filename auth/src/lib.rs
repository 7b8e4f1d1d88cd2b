//! Authentication utilities library
//!
//! Provides the authentication infrastructure for the blog service:
//! - Password hashing (Argon2id) and composition-policy validation
//! - JWT session token generation and validation
//! - Authentication coordination
//!
//! The service defines its own domain traits and adapts these implementations,
//! keeping cryptographic concerns out of the domain layer.
//!
//! # Examples
//!
//! ## Password validation and hashing
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", 3600);
//!
//! // Register: policy-check and hash in one step
//! let hash = auth.validate_and_hash("Passw0rd1").unwrap();
//!
//! // Login: verify and receive a signed token
//! let result = auth.authenticate("Passw0rd1", &hash, "user123", "alice").unwrap();
//!
//! // Later requests: validate the bearer token
//! let claims = auth.verify_token(&result.access_token).unwrap();
//! assert_eq!(claims.username, "alice");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authenticator::CredentialError;
pub use jwt::Claims;
pub use jwt::JwtHandler;
pub use jwt::TokenError;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::PasswordPolicy;
pub use password::PolicyError;
