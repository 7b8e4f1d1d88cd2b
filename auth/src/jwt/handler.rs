use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Session token encoder/verifier.
///
/// Signs [`Claims`] with HS256 (HMAC with SHA-256) over a process-wide
/// secret. Tokens are stateless: nothing is stored server-side and there is
/// no revocation, only expiry.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new handler from the signing secret.
    ///
    /// The secret is process configuration, loaded once at startup. It must
    /// never be logged or embedded in token contents.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Sign claims into an opaque bearer token string.
    ///
    /// # Errors
    /// * `EncodingFailed` - Claims could not be serialized and signed
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and recover its claims.
    ///
    /// Expiry is checked with zero leeway: a token is accepted exactly at
    /// `exp` and rejected strictly after.
    ///
    /// # Errors
    /// * `Malformed` - Not parseable as a JWT
    /// * `BadSignature` - Tampered payload or wrong signing key
    /// * `Expired` - Past its expiry
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                        TokenError::BadSignature
                    }
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    #[test]
    fn test_encode_and_decode() {
        let handler = JwtHandler::new(SECRET);
        let claims = Claims::for_user("user123", "alice".to_string(), 3600);

        let token = handler.encode(&claims).expect("Failed to encode token");
        assert!(!token.is_empty());

        let decoded = handler.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_decode_malformed_token() {
        let handler = JwtHandler::new(SECRET);

        let result = handler.decode("not.a.token");
        assert!(matches!(result, Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let handler = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!");
        let other = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!");

        let claims = Claims::for_user("user123", "alice".to_string(), 3600);
        let token = handler.encode(&claims).expect("Failed to encode token");

        let result = other.decode(&token);
        assert_eq!(result, Err(TokenError::BadSignature));
    }

    #[test]
    fn test_decode_tampered_payload() {
        let handler = JwtHandler::new(SECRET);

        let token = handler
            .encode(&Claims::for_user("user123", "alice".to_string(), 3600))
            .expect("Failed to encode token");
        let other = handler
            .encode(&Claims::for_user("user456", "mallory".to_string(), 3600))
            .expect("Failed to encode token");

        // Graft the second payload onto the first signature
        let parts: Vec<&str> = token.split('.').collect();
        let other_parts: Vec<&str> = other.split('.').collect();
        let forged = format!("{}.{}.{}", parts[0], other_parts[1], parts[2]);

        let result = handler.decode(&forged);
        assert_eq!(result, Err(TokenError::BadSignature));
    }

    #[test]
    fn test_decode_expired_token() {
        let handler = JwtHandler::new(SECRET);

        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "user123".to_string(),
            username: "alice".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };

        let token = handler.encode(&claims).expect("Failed to encode token");
        let result = handler.decode(&token);
        assert_eq!(result, Err(TokenError::Expired));
    }
}
