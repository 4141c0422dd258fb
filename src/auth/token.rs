use crate::config::AuthConfig;
use crate::error::AppError;
use chrono::Duration;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Represents the claims encoded within a session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject of the token: the authenticated username.
    pub sub: String,
    /// Expiration timestamp (seconds since epoch) for the token.
    pub exp: usize,
}

/// Signs a session token for `username`.
///
/// The expiry is now plus `ttl`, or plus the configured default when no
/// explicit `ttl` is given. The default lifetime is 30 minutes everywhere;
/// there is no secondary hardcoded fallback inside this function.
///
/// The signing secret and algorithm come from the `AuthConfig` built at
/// startup; this function never reads the environment.
pub fn issue_token(
    config: &AuthConfig,
    username: &str,
    ttl: Option<Duration>,
) -> Result<String, AppError> {
    let expiration = chrono::Utc::now()
        .checked_add_signed(ttl.unwrap_or(config.token_ttl))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        sub: username.to_owned(),
        exp: expiration,
    };

    encode(
        &Header::new(config.algorithm),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(format!("Failed to issue token: {}", e)))
}

/// Verifies a token's signature, algorithm and expiry, and decodes its claims.
///
/// Every failure mode collapses into the same `AppError::Unauthorized`:
/// an expired token, a forged signature, an algorithm mismatch, a
/// malformed token and a missing subject claim are indistinguishable at
/// the response surface.
pub fn decode_token(config: &AuthConfig, token: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::new(config.algorithm),
    )
    .map(|data| data.claims)
    .map_err(AppError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::Algorithm;

    fn test_config() -> AuthConfig {
        AuthConfig::new("test-secret", Algorithm::HS256, Duration::minutes(30))
    }

    fn assert_uniform_failure(result: Result<Claims, AppError>) {
        match result {
            Err(AppError::Unauthorized(msg)) => {
                assert_eq!(msg, "Could not validate credentials");
            }
            Ok(claims) => panic!("Token should have been rejected, got claims for {}", claims.sub),
            Err(e) => panic!("Unexpected error type: {:?}", e),
        }
    }

    #[test]
    fn test_token_round_trip() {
        let config = test_config();
        let token = issue_token(&config, "alice", None).unwrap();
        let claims = decode_token(&config, &token).unwrap();
        assert_eq!(claims.sub, "alice");

        let now = chrono::Utc::now().timestamp() as usize;
        // Default TTL is 30 minutes; allow a few seconds of slack.
        assert!(claims.exp > now + 29 * 60);
        assert!(claims.exp <= now + 30 * 60 + 5);
    }

    #[test]
    fn test_explicit_ttl_overrides_default() {
        let config = test_config();
        let token = issue_token(&config, "alice", Some(Duration::minutes(5))).unwrap();
        let claims = decode_token(&config, &token).unwrap();

        let now = chrono::Utc::now().timestamp() as usize;
        assert!(claims.exp <= now + 5 * 60 + 5);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let config = test_config();
        let token = issue_token(&config, "bob", Some(Duration::minutes(-5))).unwrap();
        assert_uniform_failure(decode_token(&config, &token));
    }

    #[test]
    fn test_forged_token_is_rejected() {
        let config = test_config();
        let other = AuthConfig::new("another-secret", Algorithm::HS256, Duration::minutes(30));

        let token = issue_token(&other, "mallory", None).unwrap();
        assert_uniform_failure(decode_token(&config, &token));
    }

    #[test]
    fn test_algorithm_mismatch_is_rejected() {
        let config = test_config();
        let hs384 = AuthConfig::new("test-secret", Algorithm::HS384, Duration::minutes(30));

        let token = issue_token(&hs384, "alice", None).unwrap();
        assert_uniform_failure(decode_token(&config, &token));
    }

    #[test]
    fn test_missing_subject_is_rejected() {
        #[derive(Serialize)]
        struct NoSubject {
            exp: usize,
        }

        let config = test_config();
        let exp = (chrono::Utc::now() + Duration::minutes(30)).timestamp() as usize;
        let token = encode(
            &Header::new(config.algorithm),
            &NoSubject { exp },
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        assert_uniform_failure(decode_token(&config, &token));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let config = test_config();
        assert_uniform_failure(decode_token(&config, "not.a.token"));
    }
}
