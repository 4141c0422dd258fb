pub mod extractors;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::User;
use crate::store::users;

// Re-export necessary items
pub use extractors::CurrentUser;
pub use password::{hash_password, verify_password};
pub use token::{decode_token, issue_token, Claims};

/// Form-encoded login payload, as submitted to `POST /token`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Response structure after a successful login: the signed bearer token
/// and its type tag.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Checks a username/password pair against the credential store.
///
/// Returns `Ok(None)` both for an unknown username and for a wrong
/// password; the caller cannot tell the two apart. Only unexpected
/// store or hashing failures are errors.
pub async fn verify_credentials(
    pool: &SqlitePool,
    username: &str,
    password: &str,
) -> Result<Option<User>, AppError> {
    let user = match users::find_by_username(pool, username).await? {
        Some(user) => user,
        None => return Ok(None),
    };

    if verify_password(password, &user.hashed_password)? {
        Ok(Some(user))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use sqlx::sqlite::SqlitePoolOptions;

    #[test]
    fn test_token_response_tag() {
        let resp = TokenResponse::bearer("abc".to_string());
        assert_eq!(resp.token_type, "bearer");
        assert_eq!(resp.access_token, "abc");
    }

    #[actix_rt::test]
    async fn test_verify_credentials() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        db::init_schema(&pool).await.unwrap();

        let hashed = hash_password("secret123").unwrap();
        users::insert(&pool, "bob", "bob@example.com", "Bob B", &hashed)
            .await
            .unwrap();

        let user = verify_credentials(&pool, "bob", "secret123")
            .await
            .unwrap()
            .expect("correct credentials should verify");
        assert_eq!(user.username, "bob");

        // Wrong password and unknown username both come back as None.
        assert!(verify_credentials(&pool, "bob", "wrong-password")
            .await
            .unwrap()
            .is_none());
        assert!(verify_credentials(&pool, "nobody", "secret123")
            .await
            .unwrap()
            .is_none());
    }
}
