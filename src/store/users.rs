use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::User;

const USER_COLUMNS: &str = "id, username, email, fullname, hashed_password, is_active";

/// Looks up a user by exact username. At most one row matches thanks to
/// the UNIQUE constraint.
pub async fn find_by_username(pool: &SqlitePool, username: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {} FROM users WHERE username = ?",
        USER_COLUMNS
    ))
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Looks up a user by exact email address.
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {} FROM users WHERE email = ?",
        USER_COLUMNS
    ))
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Inserts a new user and returns the stored row. The password must
/// already be hashed; this layer never sees plaintext. A username or
/// email collision surfaces as `AppError::Conflict` via the UNIQUE
/// constraints, which remain the backstop behind the registration
/// pre-check.
pub async fn insert(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    fullname: &str,
    hashed_password: &str,
) -> Result<User, AppError> {
    let user = sqlx::query_as::<_, User>(&format!(
        "INSERT INTO users (username, email, fullname, hashed_password)
         VALUES (?, ?, ?, ?)
         RETURNING {}",
        USER_COLUMNS
    ))
    .bind(username)
    .bind(email)
    .bind(fullname)
    .bind(hashed_password)
    .fetch_one(pool)
    .await?;

    Ok(user)
}
