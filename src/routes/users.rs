use crate::{
    auth::{hash_password, CurrentUser},
    error::AppError,
    models::NewUser,
    store::users,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use sqlx::SqlitePool;
use validator::Validate;

/// Register a new user
///
/// Validates the payload, pre-checks the email for uniqueness (the
/// UNIQUE constraints in the store remain the backstop for the race
/// between concurrent identical registrations), hashes the password and
/// inserts the record. The response is the created user; the password
/// hash is excluded from serialization.
#[post("/users/")]
pub async fn register(
    pool: web::Data<SqlitePool>,
    new_user: web::Json<NewUser>,
) -> Result<impl Responder, AppError> {
    new_user.validate()?;

    if users::find_by_email(pool.get_ref(), &new_user.email)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("Email already registered".into()));
    }

    let hashed_password = hash_password(&new_user.password)?;

    let user = users::insert(
        pool.get_ref(),
        &new_user.username,
        &new_user.email,
        &new_user.fullname,
        &hashed_password,
    )
    .await?;

    Ok(HttpResponse::Ok().json(user))
}

/// Return the caller's own user record.
#[get("/users/me/")]
pub async fn me(current_user: CurrentUser) -> Result<impl Responder, AppError> {
    Ok(HttpResponse::Ok().json(current_user.0))
}
