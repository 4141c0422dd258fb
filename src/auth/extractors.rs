use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, Error as ActixError, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;
use sqlx::SqlitePool;

use crate::auth::token::decode_token;
use crate::config::AuthConfig;
use crate::error::AppError;
use crate::models::User;
use crate::store::users;

/// The resolved identity of the calling user.
///
/// Declaring this extractor as a handler parameter runs the whole
/// per-request gateway sequence: pull the bearer token out of the
/// `Authorization` header, decode and verify it, resolve the subject
/// against the credential store, and confirm the account is active.
/// The pool and `AuthConfig` are read from app data, so the chain is
/// explicit per request rather than hidden in thread-local state.
///
/// A missing header, an invalid token and an unknown subject all fail
/// with the same 401 challenge response; only an inactive account is
/// distinguishable, as a 400.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

fn credentials_error() -> AppError {
    AppError::Unauthorized("Could not validate credentials".into())
}

impl FromRequest for CurrentUser {
    type Error = ActixError; // AppError is converted into ActixError via ResponseError
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let config = req
                .app_data::<web::Data<AuthConfig>>()
                .cloned()
                .ok_or_else(|| {
                    AppError::InternalServerError("AuthConfig missing from app data".into())
                })?;
            let pool = req
                .app_data::<web::Data<SqlitePool>>()
                .cloned()
                .ok_or_else(|| {
                    AppError::InternalServerError("Database pool missing from app data".into())
                })?;

            let token = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.strip_prefix("Bearer "))
                .ok_or_else(credentials_error)?;

            let claims = decode_token(config.get_ref(), token)?;

            let user = users::find_by_username(pool.get_ref(), &claims.sub)
                .await?
                .ok_or_else(credentials_error)?;

            if !user.is_active {
                return Err(AppError::BadRequest("Inactive user".into()).into());
            }

            Ok(CurrentUser(user))
        })
    }
}
