use crate::{
    auth::{issue_token, verify_credentials, LoginForm, TokenResponse},
    config::AuthConfig,
    error::AppError,
};
use actix_web::{post, web, HttpResponse, Responder};
use sqlx::SqlitePool;

/// Login for an access token
///
/// Accepts a form-encoded username/password pair, verifies it against
/// the credential store and responds with a signed bearer token. An
/// unknown username and a wrong password produce the same 401.
#[post("/token")]
pub async fn login(
    pool: web::Data<SqlitePool>,
    auth_config: web::Data<AuthConfig>,
    form: web::Form<LoginForm>,
) -> Result<impl Responder, AppError> {
    let user = verify_credentials(pool.get_ref(), &form.username, &form.password)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Incorrect username or password".into()))?;

    let access_token = issue_token(auth_config.get_ref(), &user.username, None)?;

    Ok(HttpResponse::Ok().json(TokenResponse::bearer(access_token)))
}
