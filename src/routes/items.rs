use crate::{
    auth::CurrentUser,
    error::AppError,
    models::{Page, TodoItemInput, TodoItemUpdate},
    store::items,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::SqlitePool;
use validator::Validate;

/// Retrieves a page of the caller's to-do items.
///
/// ## Query Parameters:
/// - `skip` (optional): Offset into the caller's items, default 0.
/// - `limit` (optional): Maximum number of items returned, default 10.
///
/// Items come back in insertion order. Other users' items never appear
/// here regardless of the parameters.
#[get("/users/me/items/")]
pub async fn list_items(
    pool: web::Data<SqlitePool>,
    page: web::Query<Page>,
    current_user: CurrentUser,
) -> Result<impl Responder, AppError> {
    let items = items::list(pool.get_ref(), current_user.0.id, page.skip(), page.limit()).await?;

    Ok(HttpResponse::Ok().json(items))
}

/// Retrieves a single to-do item by id.
///
/// Responds 404 when the id does not exist or belongs to another user;
/// the two cases are indistinguishable.
#[get("/users/me/items/{id}")]
pub async fn get_item(
    pool: web::Data<SqlitePool>,
    item_id: web::Path<i64>,
    current_user: CurrentUser,
) -> Result<impl Responder, AppError> {
    let item = items::find(pool.get_ref(), current_user.0.id, item_id.into_inner()).await?;

    match item {
        Some(item) => Ok(HttpResponse::Ok().json(item)),
        None => Err(AppError::NotFound("ToDo item not found".into())),
    }
}

/// Creates a to-do item owned by the caller.
///
/// ## Request Body:
/// - `subject`: The subject line (required).
/// - `body` (optional): Longer free-form text.
///
/// Responds with the stored item, including its assigned id and
/// `owner_id`.
#[post("/users/me/items/")]
pub async fn create_item(
    pool: web::Data<SqlitePool>,
    input: web::Json<TodoItemInput>,
    current_user: CurrentUser,
) -> Result<impl Responder, AppError> {
    input.validate()?;

    let item = items::create(pool.get_ref(), current_user.0.id, input.into_inner()).await?;

    Ok(HttpResponse::Ok().json(item))
}

/// Updates an existing to-do item.
///
/// Partial-update semantics: a field absent from the body keeps its
/// stored value; it is never cleared. Responds 404 when the id does not
/// exist for this caller.
#[put("/users/me/items/{id}")]
pub async fn update_item(
    pool: web::Data<SqlitePool>,
    item_id: web::Path<i64>,
    changes: web::Json<TodoItemUpdate>,
    current_user: CurrentUser,
) -> Result<impl Responder, AppError> {
    changes.validate()?;

    let updated = items::update(
        pool.get_ref(),
        current_user.0.id,
        item_id.into_inner(),
        &changes,
    )
    .await?;

    match updated {
        Some(item) => Ok(HttpResponse::Ok().json(item)),
        None => Err(AppError::NotFound("ToDo item not found".into())),
    }
}

/// Deletes all of the caller's to-do items. A no-op when there are none.
#[delete("/users/me/items/")]
pub async fn delete_all_items(
    pool: web::Data<SqlitePool>,
    current_user: CurrentUser,
) -> Result<impl Responder, AppError> {
    items::delete_all(pool.get_ref(), current_user.0.id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "All todo items deleted successfully"
    })))
}

/// Deletes one to-do item. Idempotent: deleting an id that does not
/// exist (or is owned by someone else) returns the same success
/// response with no state change.
#[delete("/users/me/items/{id}")]
pub async fn delete_item(
    pool: web::Data<SqlitePool>,
    item_id: web::Path<i64>,
    current_user: CurrentUser,
) -> Result<impl Responder, AppError> {
    items::delete(pool.get_ref(), current_user.0.id, item_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Todo item deleted successfully"
    })))
}
