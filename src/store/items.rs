use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::{TodoItem, TodoItemInput, TodoItemUpdate};

/// Lists the user's items in insertion order, `limit` rows starting at
/// offset `skip`.
pub async fn list(
    pool: &SqlitePool,
    owner_id: i64,
    skip: i64,
    limit: i64,
) -> Result<Vec<TodoItem>, AppError> {
    let items = sqlx::query_as::<_, TodoItem>(
        "SELECT id, subject, body, owner_id FROM todo_items
         WHERE owner_id = ?
         ORDER BY id ASC
         LIMIT ? OFFSET ?",
    )
    .bind(owner_id)
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await?;

    Ok(items)
}

/// Fetches one item scoped by owner and id. A row owned by someone else
/// is indistinguishable from a missing one: both are `None`.
pub async fn find(pool: &SqlitePool, owner_id: i64, item_id: i64) -> Result<Option<TodoItem>, AppError> {
    let item = sqlx::query_as::<_, TodoItem>(
        "SELECT id, subject, body, owner_id FROM todo_items WHERE owner_id = ? AND id = ?",
    )
    .bind(owner_id)
    .bind(item_id)
    .fetch_optional(pool)
    .await?;

    Ok(item)
}

/// Persists a new item for the user and returns it with its assigned id.
pub async fn create(
    pool: &SqlitePool,
    owner_id: i64,
    input: TodoItemInput,
) -> Result<TodoItem, AppError> {
    let item = sqlx::query_as::<_, TodoItem>(
        "INSERT INTO todo_items (subject, body, owner_id)
         VALUES (?, ?, ?)
         RETURNING id, subject, body, owner_id",
    )
    .bind(input.subject)
    .bind(input.body)
    .bind(owner_id)
    .fetch_one(pool)
    .await?;

    Ok(item)
}

/// Applies a partial update to the item scoped by owner and id. Returns
/// `None` when no such item exists for this user. Fields absent from
/// `update` keep their stored values.
pub async fn update(
    pool: &SqlitePool,
    owner_id: i64,
    item_id: i64,
    changes: &TodoItemUpdate,
) -> Result<Option<TodoItem>, AppError> {
    let existing = find(pool, owner_id, item_id).await?;

    let mut item = match existing {
        Some(item) => item,
        None => return Ok(None),
    };

    changes.apply_to(&mut item);

    sqlx::query("UPDATE todo_items SET subject = ?, body = ? WHERE owner_id = ? AND id = ?")
        .bind(&item.subject)
        .bind(&item.body)
        .bind(owner_id)
        .bind(item_id)
        .execute(pool)
        .await?;

    Ok(Some(item))
}

/// Deletes one item scoped by owner and id. Deleting a missing or
/// foreign-owned id is a no-op, not an error.
pub async fn delete(pool: &SqlitePool, owner_id: i64, item_id: i64) -> Result<(), AppError> {
    sqlx::query("DELETE FROM todo_items WHERE owner_id = ? AND id = ?")
        .bind(owner_id)
        .bind(item_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Removes every item the user owns. No-op when there are none.
pub async fn delete_all(pool: &SqlitePool, owner_id: i64) -> Result<(), AppError> {
    sqlx::query("DELETE FROM todo_items WHERE owner_id = ?")
        .bind(owner_id)
        .execute(pool)
        .await?;

    Ok(())
}
