use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A to-do entry as stored in the database and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct TodoItem {
    /// Row id, assigned by the database on insert.
    pub id: i64,
    /// The one-line subject of the item.
    pub subject: String,
    /// Optional longer text.
    pub body: Option<String>,
    /// Identifier of the user who owns the item.
    pub owner_id: i64,
}

/// Input structure for creating a to-do item.
/// Contains validation rules for its fields.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TodoItemInput {
    /// The subject of the item.
    /// Must be between 1 and 200 characters.
    #[validate(length(min = 1, max = 200))]
    pub subject: String,

    /// An optional body for the item.
    /// Maximum length of 2000 characters if provided.
    #[validate(length(max = 2000))]
    pub body: Option<String>,
}

/// Update payload for an existing item. Both fields are optional: a field
/// that is absent from the request is left untouched on the stored row,
/// never cleared. The merge is spelled out field by field in `apply_to`
/// so the skip-if-absent contract is explicit and unit-tested.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TodoItemUpdate {
    #[validate(length(min = 1, max = 200))]
    pub subject: Option<String>,

    #[validate(length(max = 2000))]
    pub body: Option<String>,
}

impl TodoItemUpdate {
    /// Applies the supplied fields onto `item`, skipping absent ones.
    pub fn apply_to(&self, item: &mut TodoItem) {
        if let Some(subject) = &self.subject {
            item.subject = subject.clone();
        }
        if let Some(body) = &self.body {
            item.body = Some(body.clone());
        }
    }
}

/// Pagination query parameters for the item list endpoint.
#[derive(Debug, Deserialize)]
pub struct Page {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl Page {
    /// Offset into the result set, defaulting to 0.
    pub fn skip(&self) -> i64 {
        self.skip.unwrap_or(0)
    }

    /// Maximum number of rows returned, defaulting to 10.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_item() -> TodoItem {
        TodoItem {
            id: 7,
            subject: "Buy milk".to_string(),
            body: Some("Two liters".to_string()),
            owner_id: 1,
        }
    }

    #[test]
    fn test_item_input_validation() {
        let valid = TodoItemInput {
            subject: "Buy milk".to_string(),
            body: Some("Two liters".to_string()),
        };
        assert!(valid.validate().is_ok());

        let empty_subject = TodoItemInput {
            subject: "".to_string(),
            body: None,
        };
        assert!(empty_subject.validate().is_err());

        let long_subject = TodoItemInput {
            subject: "a".repeat(201),
            body: None,
        };
        assert!(long_subject.validate().is_err());

        let long_body = TodoItemInput {
            subject: "Valid subject".to_string(),
            body: Some("b".repeat(2001)),
        };
        assert!(long_body.validate().is_err());
    }

    #[test]
    fn test_update_applies_present_fields() {
        let mut item = stored_item();
        let update = TodoItemUpdate {
            subject: Some("Buy oat milk".to_string()),
            body: Some("One liter".to_string()),
        };
        update.apply_to(&mut item);
        assert_eq!(item.subject, "Buy oat milk");
        assert_eq!(item.body.as_deref(), Some("One liter"));
    }

    #[test]
    fn test_update_skips_absent_fields() {
        let mut item = stored_item();
        let update = TodoItemUpdate {
            subject: Some("Buy oat milk".to_string()),
            body: None,
        };
        update.apply_to(&mut item);
        assert_eq!(item.subject, "Buy oat milk");
        // The omitted body must survive unchanged, not be nulled out.
        assert_eq!(item.body.as_deref(), Some("Two liters"));

        let noop = TodoItemUpdate {
            subject: None,
            body: None,
        };
        noop.apply_to(&mut item);
        assert_eq!(item.subject, "Buy oat milk");
        assert_eq!(item.body.as_deref(), Some("Two liters"));
    }

    #[test]
    fn test_page_defaults() {
        let page = Page {
            skip: None,
            limit: None,
        };
        assert_eq!(page.skip(), 0);
        assert_eq!(page.limit(), 10);

        let page = Page {
            skip: Some(20),
            limit: Some(5),
        };
        assert_eq!(page.skip(), 20);
        assert_eq!(page.limit(), 5);
    }
}
