pub mod item;
pub mod user;

pub use item::{Page, TodoItem, TodoItemInput, TodoItemUpdate};
pub use user::{NewUser, User};
