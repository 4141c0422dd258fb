//! Persistence operations. `users` is the credential store, `items` the
//! per-user task store; every `items` operation is scoped by the owning
//! user's id.

pub mod items;
pub mod users;
