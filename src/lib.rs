#![doc = "The `todoler` library crate."]
#![doc = ""]
#![doc = "This crate contains the domain models, the credential and task stores,"]
#![doc = "the authentication service (password hashing, token issuance and"]
#![doc = "verification), the request gateway extractor, routing configuration and"]
#![doc = "error handling for the Todoler application. It is used by the main binary"]
#![doc = "(`main.rs`) to construct and run the server."]

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
