//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: callable operations exposed to clients
//! - **resources**: read-only payloads addressed by URI
//! - **expenses**: the expense record model and its SQLite store

pub mod expenses;
pub mod resources;
pub mod tools;
