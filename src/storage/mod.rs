//! Storage layer over SQLite.
//!
//! - `models`: row structs
//! - `schema`: connection manager and idempotent DDL
//! - `queries`: conflict-safe writes and the read-backs used by tests
//!   and summaries

pub mod models;
pub mod queries;
pub mod schema;


pub use models::*;
pub use schema::HarvestDatabase;
