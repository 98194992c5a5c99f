//! sqldns infrastructure: sqlx connection pool and the records table adapter.
pub mod database;
pub mod repositories;
