pub mod axum;
pub mod database;
pub mod error;
