// src/lib.rs
pub mod config;
pub mod database;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod views;

pub use error::{AppError, Result};
pub use routes::build_app;
pub use state::AppState;
