//! # HealthLink API
//!
//! actix-web surface of the HealthLink identity backend: request DTOs,
//! error mapping, JWT/CORS/security middleware and route handlers.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, HttpSettings};
pub use routes::AppState;
