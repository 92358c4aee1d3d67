//! Web API module for Noticeboard.
//!
//! This module exposes the board operations as a JSON REST API, together
//! with a liveness check and the generated OpenAPI document.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use router::{create_health_router, create_router, create_swagger_router, ApiDoc};
pub use server::WebServer;
