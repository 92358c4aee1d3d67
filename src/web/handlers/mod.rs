//! API handlers for the Noticeboard web API.

pub mod board;

pub use board::*;

use std::sync::Arc;

use axum::extract::State;
use chrono_tz::Tz;

use crate::config::PaginationConfig;
use crate::Database;

/// Shared database handle.
pub type SharedDatabase = Arc<Database>;

/// Application state shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database pool.
    pub db: SharedDatabase,
    /// Zone board timestamps are rendered in.
    pub timezone: Tz,
    /// Paging defaults and limits.
    pub pagination: PaginationConfig,
    /// Port reported by the root route.
    pub port: u16,
}

impl AppState {
    /// Create a new application state with default paging.
    pub fn new(db: SharedDatabase, timezone: Tz) -> Self {
        Self {
            db,
            timezone,
            pagination: PaginationConfig::default(),
            port: 0,
        }
    }

    /// Set paging defaults and limits.
    pub fn with_pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = pagination;
        self
    }

    /// Set the port reported by the root route.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

/// GET / - Report the listening port.
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Listening port", body = String)
    )
)]
pub async fn server_port(State(state): State<Arc<AppState>>) -> String {
    state.port.to_string()
}
