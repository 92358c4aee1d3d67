//! Noticeboard - a small board posting service.
//!
//! Boards are created, changed, deleted, fetched and listed page by page
//! through a JSON REST API backed by SQLite.

pub mod board;
pub mod config;
pub mod datetime;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use board::{Board, BoardService, BoardUpdate, BoardView, NewBoard, Page, PageRequest, Sort};
pub use config::Config;
pub use db::Database;
pub use error::{FieldErrors, NoticeboardError, Result};
