//! Board module for Noticeboard.
//!
//! This module provides the posted-item functionality:
//! - Board records and validated create/change inputs
//! - Paged, sortable listing
//! - Timezone-aware client projection
//! - Transactional service operations

mod page;
mod repository;
mod service;
mod types;
mod view;

pub use page::{Direction, Order, Page, PageRequest, Sort, SortProperty};
pub use repository::BoardRepository;
pub use service::BoardService;
pub use types::{Board, BoardUpdate, NewBoard, CONTENT_REQUIRED, TITLE_REQUIRED, WRITER_REQUIRED};
pub use view::BoardView;
