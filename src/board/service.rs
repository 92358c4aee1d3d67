//! Board service for Noticeboard.
//!
//! This module provides the board operations exposed by the API. Writes run
//! inside a transaction; reads use a pooled connection, except for listing
//! where the page slice and the total count must agree.

use chrono_tz::Tz;
use tracing::{debug, info};
use validator::Validate;

use crate::db::Database;
use crate::{NoticeboardError, Result};

use super::page::{Page, PageRequest};
use super::repository::BoardRepository;
use super::types::{BoardUpdate, NewBoard};
use super::view::BoardView;

fn not_found(id: i64) -> NoticeboardError {
    NoticeboardError::NotFound(format!("board {id}"))
}

/// Service for board operations.
pub struct BoardService<'a> {
    db: &'a Database,
    timezone: Tz,
}

impl<'a> BoardService<'a> {
    /// Create a new BoardService rendering timestamps in `timezone`.
    pub fn new(db: &'a Database, timezone: Tz) -> Self {
        Self { db, timezone }
    }

    /// Create a board and return its view.
    pub async fn create(&self, new_board: NewBoard) -> Result<BoardView> {
        new_board.validate()?;

        let mut tx = self.db.begin().await?;
        let board = BoardRepository::new(&mut tx).insert(&new_board).await?;
        tx.commit().await?;

        info!(board_id = board.id(), writer = %board.writer(), "Board created");
        Ok(BoardView::from_board(&board, self.timezone))
    }

    /// Change the title and content of a board and return the updated view.
    ///
    /// Input is validated before the board is looked up, so a blank field on
    /// a missing board is reported as a validation error.
    pub async fn update(&self, id: i64, update: BoardUpdate) -> Result<BoardView> {
        update.validate()?;

        let mut tx = self.db.begin().await?;
        let board = {
            let mut repo = BoardRepository::new(&mut tx);
            let mut board = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
            board.change_title_and_content(update);
            repo.save(&board).await?
        };
        tx.commit().await?;

        info!(board_id = id, "Board updated");
        Ok(BoardView::from_board(&board, self.timezone))
    }

    /// Delete a board.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let mut tx = self.db.begin().await?;
        {
            let mut repo = BoardRepository::new(&mut tx);
            let board = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
            repo.delete(&board).await?;
        }
        tx.commit().await?;

        info!(board_id = id, "Board deleted");
        Ok(())
    }

    /// Get a single board.
    pub async fn find_by_id(&self, id: i64) -> Result<BoardView> {
        debug!(board_id = id, "Loading board");

        let mut conn = self.db.pool().acquire().await?;
        let board = BoardRepository::new(&mut conn)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        Ok(BoardView::from_board(&board, self.timezone))
    }

    /// Get one page of boards.
    pub async fn find_all(&self, request: &PageRequest) -> Result<Page<BoardView>> {
        debug!(
            page = request.page(),
            size = request.size(),
            "Listing boards"
        );

        let mut tx = self.db.begin().await?;
        let (boards, total) = BoardRepository::new(&mut tx).find_page(request).await?;
        tx.commit().await?;

        let tz = self.timezone;
        Ok(Page::new(boards, request.clone(), total).map(|board| BoardView::from_board(&board, tz)))
    }
}
