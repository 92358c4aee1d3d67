//! Board repository for Noticeboard.
//!
//! This module provides CRUD and paged listing for boards. The repository
//! borrows a single connection so that the service decides whether calls run
//! inside a transaction or on a plain pooled connection.

use sqlx::QueryBuilder;

use super::page::PageRequest;
use super::types::{Board, NewBoard};
use crate::datetime;
use crate::db::DbConnection;
use crate::{NoticeboardError, Result};

const SELECT_COLUMNS: &str = "SELECT id, title, content, writer, created_at, updated_at FROM boards";

/// Repository for board records.
pub struct BoardRepository<'c> {
    conn: &'c mut DbConnection,
}

impl<'c> BoardRepository<'c> {
    /// Create a new BoardRepository on the given connection.
    pub fn new(conn: &'c mut DbConnection) -> Self {
        Self { conn }
    }

    /// Insert a new board.
    ///
    /// `updated_at` starts equal to `created_at`. Returns the stored board
    /// with its assigned ID.
    pub async fn insert(&mut self, new_board: &NewBoard) -> Result<Board> {
        let stamp = datetime::to_storage(&new_board.created_at);

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO boards (title, content, writer, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(&new_board.title)
        .bind(&new_board.content)
        .bind(&new_board.writer)
        .bind(&stamp)
        .bind(&stamp)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(Board {
            id,
            title: new_board.title.clone(),
            content: new_board.content.clone(),
            writer: new_board.writer.clone(),
            created_at: new_board.created_at,
            updated_at: new_board.created_at,
        })
    }

    /// Get a board by ID.
    pub async fn find_by_id(&mut self, id: i64) -> Result<Option<Board>> {
        let row: Option<BoardRow> = sqlx::query_as(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        row.map(BoardRow::into_board).transpose()
    }

    /// Persist the mutable fields of an existing board.
    ///
    /// `writer` and `created_at` are never written after insert.
    pub async fn save(&mut self, board: &Board) -> Result<Board> {
        let result = sqlx::query(
            "UPDATE boards SET title = ?, content = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&board.title)
        .bind(&board.content)
        .bind(datetime::to_storage(&board.updated_at))
        .bind(board.id)
        .execute(&mut *self.conn)
        .await?;

        if result.rows_affected() == 0 {
            return Err(NoticeboardError::NotFound(format!("board {}", board.id)));
        }

        Ok(board.clone())
    }

    /// Delete a board.
    pub async fn delete(&mut self, board: &Board) -> Result<()> {
        let result = sqlx::query("DELETE FROM boards WHERE id = ?")
            .bind(board.id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(NoticeboardError::NotFound(format!("board {}", board.id)));
        }

        Ok(())
    }

    /// Count all boards.
    pub async fn count(&mut self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM boards")
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(count as u64)
    }

    /// Load one page of boards and the total number of boards.
    ///
    /// Requested orders are applied first; ties fall back to ascending ID so
    /// the same request always yields the same slice.
    pub async fn find_page(&mut self, request: &PageRequest) -> Result<(Vec<Board>, u64)> {
        let mut query: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new(SELECT_COLUMNS);

        query.push(" ORDER BY ");
        for order in request.sort().orders() {
            query.push(order.property.column());
            query.push(" ");
            query.push(order.direction.as_sql());
            query.push(", ");
        }
        query.push("id ASC");

        query.push(" LIMIT ");
        query.push_bind(i64::from(request.size()));
        query.push(" OFFSET ");
        query.push_bind(i64::try_from(request.offset()).unwrap_or(i64::MAX));

        let rows: Vec<BoardRow> = query
            .build_query_as::<BoardRow>()
            .fetch_all(&mut *self.conn)
            .await?;

        let boards = rows
            .into_iter()
            .map(BoardRow::into_board)
            .collect::<Result<Vec<_>>>()?;

        let total = self.count().await?;

        Ok((boards, total))
    }
}

/// Internal row type for database queries.
#[derive(sqlx::FromRow)]
struct BoardRow {
    id: i64,
    title: String,
    content: String,
    writer: String,
    created_at: String,
    updated_at: String,
}

impl BoardRow {
    fn into_board(self) -> Result<Board> {
        Ok(Board {
            id: self.id,
            title: self.title,
            content: self.content,
            writer: self.writer,
            created_at: datetime::from_storage(&self.created_at)?,
            updated_at: datetime::from_storage(&self.updated_at)?,
        })
    }
}
