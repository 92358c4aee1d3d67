//! Board model for Noticeboard.
//!
//! This module defines the persisted `Board` record and the validated inputs
//! that create and change it.

use chrono::{DateTime, Utc};
use validator::{Validate, ValidationError};

use crate::datetime;

/// Message for a blank title.
pub const TITLE_REQUIRED: &str = "Board title is required.";

/// Message for blank content.
pub const CONTENT_REQUIRED: &str = "Board content is required.";

/// Message for a blank writer.
pub const WRITER_REQUIRED: &str = "Writer is required.";

fn required(value: &str, code: &'static str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(code).with_message(message.into()));
    }
    Ok(())
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    required(title, "title_required", TITLE_REQUIRED)
}

fn validate_content(content: &str) -> Result<(), ValidationError> {
    required(content, "content_required", CONTENT_REQUIRED)
}

fn validate_writer(writer: &str) -> Result<(), ValidationError> {
    required(writer, "writer_required", WRITER_REQUIRED)
}

/// Board entity representing one posted item.
///
/// Only the repository constructs a `Board`; the only mutation is
/// [`Board::change_title_and_content`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(super) id: i64,
    pub(super) title: String,
    pub(super) content: String,
    pub(super) writer: String,
    pub(super) created_at: DateTime<Utc>,
    pub(super) updated_at: DateTime<Utc>,
}

impl Board {
    /// Unique board ID.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Board title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Board content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Name of the writer. Fixed at creation.
    pub fn writer(&self) -> &str {
        &self.writer
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last modification timestamp.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replace title and content and refresh `updated_at`.
    ///
    /// `updated_at` never moves before `created_at`, even if the wall clock
    /// stepped backwards since creation.
    pub fn change_title_and_content(&mut self, update: BoardUpdate) {
        self.title = update.title;
        self.content = update.content;
        self.updated_at = datetime::now().max(self.created_at);
    }
}

/// Data for creating a new board.
#[derive(Debug, Clone, Validate)]
pub struct NewBoard {
    /// Board title.
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    /// Board content.
    #[validate(custom(function = "validate_content"))]
    pub content: String,
    /// Writer name.
    #[validate(custom(function = "validate_writer"))]
    pub writer: String,
    /// Creation time; also the initial `updated_at`.
    pub created_at: DateTime<Utc>,
}

impl NewBoard {
    /// Create a new board stamped with the current time.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        writer: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            writer: writer.into(),
            created_at: datetime::now(),
        }
    }
}

/// Data for changing an existing board.
#[derive(Debug, Clone, Validate)]
pub struct BoardUpdate {
    /// New title.
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    /// New content.
    #[validate(custom(function = "validate_content"))]
    pub content: String,
}

impl BoardUpdate {
    /// Create an update with required fields.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}
