//! Client-facing projection of a board.

use chrono::NaiveDateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::types::Board;
use crate::datetime;

/// Board as returned by the API.
///
/// Timestamps are wall-clock time in the service timezone, rendered as
/// `YYYY-MM-DDTHH:mm:ss` with no offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    /// Board ID.
    #[serde(rename = "boardId")]
    pub id: i64,
    pub title: String,
    pub content: String,
    pub writer: String,
    #[serde(with = "crate::datetime::view_format")]
    #[schema(value_type = String, example = "2024-01-01T09:30:00")]
    pub created_at: NaiveDateTime,
    #[serde(with = "crate::datetime::view_format")]
    #[schema(value_type = String, example = "2024-01-01T09:30:00")]
    pub updated_at: NaiveDateTime,
}

impl BoardView {
    /// Project a board into `tz`.
    pub fn from_board(board: &Board, tz: Tz) -> Self {
        Self {
            id: board.id(),
            title: board.title().to_string(),
            content: board.content().to_string(),
            writer: board.writer().to_string(),
            created_at: datetime::to_local(&board.created_at(), tz),
            updated_at: datetime::to_local(&board.updated_at(), tz),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn board_at(created: chrono::DateTime<Utc>, updated: chrono::DateTime<Utc>) -> Board {
        Board {
            id: 7,
            title: "Hello".to_string(),
            content: "World".to_string(),
            writer: "Ann".to_string(),
            created_at: created,
            updated_at: updated,
        }
    }

    #[test]
    fn test_from_board_in_seoul() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 30, 15).unwrap()
            + chrono::Duration::microseconds(123_456);
        let updated = Utc.with_ymd_and_hms(2024, 1, 1, 15, 0, 0).unwrap();
        let view = BoardView::from_board(&board_at(created, updated), chrono_tz::Asia::Seoul);

        assert_eq!(view.id, 7);
        assert_eq!(view.writer, "Ann");
        assert_eq!(view.created_at.to_string(), "2024-01-01 09:30:15");
        assert_eq!(view.updated_at.to_string(), "2024-01-02 00:00:00");
    }

    #[test]
    fn test_json_shape() {
        let created = Utc.with_ymd_and_hms(2024, 3, 5, 1, 2, 3).unwrap();
        let view = BoardView::from_board(&board_at(created, created), chrono_tz::UTC);
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["boardId"], 7);
        assert_eq!(json["title"], "Hello");
        assert_eq!(json["content"], "World");
        assert_eq!(json["writer"], "Ann");
        assert_eq!(json["createdAt"], "2024-03-05T01:02:03");
        assert_eq!(json["updatedAt"], "2024-03-05T01:02:03");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_deserialize() {
        let view: BoardView = serde_json::from_str(
            r#"{"boardId":1,"title":"t","content":"c","writer":"w",
                "createdAt":"2024-01-01T00:00:00","updatedAt":"2024-01-01T00:00:01"}"#,
        )
        .unwrap();
        assert_eq!(view.id, 1);
        assert!(view.updated_at > view.created_at);
    }
}
