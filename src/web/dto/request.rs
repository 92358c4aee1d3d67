//! Request DTOs for Web API.

use serde::{Deserialize, Deserializer};
use utoipa::{IntoParams, ToSchema};

use crate::board::{BoardUpdate, NewBoard, PageRequest, Sort};
use crate::config::PaginationConfig;

/// Read a missing or `null` string field as empty.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Board creation request.
///
/// Missing and `null` fields read as empty strings so they are reported by
/// validation together with blank ones.
#[derive(Debug, Deserialize, ToSchema)]
pub struct BoardCreateRequest {
    /// Board title.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Board content.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    /// Writer name.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub writer: String,
}

impl From<BoardCreateRequest> for NewBoard {
    fn from(req: BoardCreateRequest) -> Self {
        NewBoard::new(req.title, req.content, req.writer)
    }
}

/// Board update request. The writer cannot be changed.
#[derive(Debug, Deserialize, ToSchema)]
pub struct BoardUpdateRequest {
    /// New title.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// New content.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
}

impl From<BoardUpdateRequest> for BoardUpdate {
    fn from(req: BoardUpdateRequest) -> Self {
        BoardUpdate::new(req.title, req.content)
    }
}

/// Paging query parameters.
///
/// `sort` may be repeated: `?sort=createdAt,desc&sort=title`. `page` and
/// `size` are kept raw so unparsable values fall back to their defaults
/// instead of failing the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Zero-based page index (default 0).
    #[param(value_type = Option<i64>)]
    pub page: Option<String>,
    /// Page size (default 10).
    #[param(value_type = Option<i64>)]
    pub size: Option<String>,
    /// Sort orders as `property[,asc|desc]`.
    #[serde(default)]
    pub sort: Vec<String>,
}

fn parse_number(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse().ok())
}

impl PageQuery {
    /// Build the page request. Only an invalid `sort` is an error.
    pub fn to_page_request(&self, paging: PaginationConfig) -> crate::Result<PageRequest> {
        let request = PageRequest::of(
            parse_number(self.page.as_deref()).unwrap_or(0),
            parse_number(self.size.as_deref()).unwrap_or(0),
            paging.default_page_size,
            paging.max_page_size,
        );
        Ok(request.with_sort(Sort::parse(&self.sort)?))
    }
}
