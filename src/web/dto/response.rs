//! Response DTOs for Web API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::board::{BoardView, Page, Sort};

// ============================================================================
// Paging
// ============================================================================

/// Sort state of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SortInfo {
    /// Whether any order was requested.
    pub sorted: bool,
    /// Whether no order was requested.
    pub unsorted: bool,
    /// Whether the order list is empty.
    pub empty: bool,
}

impl From<&Sort> for SortInfo {
    fn from(sort: &Sort) -> Self {
        Self {
            sorted: sort.is_sorted(),
            unsorted: sort.is_unsorted(),
            empty: sort.is_empty(),
        }
    }
}

/// The request that selected a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageableInfo {
    pub sort: SortInfo,
    /// Number of items before this page.
    pub offset: u64,
    /// Zero-based page index.
    pub page_number: u32,
    /// Requested page size.
    pub page_size: u32,
    pub paged: bool,
    pub unpaged: bool,
}

/// One page of boards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardPageResponse {
    /// Boards on this page.
    pub content: Vec<BoardView>,
    pub pageable: PageableInfo,
    /// Whether this is the last page.
    pub last: bool,
    /// `ceil(totalElements / size)`.
    pub total_pages: u64,
    /// Number of boards across all pages.
    pub total_elements: u64,
    /// Requested page size.
    pub size: u32,
    /// Zero-based page index.
    pub number: u32,
    pub sort: SortInfo,
    /// Number of boards on this page.
    pub number_of_elements: usize,
    /// Whether this is the first page.
    pub first: bool,
    /// Whether this page has no content.
    pub empty: bool,
}

impl From<Page<BoardView>> for BoardPageResponse {
    fn from(page: Page<BoardView>) -> Self {
        let request = page.request();
        let sort = SortInfo::from(request.sort());
        let pageable = PageableInfo {
            sort,
            offset: request.offset(),
            page_number: request.page(),
            page_size: request.size(),
            paged: true,
            unpaged: false,
        };

        Self {
            pageable,
            last: page.is_last(),
            total_pages: page.total_pages(),
            total_elements: page.total_elements(),
            size: page.size(),
            number: page.number(),
            sort,
            number_of_elements: page.number_of_elements(),
            first: page.is_first(),
            empty: page.is_empty(),
            content: page.into_content(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Order, PageRequest, SortProperty};
    use chrono::NaiveDate;

    fn view(id: i64) -> BoardView {
        let at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        BoardView {
            id,
            title: format!("t{id}"),
            content: "c".to_string(),
            writer: "w".to_string(),
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_page_response_shape() {
        let page = Page::new(vec![view(1), view(2)], PageRequest::new(0, 2), 5);
        let json = serde_json::to_value(BoardPageResponse::from(page)).unwrap();

        assert_eq!(json["content"][0]["boardId"], 1);
        assert_eq!(json["content"][1]["createdAt"], "2024-01-01T09:00:00");
        assert_eq!(json["totalElements"], 5);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["size"], 2);
        assert_eq!(json["number"], 0);
        assert_eq!(json["numberOfElements"], 2);
        assert_eq!(json["first"], true);
        assert_eq!(json["last"], false);
        assert_eq!(json["empty"], false);
        assert_eq!(json["pageable"]["pageNumber"], 0);
        assert_eq!(json["pageable"]["pageSize"], 2);
        assert_eq!(json["pageable"]["offset"], 0);
        assert_eq!(json["pageable"]["paged"], true);
        assert_eq!(json["pageable"]["unpaged"], false);
        assert_eq!(json["sort"]["unsorted"], true);
        assert_eq!(json["sort"]["sorted"], false);
        assert_eq!(json["pageable"]["sort"]["empty"], true);
    }

    #[test]
    fn test_page_response_sorted_beyond_last() {
        let request = PageRequest::new(4, 10).with_sort(Sort::by([Order::desc(SortProperty::Title)]));
        let response = BoardPageResponse::from(Page::new(Vec::new(), request, 3));

        assert!(response.content.is_empty());
        assert!(response.empty);
        assert!(response.last);
        assert!(!response.first);
        assert_eq!(response.pageable.offset, 40);
        assert!(response.sort.sorted);
        assert!(!response.sort.empty);
    }
}
