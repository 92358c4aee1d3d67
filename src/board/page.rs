//! Paging and sorting for board listings.
//!
//! A [`PageRequest`] selects one slice of the ordered collection; a [`Page`]
//! carries that slice together with the total element count and derives the
//! remaining metadata (`total_pages`, `is_first`, `is_last`, ...) from it.

use std::fmt;
use std::str::FromStr;

use crate::{NoticeboardError, Result};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            _ => Err(format!("unknown sort direction: {s}")),
        }
    }
}

/// Board attributes a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortProperty {
    Id,
    Title,
    Content,
    Writer,
    CreatedAt,
    UpdatedAt,
}

impl SortProperty {
    /// Column backing this property.
    pub fn column(&self) -> &'static str {
        match self {
            SortProperty::Id => "id",
            SortProperty::Title => "title",
            SortProperty::Content => "content",
            SortProperty::Writer => "writer",
            SortProperty::CreatedAt => "created_at",
            SortProperty::UpdatedAt => "updated_at",
        }
    }

    /// Name used in API requests and responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortProperty::Id => "boardId",
            SortProperty::Title => "title",
            SortProperty::Content => "content",
            SortProperty::Writer => "writer",
            SortProperty::CreatedAt => "createdAt",
            SortProperty::UpdatedAt => "updatedAt",
        }
    }
}

impl fmt::Display for SortProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortProperty {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "id" | "boardId" => Ok(SortProperty::Id),
            "title" => Ok(SortProperty::Title),
            "content" => Ok(SortProperty::Content),
            "writer" => Ok(SortProperty::Writer),
            "createdAt" | "created_at" => Ok(SortProperty::CreatedAt),
            "updatedAt" | "updated_at" => Ok(SortProperty::UpdatedAt),
            _ => Err(format!("unknown sort property: {s}")),
        }
    }
}

/// One ordering criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub property: SortProperty,
    pub direction: Direction,
}

impl Order {
    /// Ascending order on `property`.
    pub fn asc(property: SortProperty) -> Self {
        Self {
            property,
            direction: Direction::Asc,
        }
    }

    /// Descending order on `property`.
    pub fn desc(property: SortProperty) -> Self {
        Self {
            property,
            direction: Direction::Desc,
        }
    }
}

impl FromStr for Order {
    type Err = String;

    /// Parse `property` or `property,direction`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut parts = s.split(',');
        let property = parts.next().unwrap_or_default().parse()?;
        let direction = match parts.next() {
            Some(d) => d.parse()?,
            None => Direction::Asc,
        };
        if parts.next().is_some() {
            return Err(format!("invalid sort expression: {s}"));
        }
        Ok(Self {
            property,
            direction,
        })
    }
}

/// Ordered list of sort criteria. Empty means insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sort {
    orders: Vec<Order>,
}

impl Sort {
    /// No explicit ordering.
    pub fn unsorted() -> Self {
        Self::default()
    }

    /// Sort by the given criteria, in priority order.
    pub fn by(orders: impl IntoIterator<Item = Order>) -> Self {
        Self {
            orders: orders.into_iter().collect(),
        }
    }

    /// Parse request parameters such as `["createdAt,desc", "title"]`.
    ///
    /// Blank entries are ignored. Any unknown property or direction is a
    /// validation error on the `sort` field.
    pub fn parse<S: AsRef<str>>(exprs: &[S]) -> Result<Self> {
        let mut orders = Vec::new();
        for expr in exprs {
            let expr = expr.as_ref();
            if expr.trim().is_empty() {
                continue;
            }
            let order = expr
                .parse::<Order>()
                .map_err(|msg| NoticeboardError::invalid_field("sort", msg))?;
            orders.push(order);
        }
        Ok(Self { orders })
    }

    /// Criteria in priority order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn is_sorted(&self) -> bool {
        !self.orders.is_empty()
    }

    pub fn is_unsorted(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// Request for one page of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
    sort: Sort,
}

impl PageRequest {
    /// Page size used when none is given.
    pub const DEFAULT_SIZE: u32 = 10;

    /// Create a request for the zero-based `page` of `size` items. `size` is at least 1.
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.max(1),
            sort: Sort::unsorted(),
        }
    }

    /// Normalize raw paging input.
    ///
    /// Paging input is never rejected. A negative page reads as 0, a size
    /// below 1 falls back to `default_size` and a size above `max_size` is
    /// clamped.
    pub fn of(page: i64, size: i64, default_size: u32, max_size: u32) -> Self {
        let max_size = max_size.max(1);
        let page = u32::try_from(page.max(0)).unwrap_or(u32::MAX);
        let size = if size < 1 {
            default_size
        } else {
            u32::try_from(size).unwrap_or(u32::MAX)
        };
        Self::new(page, size.min(max_size))
    }

    /// Attach an ordering.
    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    /// Zero-based page index.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Number of items per page.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of items before this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }

    pub fn sort(&self) -> &Sort {
        &self.sort
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_SIZE)
    }
}

/// One page of a larger ordered collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    content: Vec<T>,
    request: PageRequest,
    total_elements: u64,
}

impl<T> Page<T> {
    /// Create a page from its slice, the request that selected it and the total count.
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            request,
            total_elements,
        }
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    pub fn request(&self) -> &PageRequest {
        &self.request
    }

    /// Zero-based index of this page.
    pub fn number(&self) -> u32 {
        self.request.page()
    }

    /// Requested page size.
    pub fn size(&self) -> u32 {
        self.request.size()
    }

    /// Number of items actually on this page.
    pub fn number_of_elements(&self) -> usize {
        self.content.len()
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// `ceil(total_elements / size)`.
    pub fn total_pages(&self) -> u64 {
        self.total_elements.div_ceil(u64::from(self.size()))
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.number()) + 1 < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.number() > 0
    }

    pub fn is_first(&self) -> bool {
        !self.has_previous()
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Convert every item, keeping the paging metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            request: self.request,
            total_elements: self.total_elements,
        }
    }
}
