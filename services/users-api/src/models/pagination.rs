//! Query parameters and metadata for the paged users listing

use common::PageList;
use serde::{Deserialize, Serialize};

const DEFAULT_PAGE_SIZE: i64 = 10;
const MAX_PAGE_SIZE: i64 = 20;

/// Query parameters for `GET /api/users`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersQuery {
    /// Page number (1-based)
    pub page_number: Option<i64>,
    /// Number of items per page
    pub page_size: Option<i64>,
}

impl UsersQuery {
    /// Requested page, at least 1
    pub fn page_number(&self) -> usize {
        usize::try_from(self.page_number.unwrap_or(1).max(1)).unwrap_or(usize::MAX)
    }

    /// Requested page size, clamped to `1..=20`
    pub fn page_size(&self) -> usize {
        // The clamp keeps the value in 1..=20, so the conversion cannot fail.
        usize::try_from(self.page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE))
            .unwrap_or(1)
    }
}

/// Value of the `X-Pagination` response header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationHeader {
    pub previous_page_link: Option<String>,
    pub next_page_link: Option<String>,
    pub total_count: usize,
    pub page_size: usize,
    pub current_page: usize,
    pub total_pages: usize,
}

impl PaginationHeader {
    /// Describe `page`, using `link` to build the URI of a neighbouring page
    pub fn for_page<T>(page: &PageList<T>, link: impl Fn(usize, usize) -> String) -> Self {
        let current = page.current_page();
        let size = page.page_size();

        Self {
            previous_page_link: page.has_previous().then(|| link(current - 1, size)),
            next_page_link: page.has_next().then(|| link(current + 1, size)),
            total_count: page.total_count(),
            page_size: size,
            current_page: current,
            total_pages: page.total_pages(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page_number: Option<i64>, page_size: Option<i64>) -> UsersQuery {
        UsersQuery {
            page_number,
            page_size,
        }
    }

    #[test]
    fn test_defaults() {
        let q = query(None, None);
        assert_eq!(q.page_number(), 1);
        assert_eq!(q.page_size(), 10);
    }

    #[test]
    fn test_clamping() {
        assert_eq!(query(Some(0), None).page_number(), 1);
        assert_eq!(query(Some(-4), None).page_number(), 1);
        assert_eq!(query(None, Some(0)).page_size(), 1);
        assert_eq!(query(None, Some(-3)).page_size(), 1);
        assert_eq!(query(None, Some(50)).page_size(), 20);
        assert_eq!(query(None, Some(20)).page_size(), 20);
    }

    #[test]
    fn test_header_links_follow_page_flags() {
        let source: Vec<u8> = (0..25).collect();
        let link = |n: usize, s: usize| format!("/api/users?pageNumber={n}&pageSize={s}");

        let first = PaginationHeader::for_page(&PageList::from_slice(&source, 1, 10), link);
        assert_eq!(first.previous_page_link, None);
        assert_eq!(
            first.next_page_link.as_deref(),
            Some("/api/users?pageNumber=2&pageSize=10")
        );

        let middle = PaginationHeader::for_page(&PageList::from_slice(&source, 2, 10), link);
        assert_eq!(
            middle.previous_page_link.as_deref(),
            Some("/api/users?pageNumber=1&pageSize=10")
        );
        assert_eq!(
            middle.next_page_link.as_deref(),
            Some("/api/users?pageNumber=3&pageSize=10")
        );
        assert_eq!(middle.total_count, 25);
        assert_eq!(middle.total_pages, 3);
        assert_eq!(middle.current_page, 2);
    }

    #[test]
    fn test_header_serializes_null_links() {
        let source = vec![1];
        let header = PaginationHeader::for_page(&PageList::from_slice(&source, 1, 10), |_, _| {
            String::new()
        });

        assert_eq!(
            serde_json::to_value(header).unwrap(),
            serde_json::json!({
                "previousPageLink": null,
                "nextPageLink": null,
                "totalCount": 1,
                "pageSize": 10,
                "currentPage": 1,
                "totalPages": 1
            })
        );
    }
}
