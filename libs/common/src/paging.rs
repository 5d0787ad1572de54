//! Page windows over an ordered collection
//!
//! A [`PageList`] is a contiguous slice of an insertion-ordered collection,
//! selected by a 1-based page number and a page size, together with the
//! metadata a client needs to walk the remaining pages.

/// One page of items plus the metadata describing the whole collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageList<T> {
    items: Vec<T>,
    current_page: usize,
    page_size: usize,
    total_count: usize,
    total_pages: usize,
}

impl<T: Clone> PageList<T> {
    /// Cut the window for `page_number` out of `source`.
    ///
    /// `page_number` is 1-based. A page size of zero is treated as one. A
    /// page past the end yields no items but still reports the real totals.
    pub fn from_slice(source: &[T], page_number: usize, page_size: usize) -> Self {
        let page_number = page_number.max(1);
        let page_size = page_size.max(1);
        let total_count = source.len();

        let items = source
            .iter()
            .skip((page_number - 1).saturating_mul(page_size))
            .take(page_size)
            .cloned()
            .collect();

        Self {
            items,
            current_page: page_number,
            page_size,
            total_count,
            total_pages: total_count.div_ceil(page_size),
        }
    }
}

impl<T> PageList<T> {
    /// Items of this page in collection order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of items in the whole collection
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
