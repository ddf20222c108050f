//! Pagination types
//!
//! Defines the state and step result shared by the page-number strategy
//! and the fetch loop.

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// More pages may exist; request with these query parameters
    Continue {
        /// Query parameters to add/replace
        query_params: Vec<(String, String)>,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Create a continuation with query parameters
    pub fn with_params(query_params: Vec<(String, String)>) -> Self {
        Self::Continue { query_params }
    }
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Page number of the next request
    pub page: u32,
    /// Total records fetched so far
    pub total_fetched: u64,
    /// Requests issued so far
    pub requests: u32,
}

impl PaginationState {
    /// Create state with a starting page
    pub fn with_page(page: u32) -> Self {
        Self {
            page,
            ..Default::default()
        }
    }

    /// Increment page number
    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Add to total fetched
    pub fn add_fetched(&mut self, count: u64) {
        self.total_fetched += count;
    }

    /// Count an issued request
    pub fn add_request(&mut self) {
        self.requests += 1;
    }
}
