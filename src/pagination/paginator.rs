//! Page number pagination
//!
//! The Track and Trace API pages with `?page=N&pageSize=M`, starting at 1.
//! It reports no total count and no cursor: the only way to know the result
//! set is exhausted is to receive a page whose `data` array is empty. A short
//! page is not treated as the last one.

use super::types::{NextPage, PaginationState};

/// Page number paginator
#[derive(Debug, Clone)]
pub struct PageNumberPaginator {
    /// Query parameter name for page number
    pub page_param: String,
    /// Query parameter name for page size
    pub page_size_param: String,
    /// First page number
    pub start_page: u32,
    /// Page size value
    pub page_size: u32,
}

impl PageNumberPaginator {
    /// Create a paginator using `page` / `pageSize` starting at page 1
    pub fn new(page_size: u32) -> Self {
        Self {
            page_param: "page".to_string(),
            page_size_param: "pageSize".to_string(),
            start_page: 1,
            page_size,
        }
    }

    /// State positioned at the first page
    pub fn start(&self) -> PaginationState {
        PaginationState::with_page(self.start_page)
    }

    /// Query parameters for the page the state points at
    pub fn params(&self, state: &PaginationState) -> Vec<(String, String)> {
        vec![
            (self.page_param.clone(), state.page.to_string()),
            (self.page_size_param.clone(), self.page_size.to_string()),
        ]
    }

    /// Record a received page and decide whether to request another
    pub fn process_page(&self, records_count: usize, state: &mut PaginationState) -> NextPage {
        state.add_request();
        state.add_fetched(records_count as u64);

        if records_count == 0 {
            return NextPage::Done;
        }

        state.next_page();
        NextPage::with_params(self.params(state))
    }
}
