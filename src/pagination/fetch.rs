//! Paginated fetch loop

use super::paginator::PageNumberPaginator;
use super::types::NextPage;
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::types::{Record, ResultPage};
use tracing::debug;

/// Fetch every page of `endpoint` and concatenate the records.
///
/// `request` carries the caller's query parameters; `page` and `pageSize`
/// are merged on top of them for each request. Records come back in
/// page-then-within-page order. Any failed request aborts the whole fetch
/// and nothing accumulated so far is returned.
pub async fn fetch_all_pages(
    client: &HttpClient,
    endpoint: &str,
    request: RequestConfig,
    page_size: u32,
) -> Result<Vec<Record>> {
    let paginator = PageNumberPaginator::new(page_size);
    let mut state = paginator.start();
    let mut params = paginator.params(&state);
    let mut records = Vec::new();

    loop {
        let page_request = request.clone().queries(params);
        let page: ResultPage = client.get_json(endpoint, page_request).await?;
        debug!(endpoint, page = state.page, records = page.data.len(), "Fetched page");

        let count = page.data.len();
        records.extend(page.data);

        match paginator.process_page(count, &mut state) {
            NextPage::Continue { query_params } => params = query_params,
            NextPage::Done => break,
        }
    }

    debug!(
        endpoint,
        requests = state.requests,
        total = state.total_fetched,
        "Pagination complete"
    );
    Ok(records)
}
