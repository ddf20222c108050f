//! Typed access to the Track and Trace v2 endpoints

use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::fetch_all_pages;
use crate::types::{Record, ResultPage};
use serde_json::Value;
use tracing::debug;

/// Endpoint paths
pub mod endpoints {
    pub const LICENSES: &str = "/v2/licenses";
    pub const ACTIVE_PACKAGES: &str = "/v2/packages/active";
    pub const OUTGOING_TRANSFERS: &str = "/v2/transfers/outgoing/active";
    pub const TRANSFER_MANIFEST: &str = "/v2/transfers/manifest";
    pub const TRANSFER_DELIVERIES: &str = "/v2/transfers/deliveries";
    pub const DELIVERY_PACKAGES: &str = "/v2/transfers/packages";
    pub const PACKAGE_LAB_RESULTS: &str = "/v2/packages/labresults";
    pub const LAB_RESULT_DOCUMENT: &str = "/v2/packages/labresults/document";
}

/// Authenticated client for the Track and Trace API
#[derive(Debug)]
pub struct TrackTraceApi {
    http: HttpClient,
    page_size: u32,
}

impl TrackTraceApi {
    /// Wrap an authenticated HTTP client
    pub fn new(http: HttpClient, page_size: u32) -> Self {
        Self { http, page_size }
    }

    /// All licenses visible to the authenticated user
    pub async fn licenses(&self) -> Result<Vec<Record>> {
        let body: Value = self
            .http
            .get_json(endpoints::LICENSES, RequestConfig::new())
            .await?;
        records_from_array(body, endpoints::LICENSES)
    }

    /// Every active package for a license, across all pages
    pub async fn active_packages(&self, license_number: &str) -> Result<Vec<Record>> {
        fetch_all_pages(
            &self.http,
            endpoints::ACTIVE_PACKAGES,
            license_query(license_number),
            self.page_size,
        )
        .await
    }

    /// Every active outgoing transfer for a license, across all pages
    pub async fn outgoing_transfers(&self, license_number: &str) -> Result<Vec<Record>> {
        fetch_all_pages(
            &self.http,
            endpoints::OUTGOING_TRANSFERS,
            license_query(license_number),
            self.page_size,
        )
        .await
    }

    /// Outgoing transfers whose manifest number contains `manifest_number`
    pub async fn find_outgoing_transfers(
        &self,
        license_number: &str,
        manifest_number: &str,
    ) -> Result<Vec<Record>> {
        let request = license_query(license_number)
            .query("filter", format!("manifestNumber__contains:{manifest_number}"));
        self.data(endpoints::OUTGOING_TRANSFERS, request).await
    }

    /// Deliveries (destinations) of a transfer
    pub async fn transfer_deliveries(
        &self,
        license_number: &str,
        manifest_number: &str,
    ) -> Result<Vec<Record>> {
        let request = license_query(license_number).query("manifestNumber", manifest_number);
        self.data(endpoints::TRANSFER_DELIVERIES, request).await
    }

    /// Packages carried by a delivery
    pub async fn delivery_packages(
        &self,
        license_number: &str,
        delivery_id: &str,
    ) -> Result<Vec<Record>> {
        let request = license_query(license_number).query("deliveryId", delivery_id);
        self.data(endpoints::DELIVERY_PACKAGES, request).await
    }

    /// Lab results recorded for a package
    pub async fn package_lab_results(
        &self,
        license_number: &str,
        package_id: &str,
    ) -> Result<Vec<Record>> {
        let request = license_query(license_number).query("packageId", package_id);
        self.data(endpoints::PACKAGE_LAB_RESULTS, request).await
    }

    /// Manifest PDF of a transfer
    pub async fn manifest_pdf(
        &self,
        license_number: &str,
        manifest_number: &str,
    ) -> Result<Vec<u8>> {
        let request = license_query(license_number).query("manifestNumber", manifest_number);
        self.http
            .get_bytes(endpoints::TRANSFER_MANIFEST, request)
            .await
    }

    /// Lab result (COA) PDF
    pub async fn lab_result_document(
        &self,
        license_number: &str,
        document_id: &str,
        package_id: &str,
    ) -> Result<Vec<u8>> {
        let request = license_query(license_number)
            .query("labTestResultDocumentFileId", document_id)
            .query("packageId", package_id);
        self.http
            .get_bytes(endpoints::LAB_RESULT_DOCUMENT, request)
            .await
    }

    /// Single non-paginated GET returning the `data` array
    async fn data(&self, endpoint: &str, request: RequestConfig) -> Result<Vec<Record>> {
        let page: ResultPage = self.http.get_json(endpoint, request).await?;
        debug!(endpoint, records = page.data.len(), "Fetched records");
        Ok(page.data)
    }
}

fn license_query(license_number: &str) -> RequestConfig {
    RequestConfig::new().query("licenseNumber", license_number)
}

/// Accept a bare JSON array of objects, or the `{data: [...]}` envelope
fn records_from_array(body: Value, endpoint: &str) -> Result<Vec<Record>> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(Error::Other(format!(
                    "Unexpected response shape from {endpoint}"
                )))
            }
        },
        _ => {
            return Err(Error::Other(format!(
                "Unexpected response shape from {endpoint}"
            )))
        }
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::Object(map) => Ok(map),
            other => Err(Error::Other(format!(
                "Expected an object in {endpoint}, got {other}"
            ))),
        })
        .collect()
}
