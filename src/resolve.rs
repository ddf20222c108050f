//! Lab result document resolution
//!
//! A transfer's COAs are not directly addressable. Reaching them means
//! walking the chain: outgoing transfer → deliveries → delivery packages →
//! package lab results → lab result document id. Every step is a single
//! filtered GET issued in sequence.

use crate::api::TrackTraceApi;
use crate::error::{Error, Result};
use crate::output::{write_binary, OutputLayout};
use crate::types::{Delivery, DocumentRef, LabResult, Package, Transfer};
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Collect every `(packageId, documentId)` pair reachable from a transfer.
///
/// The manifest lookup is a "contains" filter and may match several
/// transfers; the first match is used. Lab results without a document id
/// are skipped. The same pair reached through two deliveries appears once.
pub async fn resolve_documents(
    api: &TrackTraceApi,
    license_number: &str,
    manifest_number: &str,
) -> Result<BTreeSet<DocumentRef>> {
    let matches = api
        .find_outgoing_transfers(license_number, manifest_number)
        .await?;

    let Some(first) = matches.first() else {
        return Err(Error::not_found(format!(
            "No transfer found with manifest number {manifest_number}"
        )));
    };
    if matches.len() > 1 {
        warn!(
            manifest_number,
            matches = matches.len(),
            "Manifest filter matched more than one transfer, using the first"
        );
    }

    let transfer = Transfer::from_record(first)?;
    debug!(manifest = %transfer.manifest_number, "Resolved transfer");

    let deliveries = api
        .transfer_deliveries(license_number, &transfer.manifest_number)
        .await?;

    let mut documents = BTreeSet::new();
    for record in &deliveries {
        let delivery = Delivery::from_record(record)?;
        let packages = api.delivery_packages(license_number, &delivery.id).await?;
        debug!(delivery = %delivery.id, packages = packages.len(), "Fetched delivery packages");

        for record in &packages {
            let package = Package::from_record(record)?;
            let lab_results = api
                .package_lab_results(license_number, &package.package_id)
                .await?;

            for record in &lab_results {
                if let Some(document_id) = LabResult::from_record(record).document_file_id {
                    documents.insert(DocumentRef::new(&package.package_id, document_id));
                }
            }
        }
    }

    info!(
        manifest = %transfer.manifest_number,
        deliveries = deliveries.len(),
        documents = documents.len(),
        "Resolved lab result documents"
    );
    Ok(documents)
}

/// Download each resolved document to its COA path
pub async fn download_documents(
    api: &TrackTraceApi,
    license_number: &str,
    documents: &BTreeSet<DocumentRef>,
    layout: &OutputLayout,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(documents.len());
    for doc in documents {
        let bytes = api
            .lab_result_document(license_number, &doc.document_id, &doc.package_id)
            .await?;
        let path = layout.coa_pdf(&doc.document_id);
        write_binary(&bytes, &path)?;
        info!(path = %path.display(), package = %doc.package_id, "Downloaded COA PDF");
        written.push(path);
    }
    Ok(written)
}
