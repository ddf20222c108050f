//! Export workflows
//!
//! Each workflow is one linear run: pick what to fetch, fetch it, write it.
//! Empty result sets are reported and end the run without error.

use crate::api::TrackTraceApi;
use crate::auth::Authenticator;
use crate::config::Settings;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::output::{write_binary, write_csv, CsvOutcome, OutputLayout};
use crate::prompt::{
    prompt_credentials, prompt_manifest_number, select_license, validate_manifest_number,
    Prompter,
};
use crate::resolve::{download_documents, resolve_documents};
use crate::types::{License, Transfer};
use std::path::Path;
use tracing::info;

/// Prompt for credentials, log in, and return an authenticated API client
pub async fn connect(settings: &Settings, prompter: &mut dyn Prompter) -> Result<TrackTraceApi> {
    let credentials = prompt_credentials(prompter, settings)?;

    let config = HttpClientConfig::builder()
        .base_url(&settings.base_url)
        .timeout(settings.timeout())
        .user_agent(&settings.user_agent)
        .build();
    let http = HttpClient::with_config(config)?;

    let token = Authenticator::new(&http).authenticate(&credentials).await?;
    Ok(TrackTraceApi::new(http.with_token(token), settings.page_size))
}

fn report_csv(outcome: CsvOutcome, what: &str, path: &Path) {
    match outcome {
        CsvOutcome::Written { rows } => {
            info!(rows, path = %path.display(), "{what} have been written");
        }
        CsvOutcome::Skipped => info!("No {} found.", what.to_lowercase()),
    }
}

/// Write every license to `licenses_<stamp>.csv`
pub async fn export_licenses(
    api: &TrackTraceApi,
    layout: &OutputLayout,
    stamp: &str,
) -> Result<CsvOutcome> {
    let licenses = api.licenses().await?;
    let path = layout.licenses_csv(stamp);
    let outcome = write_csv(&licenses, &path)?;
    report_csv(outcome, "Licenses", &path);
    Ok(outcome)
}

/// Write every active package of a license to `packages_<stamp>.csv`
pub async fn export_packages(
    api: &TrackTraceApi,
    layout: &OutputLayout,
    stamp: &str,
    license_number: &str,
) -> Result<CsvOutcome> {
    let packages = api.active_packages(license_number).await?;
    let path = layout.packages_csv(stamp);
    let outcome = write_csv(&packages, &path)?;
    report_csv(outcome, "Packages", &path);
    Ok(outcome)
}

/// Use the given license or ask the user to pick one.
///
/// Returns `None` when the account has no licenses.
pub async fn choose_license(
    api: &TrackTraceApi,
    prompter: &mut dyn Prompter,
    license_number: Option<&str>,
) -> Result<Option<String>> {
    if let Some(license_number) = license_number {
        return Ok(Some(license_number.to_string()));
    }

    let licenses = api
        .licenses()
        .await?
        .iter()
        .map(License::from_record)
        .collect::<Result<Vec<_>>>()?;

    if licenses.is_empty() {
        info!("No licenses found.");
        return Ok(None);
    }

    let selected = select_license(prompter, &licenses)?;
    Ok(Some(selected.license_number.clone()))
}

/// Write the outgoing transfers of one license to `transfers_<stamp>.csv`
pub async fn export_transfers(
    api: &TrackTraceApi,
    prompter: &mut dyn Prompter,
    layout: &OutputLayout,
    stamp: &str,
    license_number: Option<&str>,
) -> Result<CsvOutcome> {
    let Some(license_number) = choose_license(api, prompter, license_number).await? else {
        return Ok(CsvOutcome::Skipped);
    };

    let transfers = api.outgoing_transfers(&license_number).await?;
    let path = layout.transfers_csv(stamp);
    let outcome = write_csv(&transfers, &path)?;
    report_csv(outcome, "Transfers", &path);
    Ok(outcome)
}

/// Download the manifest PDF of every outgoing transfer of every license.
///
/// Returns the number of manifests written.
pub async fn download_manifests(api: &TrackTraceApi, layout: &OutputLayout) -> Result<usize> {
    let licenses = api.licenses().await?;
    if licenses.is_empty() {
        info!("No licenses found.");
        return Ok(0);
    }

    let mut written = 0;
    for record in &licenses {
        let license = License::from_record(record)?;
        let transfers = api.outgoing_transfers(&license.license_number).await?;
        info!(
            license = %license.license_number,
            transfers = transfers.len(),
            "Downloading manifests"
        );

        for record in &transfers {
            let transfer = Transfer::from_record(record)?;
            let bytes = api
                .manifest_pdf(&license.license_number, &transfer.manifest_number)
                .await?;
            let path = layout.manifest_pdf(&license.license_number, &transfer.manifest_number);
            write_binary(&bytes, &path)?;
            info!(path = %path.display(), "Downloaded manifest PDF");
            written += 1;
        }
    }

    Ok(written)
}

/// Download every lab result document reachable from one transfer.
///
/// Returns the number of documents written.
pub async fn download_coas(
    api: &TrackTraceApi,
    prompter: &mut dyn Prompter,
    layout: &OutputLayout,
    license_number: Option<&str>,
    manifest_number: Option<&str>,
) -> Result<usize> {
    let Some(license_number) = choose_license(api, prompter, license_number).await? else {
        return Ok(0);
    };

    let manifest_number = match manifest_number {
        Some(manifest) => validate_manifest_number(manifest)?,
        None => prompt_manifest_number(prompter)?,
    };

    let documents = resolve_documents(api, &license_number, &manifest_number).await?;
    if documents.is_empty() {
        info!(manifest = %manifest_number, "No lab result documents found.");
        return Ok(0);
    }

    let written = download_documents(api, &license_number, &documents, layout).await?;
    Ok(written.len())
}
