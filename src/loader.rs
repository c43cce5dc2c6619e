//! Record feed loader
//!
//! One GET against the configured endpoint, delivering the whole collection
//! at once. The request can be aborted through a `CancellationToken`; an
//! aborted load is silent and never reported as a failure.

use crate::types::{LoadStatus, ZineRecord};
use eframe::egui;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request aborted")]
    Aborted,
    #[error("no record endpoint configured")]
    NotConfigured,
    #[error("Request failed: {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("invalid record data: {0}")]
    Decode(#[source] reqwest::Error),
}

impl FetchError {
    fn from_body(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FetchError::Decode(e)
        } else {
            FetchError::Network(e)
        }
    }
}

/// Fetch the full record collection.
pub async fn fetch_records(
    client: &reqwest::Client,
    endpoint: &str,
    token: &str,
    cancel: &CancellationToken,
) -> Result<Vec<ZineRecord>, FetchError> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        return Err(FetchError::NotConfigured);
    }

    let mut request = client
        .get(endpoint)
        .header(reqwest::header::CONTENT_TYPE, "application/json");
    if !token.is_empty() {
        request = request.bearer_auth(token);
    }

    let response = tokio::select! {
        biased;
        _ = cancel.cancelled() => return Err(FetchError::Aborted),
        result = request.send() => result.map_err(FetchError::Network)?,
    };

    debug!(status = %response.status(), "Record feed response received");
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status().as_u16()));
    }

    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(FetchError::Aborted),
        body = response.json::<Vec<ZineRecord>>() => body.map_err(FetchError::from_body),
    }
}

/// Run a fetch on `runtime`, publishing the outcome into `status`.
pub fn spawn_load(
    runtime: &tokio::runtime::Runtime,
    endpoint: String,
    token: String,
    status: Arc<Mutex<LoadStatus>>,
    cancel: CancellationToken,
    ctx: egui::Context,
) -> JoinHandle<()> {
    *status.lock().unwrap_or_else(|e| e.into_inner()) = LoadStatus::Loading;
    info!(endpoint = %endpoint, "Fetching zine records");

    runtime.spawn(async move {
        let client = reqwest::Client::new();
        let outcome = fetch_records(&client, &endpoint, &token, &cancel).await;

        let next = match outcome {
            Ok(records) => {
                info!(count = records.len(), "Zine records loaded");
                LoadStatus::Loaded(records)
            }
            Err(FetchError::Aborted) => {
                debug!("Record fetch aborted");
                return;
            }
            Err(e) => {
                error!(error = %e, "Record fetch failed");
                LoadStatus::Failed(e.to_string())
            }
        };

        *status.lock().unwrap_or_else(|e| e.into_inner()) = next;
        ctx.request_repaint();
    })
}
