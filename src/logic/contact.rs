// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Delivery of contact form submissions to a remote form-collection endpoint.
//!
//! Responsibilities:
//! - POST the JSON payload with JSON content negotiation headers.
//! - Treat any 2xx as delivered; everything else, including transport
//!   failures, is an error carrying context for the log.

use anyhow::{Context, Result, bail};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use url::Url;

use crate::models::contact::ContactPayload;

/// Build the HTTP client used for form delivery.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("build reqwest client")
}

/// POST `payload` to `endpoint` and succeed only on a 2xx response.
///
/// No timeout or retry is applied beyond the client's defaults.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success status.
pub fn deliver(client: &Client, endpoint: &Url, payload: &ContactPayload) -> Result<()> {
    let resp = client
        .post(endpoint.clone())
        .header(ACCEPT, "application/json")
        .json(payload)
        .send()
        .with_context(|| format!("POST {}", endpoint))?;

    let status = resp.status();
    if !status.is_success() {
        bail!("POST {} failed with status {}", endpoint, status);
    }
    Ok(())
}
