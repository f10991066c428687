//! The remote collection fetcher and write client.
//!
//! One [`SheetClient`] serves all four remote collections. Reads share a
//! single pipeline: fetch the body as text, parse it as JSON, classify
//! the envelope, then normalize the rows into the internal schema. The
//! HTTP status is consulted only when the body failed to classify, so an
//! error envelope on a 200 still fails and a recognized success shape on
//! an odd status still succeeds.

use crate::envelope::{classify, parse_body, Envelope};
use crate::error::{FetchError, FetchResult};
use crate::normalize;
use crate::SheetEndpoints;
use chrono::Utc;
use raktadan_types::{BlogPost, BloodRequest, CampEvent, Donor};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Client for the spreadsheet-backed script endpoints.
pub struct SheetClient {
    endpoints: SheetEndpoints,
    client: Client,
}

impl SheetClient {
    /// Creates a client for the given endpoints.
    #[must_use]
    pub fn new(endpoints: SheetEndpoints) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to create HTTP client");
        Self { endpoints, client }
    }

    /// The configured endpoints.
    #[must_use]
    pub fn endpoints(&self) -> &SheetEndpoints {
        &self.endpoints
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    /// Fetches and normalizes the donor registry, sorted by name.
    pub async fn fetch_donors(&self) -> FetchResult<Vec<Donor>> {
        let rows = self
            .fetch_rows(&self.endpoints.donor_url, Some("getDonors"))
            .await?;
        Ok(normalize::normalize_donors(rows, Utc::now()))
    }

    /// Fetches and normalizes blood requests, newest first.
    pub async fn fetch_blood_requests(&self) -> FetchResult<Vec<BloodRequest>> {
        // The request sheet serves its rows without an action parameter.
        let rows = self.fetch_rows(&self.endpoints.request_url, None).await?;
        Ok(normalize::normalize_requests(rows, Utc::now()))
    }

    /// Fetches and normalizes blog posts, newest first.
    pub async fn fetch_blog_posts(&self) -> FetchResult<Vec<BlogPost>> {
        let rows = self
            .fetch_rows(&self.endpoints.content_url, Some("getBlogPosts"))
            .await?;
        Ok(normalize::normalize_blog_posts(rows, Utc::now()))
    }

    /// Fetches and normalizes camp events, newest first.
    pub async fn fetch_events(&self) -> FetchResult<Vec<CampEvent>> {
        let rows = self
            .fetch_rows(&self.endpoints.content_url, Some("getEvents"))
            .await?;
        Ok(normalize::normalize_events(rows, Utc::now()))
    }

    /// Issues a read and classifies the response body into raw rows.
    async fn fetch_rows(&self, url: &str, action: Option<&str>) -> FetchResult<Vec<Value>> {
        let mut request = self.client.get(url);
        if let Some(action) = action {
            request = request.query(&[("action", action)]);
        }
        debug!(url, ?action, "fetching collection");

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let value = parse_body(&body)?;
        match classify(value) {
            Envelope::Records(rows) => Ok(rows),
            Envelope::Error(message) => Err(FetchError::ServerReported(message)),
            Envelope::Unrecognized if !status.is_success() => Err(FetchError::Http {
                status: status.as_u16(),
            }),
            Envelope::Unrecognized => Err(FetchError::UnrecognizedFormat),
        }
    }
}
