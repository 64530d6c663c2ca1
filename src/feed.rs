use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::booking::{EventsPayload, PayloadError};

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("request to booking backend failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Payload(#[from] PayloadError),
    #[error("booking backend answered with status {0}")]
    Status(StatusCode),
}

/// Read-only client for the booking backend.
pub struct Feed {
    client: Client,
    base_url: String,
}

pub struct EventsResponse {
    pub status: StatusCode,
    pub payload: EventsPayload,
}

impl Feed {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// One `GET {base}/events`. The body is decoded whatever the status
    /// code says; the caller decides what a non-200 means.
    pub async fn events(&self) -> Result<EventsResponse, FeedError> {
        let response = self
            .client
            .get(format!("{}/events", self.base_url))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        let payload = response.json().await?;

        Ok(EventsResponse { status, payload })
    }
}
