//! Blocking client for the remote events API.

pub mod error;
pub mod wire;

use reqwest::blocking::{Client, Response};
use reqwest::Url;
use std::time::Duration;

pub use error::ApiError;
pub use wire::NewEvent;

use crate::models::event::Event;
use wire::{normalize_events, parse_created, parse_event_list};

/// Thin wrapper over the `/events` endpoints.
///
/// Cloning is cheap and shares the connection pool, so each background
/// request can own its own handle.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    events_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let events_url = Self::events_url(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ApiError::Network(format!("Failed to build HTTP client: {}", err)))?;

        Ok(Self { client, events_url })
    }

    /// `GET <base>/events`, normalized into canonical events
    pub fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        let response = self.client.get(self.events_url.clone()).send()?;
        let body = Self::ok_body(response)?;
        let events = normalize_events(parse_event_list(&body)?);

        log::info!("Fetched {} events from {}", events.len(), self.events_url);
        Ok(events)
    }

    /// `DELETE <base>/events/{id}`; any 2xx counts as success
    pub fn delete_event(&self, id: &str) -> Result<(), ApiError> {
        let url = self.event_url(id)?;
        let response = self.client.delete(url).send()?;
        Self::ok_body(response)?;

        log::info!("Deleted event {}", id);
        Ok(())
    }

    /// `POST <base>/events`, returning the id assigned by the server
    pub fn create_event(&self, event: &NewEvent) -> Result<String, ApiError> {
        event.validate()?;

        let response = self
            .client
            .post(self.events_url.clone())
            .json(event)
            .send()?;
        let body = Self::ok_body(response)?;
        let id = parse_created(&body)?.id();

        log::info!("Created event {} ('{}')", id, event.title);
        Ok(id)
    }

    fn ok_body(response: Response) -> Result<String, ApiError> {
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            log::error!("Events API returned {}: {}", status, body.trim());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }

    fn events_url(base_url: &str) -> Result<Url, ApiError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let url = Url::parse(&format!("{}/events", trimmed))
            .map_err(|err| ApiError::InvalidBaseUrl(format!("{}: {}", base_url, err)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ApiError::InvalidBaseUrl(format!(
                "{}: only http and https are supported",
                base_url
            )));
        }
        Ok(url)
    }

    fn event_url(&self, id: &str) -> Result<Url, ApiError> {
        let mut url = self.events_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.events_url.to_string()))?
            .push(id);
        Ok(url)
    }
}
