// Event fetcher
// Retrieves one month of events from the backend's `/events/{year}/{month}` endpoint

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use thiserror::Error;

use crate::models::event::CalendarEvent;
use crate::models::view_state::ViewState;

/// Message shown in the grid when events could not be loaded
pub const LOAD_ERROR_MESSAGE: &str = "Error loading events. Check console and backend.";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("invalid events payload: {0}")]
    Parse(String),
}

impl FetchError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::Status(code) => Some(*code),
            FetchError::Network(err) => err.status().map(|status| status.as_u16()),
            FetchError::Parse(_) => None,
        }
    }
}

/// Anything that can hand back a month of events.
#[cfg_attr(test, mockall::automock)]
pub trait EventSource: Send + Sync {
    /// `month0` is zero-based (0 = January)
    fn fetch_events(&self, year: i32, month0: u32) -> Result<Vec<CalendarEvent>, FetchError>;
}

pub struct HttpEventFetcher {
    client: Client,
    base_url: String,
}

impl HttpEventFetcher {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build events HTTP client")?;

        Ok(Self::with_client(client, base_url))
    }

    /// Use a preconfigured client (timeouts, proxies) instead of the default one
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Endpoint for a month; the wire format uses one-based months
    pub fn events_url(&self, year: i32, month0: u32) -> String {
        format!("{}/events/{}/{}", self.base_url, year, month0 + 1)
    }
}

impl EventSource for HttpEventFetcher {
    fn fetch_events(&self, year: i32, month0: u32) -> Result<Vec<CalendarEvent>, FetchError> {
        let url = self.events_url(year, month0);
        log::info!("Fetching events for {}-{} from {}", year, month0 + 1, url);

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text()?;
        let events = parse_events(&body)?;
        log::debug!("Fetched {} events", events.len());
        Ok(events)
    }
}

/// Parse a JSON array of events.
///
/// The body must be an array, but a record that does not fit the event shape
/// is skipped with a warning instead of failing the whole month.
pub fn parse_events(body: &str) -> Result<Vec<CalendarEvent>, FetchError> {
    let records: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    let events = records
        .into_iter()
        .enumerate()
        .filter_map(|(idx, record)| match serde_json::from_value(record) {
            Ok(event) => Some(event),
            Err(err) => {
                log::warn!("Skipping malformed event record #{}: {}", idx, err);
                None
            }
        })
        .collect();
    Ok(events)
}

/// Result of a fetch that never fails outward
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchOutcome {
    pub events: Vec<CalendarEvent>,
    /// User-facing message when the fetch failed
    pub error: Option<String>,
}

/// Fetch events for `view`, turning any failure into an empty list plus an error message.
pub fn fetch_or_empty(source: &dyn EventSource, view: ViewState) -> FetchOutcome {
    match source.fetch_events(view.year(), view.month0()) {
        Ok(events) => FetchOutcome { events, error: None },
        Err(err) => {
            match err.status_code() {
                Some(code) => log::error!(
                    "Error fetching events for {} (HTTP {}): {}",
                    view.title(),
                    code,
                    err
                ),
                None => log::error!("Error fetching events for {}: {}", view.title(), err),
            }
            FetchOutcome {
                events: Vec::new(),
                error: Some(LOAD_ERROR_MESSAGE.to_string()),
            }
        }
    }
}
