use std::time::Instant;

use reqwest::blocking::Client;
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

use crate::models::{ChartEntry, ChartResponse, ErrorBody, SearchRequest, SearchResponse, SearchResult};

/// Validation message for an empty or whitespace-only query. Shared with the
/// renderer so the displayed text cannot drift from the error's display form.
pub const EMPTY_QUERY_TEXT: &str = "Please enter a search query.";

/// Client-side failure classes. Validation never reaches the network; soft
/// failure means a structurally valid response that carried no data.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{}", EMPTY_QUERY_TEXT)]
    EmptyQuery,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("chart response did not contain any items")]
    MissingItems,
    #[error("invalid endpoint URL: {0}")]
    Endpoint(#[from] url::ParseError),
}

impl ClientError {
    /// Whether the failure is a user-input or soft outcome rather than a
    /// transport/application error.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, ClientError::EmptyQuery | ClientError::MissingItems)
    }
}

/// Trim a raw query, rejecting empty and whitespace-only input before any
/// request is issued.
pub fn validate_query(raw: &str) -> Result<&str, ClientError> {
    let query = raw.trim();
    if query.is_empty() {
        Err(ClientError::EmptyQuery)
    } else {
        Ok(query)
    }
}

/// Extract the display message for a non-2xx response: prefer the payload's
/// `message`, then `error`, then the generic status fallback. Empty strings
/// fall through like missing fields.
fn api_error_message(status: u16, body: &[u8]) -> String {
    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        if let Some(message) = parsed.message.filter(|m| !m.is_empty()) {
            return message;
        }
        if let Some(error) = parsed.error.filter(|e| !e.is_empty()) {
            return error;
        }
    }
    format!("HTTP error! status: {status}")
}

/// Blocking HTTP client for the two backend endpoints.
pub struct ApiClient {
    base: Url,
    http: Client,
}

impl ApiClient {
    pub fn new(base: Url) -> Self {
        Self {
            base,
            http: Client::new(),
        }
    }

    /// Dispatch a blog search. The trimmed query goes out as a JSON body
    /// `{"query": …}`; the decoded `items` list comes back on success.
    pub fn search(&self, raw_query: &str) -> Result<Vec<SearchResult>, ClientError> {
        let query = validate_query(raw_query)?;
        let endpoint = self.base.join("/search")?;

        let start_time = Instant::now();
        info!(
            action = "start",
            component = "blog_search",
            query = query,
            "Dispatching blog search"
        );

        let response = self.http.post(endpoint).json(&SearchRequest { query }).send()?;
        let status = response.status();

        if !status.is_success() {
            let body = response.bytes().map(|b| b.to_vec()).unwrap_or_default();
            let message = api_error_message(status.as_u16(), &body);
            warn!(
                action = "fail",
                component = "blog_search",
                status = status.as_u16(),
                display_message = %message,
                "Blog search returned an error"
            );
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: SearchResponse = response.json()?;
        info!(
            action = "complete",
            component = "blog_search",
            item_count = body.items.len(),
            duration_ms = start_time.elapsed().as_millis(),
            "Blog search completed"
        );
        Ok(body.items)
    }

    /// Fetch the cached music chart. A response without `items` is reported
    /// as [`ClientError::MissingItems`] rather than a transport error.
    pub fn chart(&self) -> Result<Vec<ChartEntry>, ClientError> {
        let endpoint = self.base.join("/melon")?;

        let start_time = Instant::now();
        info!(
            action = "start",
            component = "chart_fetch",
            "Fetching music chart"
        );

        let response = self.http.get(endpoint).send()?;
        let status = response.status();

        if !status.is_success() {
            let body = response.bytes().map(|b| b.to_vec()).unwrap_or_default();
            let message = api_error_message(status.as_u16(), &body);
            warn!(
                action = "fail",
                component = "chart_fetch",
                status = status.as_u16(),
                display_message = %message,
                "Chart fetch returned an error"
            );
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ChartResponse = response.json()?;
        match body.items {
            Some(items) => {
                info!(
                    action = "complete",
                    component = "chart_fetch",
                    item_count = items.len(),
                    duration_ms = start_time.elapsed().as_millis(),
                    "Chart fetch completed"
                );
                Ok(items)
            }
            None => {
                warn!(
                    action = "fail",
                    component = "chart_fetch",
                    "Chart response carried no items"
                );
                Err(ClientError::MissingItems)
            }
        }
    }
}
