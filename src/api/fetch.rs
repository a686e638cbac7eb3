//! Promise-style transport.
//!
//! A request is a future that resolves to either the decoded body or an
//! [`ActionError`]. Non-success statuses are classified here; everything else
//! that goes wrong (no response, body unreadable, body not the expected JSON)
//! collapses into a `Network` error carrying the caller's fallback message.

use log::{debug, warn};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use super::error::{ActionError, StatusMessages};

/// Sends `request` and decodes a 2xx JSON body as `T`.
pub async fn fetch_json<T: DeserializeOwned>(
    request: RequestBuilder,
    messages: &StatusMessages,
) -> Result<T, ActionError> {
    let response = request.send().await.map_err(|e| {
        warn!("fetch: request failed before a response arrived: {e}");
        ActionError::network(messages.transport)
    })?;

    let status = response.status();
    debug!("fetch: {} answered {}", response.url(), status);

    if !status.is_success() {
        return Err(ActionError::from_status(status.as_u16(), messages));
    }

    response.json::<T>().await.map_err(|e| {
        warn!("fetch: could not decode {status} response body: {e}");
        ActionError::network(messages.transport)
    })
}
