//! Callback-style transport.
//!
//! Mirrors the shape of an XMLHttpRequest: open a request, set headers,
//! register `on_load` / `on_error`, then `send`. The request runs on a tokio
//! task and exactly one of the two callbacks fires:
//!
//! ```text
//! send() ──► response received (any status) ──► on_load(XhrResponse)
//!        └─► no response / body unreadable   ──► on_error(reason)
//! ```
//!
//! Status interpretation is left to the `on_load` callback.

use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Url};
use tokio::task::JoinHandle;

type LoadCallback = Box<dyn FnOnce(XhrResponse) + Send + 'static>;
type ErrorCallback = Box<dyn FnOnce(String) + Send + 'static>;

/// A completed response: status code plus the raw body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XhrResponse {
    pub status: u16,
    pub response_text: String,
}

pub struct XhrRequest {
    client: Client,
    method: Method,
    url: Url,
    headers: HeaderMap,
    on_load: Option<LoadCallback>,
    on_error: Option<ErrorCallback>,
}

impl XhrRequest {
    pub fn open(client: &Client, method: Method, url: Url) -> Self {
        Self {
            client: client.clone(),
            method,
            url,
            headers: HeaderMap::new(),
            on_load: None,
            on_error: None,
        }
    }

    pub fn set_request_header(mut self, name: HeaderName, value: &'static str) -> Self {
        self.headers.insert(name, HeaderValue::from_static(value));
        self
    }

    pub fn on_load(mut self, callback: impl FnOnce(XhrResponse) + Send + 'static) -> Self {
        self.on_load = Some(Box::new(callback));
        self
    }

    pub fn on_error(mut self, callback: impl FnOnce(String) + Send + 'static) -> Self {
        self.on_error = Some(Box::new(callback));
        self
    }

    /// Starts the request. Must be called from within a tokio runtime.
    ///
    /// The returned handle completes after whichever callback fired has returned.
    pub fn send(self, body: Option<String>) -> JoinHandle<()> {
        let XhrRequest {
            client,
            method,
            url,
            headers,
            on_load,
            on_error,
        } = self;

        tokio::spawn(async move {
            debug!("xhr: {method} {url}");
            let mut request = client.request(method.clone(), url.clone()).headers(headers);
            if let Some(body) = body {
                request = request.body(body);
            }

            let result = match request.send().await {
                Ok(response) => {
                    let status = response.status().as_u16();
                    response
                        .text()
                        .await
                        .map(|response_text| XhrResponse {
                            status,
                            response_text,
                        })
                        .map_err(|e| format!("reading body of {status} response: {e}"))
                }
                Err(e) => Err(e.to_string()),
            };

            match result {
                Ok(response) => {
                    debug!("xhr: {method} {url} loaded with status {}", response.status);
                    if let Some(callback) = on_load {
                        callback(response);
                    }
                }
                Err(reason) => {
                    warn!("xhr: {method} {url} failed: {reason}");
                    if let Some(callback) = on_error {
                        callback(reason);
                    }
                }
            }
        })
    }
}
