//! The generic fetch helper.
//!
//! # Design
//! A fetch is three steps: `build_request` turns a URL and `FetchOptions` into
//! an `HttpRequest`, the `Transport` executes it, and `parse_response` turns
//! the buffered `HttpResponse` into a `Payload`. Only the middle step does
//! I/O, so both ends are tested without a network.
//!
//! Every failure is returned as a `FetchError`; nothing escapes as a panic.
//! Errors are logged once, at the point where `fetch_data` returns them.

use serde::de::DeserializeOwned;

use crate::error::FetchError;
use crate::http::{FetchOptions, HttpRequest, HttpResponse};
use crate::transport::{ReqwestTransport, Transport};

/// A successfully decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Body of a response whose content-type mentions `application/json`.
    Json(serde_json::Value),
    /// Any other body, as received.
    Text(String),
}

impl Payload {
    pub fn is_json(&self) -> bool {
        matches!(self, Payload::Json(_))
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(text) => Some(text),
            Payload::Json(_) => None,
        }
    }

    /// Decode a JSON payload into a typed record.
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T, FetchError> {
        match self {
            Payload::Json(value) => {
                serde_json::from_value(value).map_err(|e| FetchError::Parse(e.to_string()))
            }
            Payload::Text(_) => Err(FetchError::Parse(
                "expected a JSON payload, got text".to_string(),
            )),
        }
    }
}

const JSON_CONTENT_TYPE: &str = "application/json";

pub fn build_request(url: &str, options: &FetchOptions) -> HttpRequest {
    HttpRequest {
        method: options.method,
        url: url.to_string(),
        headers: options.headers.clone(),
        body: options.body.clone(),
    }
}

/// Interpret a buffered response: status first, then content negotiation.
pub fn parse_response(response: HttpResponse) -> Result<Payload, FetchError> {
    if !response.is_success() {
        return Err(FetchError::HttpStatus {
            status: response.status,
            status_text: response.status_text,
        });
    }

    let is_json = response
        .header("content-type")
        .is_some_and(|ct| ct.contains(JSON_CONTENT_TYPE));
    if !is_json {
        return Ok(Payload::Text(response.body));
    }

    serde_json::from_str(&response.body)
        .map(Payload::Json)
        .map_err(|e| FetchError::Parse(e.to_string()))
}

/// Issues requests through a `Transport` and normalizes the outcome.
///
/// Holds no state besides the transport, so one `Fetcher` can serve any
/// number of concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct Fetcher<T = ReqwestTransport> {
    transport: T,
}

impl Fetcher<ReqwestTransport> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Transport> Fetcher<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// One best-effort request: no retries, no timeout of its own.
    pub async fn fetch_data(&self, url: &str, options: FetchOptions) -> Result<Payload, FetchError> {
        self.fetch_request(build_request(url, &options)).await
    }

    /// Like `fetch_data`, for a request that is already built.
    pub async fn fetch_request(&self, request: HttpRequest) -> Result<Payload, FetchError> {
        log::debug!("{} {}", request.method, request.url);
        let url = request.url.clone();

        let result = match self.transport.execute(request).await {
            Ok(response) => parse_response(response),
            Err(e) => Err(e.into()),
        };

        match &result {
            Ok(payload) => log::debug!("{url}: received {} payload", payload_kind(payload)),
            Err(e) => log::error!("{e}"),
        }
        result
    }

    /// `fetch_data` followed by decoding the JSON payload into `R`.
    pub async fn fetch_json<R: DeserializeOwned>(
        &self,
        url: &str,
        options: FetchOptions,
    ) -> Result<R, FetchError> {
        self.fetch_request_json(build_request(url, &options)).await
    }

    pub async fn fetch_request_json<R: DeserializeOwned>(
        &self,
        request: HttpRequest,
    ) -> Result<R, FetchError> {
        let payload = self.fetch_request(request).await?;
        payload.deserialize().inspect_err(|e| log::error!("{e}"))
    }
}

fn payload_kind(payload: &Payload) -> &'static str {
    match payload {
        Payload::Json(_) => "json",
        Payload::Text(_) => "text",
    }
}
