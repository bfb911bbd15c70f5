//! Minimal request/response model and the transport seam both REST clients
//! are generic over.
//!
//! Client-side (csr): [`BrowserClient`] performs real requests via
//! `gloo-net`, each raced against a `gloo-timers` timeout.
//! Native builds: [`BrowserClient`] reports [`TransportError::Unavailable`]
//! so the crate compiles and tests without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::TransportError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One outgoing HTTP request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Build a `POST` with a JSON body and matching content headers.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Build`] if `body` cannot be serialized.
    pub fn post_json<T: Serialize>(url: impl Into<String>, body: &T) -> Result<Self, TransportError> {
        let raw = serde_json::to_string(body).map_err(|e| TransportError::Build(e.to_string()))?;
        Ok(Self {
            method: Method::Post,
            url: url.into(),
            headers: vec![
                ("Content-Type".to_owned(), "application/json".to_owned()),
                ("Accept".to_owned(), "application/json".to_owned()),
            ],
            query: Vec::new(),
            body: Some(raw),
        })
    }

    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    #[must_use]
    pub fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_owned(), value.to_string()));
        self
    }

    #[cfg(test)]
    pub(crate) fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    #[cfg(test)]
    pub(crate) fn query_value(&self, name: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }
}

/// A received HTTP response of any status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Pair a status line with the outcome of reading its body. A body that
    /// could not be read counts as no response at all.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Offline`] when `body` is an error.
    pub fn from_body_read<E: std::fmt::Display>(
        status: u16,
        body: Result<String, E>,
    ) -> Result<Self, TransportError> {
        body.map(|body| Self::new(status, body))
            .map_err(|e| TransportError::Offline(e.to_string()))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON, `None` when it is not valid for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Option<T> {
        serde_json::from_str(&self.body).ok()
    }
}

/// Transport used by the auth and weather clients.
///
/// Implementations return `Ok` for every response that arrived, including
/// error statuses; `Err` means no response was received at all.
#[allow(async_fn_in_trait)]
pub trait HttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// `fetch`-backed client used in the browser.
#[derive(Clone, Debug)]
pub struct BrowserClient {
    timeout_ms: u32,
}

impl BrowserClient {
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

impl HttpClient for BrowserClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            use futures::future::{Either, select};
            use gloo_timers::future::TimeoutFuture;

            let mut builder = match request.method {
                Method::Get => gloo_net::http::Request::get(&request.url),
                Method::Post => gloo_net::http::Request::post(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            if !request.query.is_empty() {
                builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            }
            let prepared = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError::Build(e.to_string()))?;

            let exchange = async move {
                let resp = prepared
                    .send()
                    .await
                    .map_err(|e| TransportError::Offline(e.to_string()))?;
                HttpResponse::from_body_read(resp.status(), resp.text().await)
            };

            match select(Box::pin(exchange), Box::pin(TimeoutFuture::new(self.timeout_ms))).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => Err(TransportError::Timeout),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, self.timeout_ms);
            Err(TransportError::Unavailable)
        }
    }
}
