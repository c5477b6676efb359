//! HTTP transport used by the API client
//!
//! The browser build sends requests through `fetch` (via `gloo-net`); native
//! builds use `reqwest`. Tests plug in their own [`Transport`].

use crate::models::{UiError, UiResult};
use async_trait::async_trait;
use std::collections::BTreeMap;

/// HTTP methods supported by the API client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A fully prepared request
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

/// Status and raw body of a completed request
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and waits for the whole response
///
/// Futures are not `Send`: everything runs on the browser main thread.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> UiResult<HttpResponse>;
}

/// `fetch`-backed transport for the browser
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Default)]
pub struct FetchTransport;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> UiResult<HttpResponse> {
        use gloo_net::http::{Method, RequestBuilder};

        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        };

        let mut builder = RequestBuilder::new(&request.url).method(method);
        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| UiError::client(format!("Failed to create request: {}", e)))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| UiError::network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UiError::network(format!("Failed to read response body: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}

/// `reqwest`-backed transport for native builds
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> UiResult<HttpResponse> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| UiError::network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| UiError::network(format!("Failed to read response body: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}

/// Transport for the current target
#[cfg(target_arch = "wasm32")]
pub type DefaultTransport = FetchTransport;
#[cfg(not(target_arch = "wasm32"))]
pub type DefaultTransport = ReqwestTransport;
