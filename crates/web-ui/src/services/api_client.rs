//! API client with request interceptors and bearer-token injection

use crate::models::{UiError, UiResult};
use crate::services::config::ApiConfig;
use crate::services::session::Session;
use crate::services::transport::{DefaultTransport, HttpMethod, HttpRequest, HttpResponse, Transport};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Request configuration for API calls
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub method: HttpMethod,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
    pub require_auth: bool,
}

impl RequestConfig {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: BTreeMap::new(),
            body: None,
            require_auth: true,
        }
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn with_json_body<T: Serialize>(mut self, data: &T) -> UiResult<Self> {
        let json_data = serde_json::to_string(data)
            .map_err(|e| UiError::client(format!("Failed to serialize request body: {}", e)))?;
        self.body = Some(json_data);
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        Ok(self)
    }

    pub fn without_auth(mut self) -> Self {
        self.require_auth = false;
        self
    }

    fn into_request(self) -> HttpRequest {
        HttpRequest {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

/// Request interceptor trait for modifying requests before sending
pub trait RequestInterceptor {
    fn intercept(&self, config: &mut RequestConfig) -> UiResult<()>;
}

/// Adds the session's bearer token; fails before sending when there is none
pub struct AuthInterceptor {
    session: Session,
}

impl AuthInterceptor {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl RequestInterceptor for AuthInterceptor {
    fn intercept(&self, config: &mut RequestConfig) -> UiResult<()> {
        if config.require_auth {
            match self.session.token()? {
                Some(token) => {
                    config
                        .headers
                        .insert("Authorization".to_string(), format!("Bearer {}", token));
                }
                None => return Err(UiError::auth("No authentication token available")),
            }
        }
        Ok(())
    }
}

/// Map a non-success response to an error, preferring the backend's message
pub fn check_response(response: &HttpResponse) -> UiResult<()> {
    if response.is_success() {
        return Ok(());
    }

    let status = response.status;
    let message = backend_message(&response.body).unwrap_or_else(|| format!("HTTP {}", status));

    Err(match status {
        401 => UiError::auth(message),
        403 => UiError::permission(message),
        422 => UiError::validation(message),
        _ => UiError::api_with_status(message, status),
    })
}

/// `{"error": "..."}` or `{"message": "..."}` bodies
fn backend_message(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    json.get("error")
        .or_else(|| json.get("message"))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

/// Main API client
#[derive(Clone)]
pub struct ApiClient {
    api_root: String,
    session: Session,
    transport: Rc<dyn Transport>,
    request_interceptors: Rc<Vec<Box<dyn RequestInterceptor>>>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.api_root == other.api_root && Rc::ptr_eq(&self.transport, &other.transport)
    }
}

impl ApiClient {
    /// Create a client with the default auth interceptor
    pub fn new(config: &ApiConfig, session: Session, transport: Rc<dyn Transport>) -> Self {
        let interceptors: Vec<Box<dyn RequestInterceptor>> =
            vec![Box::new(AuthInterceptor::new(session.clone()))];
        Self {
            api_root: config.api_root(),
            session,
            transport,
            request_interceptors: Rc::new(interceptors),
        }
    }

    /// Client for the current target's HTTP stack
    pub fn for_browser(config: &ApiConfig, session: Session) -> Self {
        Self::new(config, session, Rc::new(DefaultTransport::default()))
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_root, path)
    }

    /// Execute a custom request configuration
    ///
    /// Requests are sent once; failures are returned to the caller, never retried.
    pub async fn execute_request(&self, mut config: RequestConfig) -> UiResult<HttpResponse> {
        for interceptor in self.request_interceptors.iter() {
            interceptor.intercept(&mut config)?;
        }

        let method = config.method;
        let url = config.url.clone();
        tracing::debug!(method = method.as_str(), %url, "sending request");

        let response = self.transport.send(config.into_request()).await?;
        if let Err(e) = check_response(&response) {
            tracing::warn!(method = method.as_str(), %url, status = response.status, error = %e, "request failed");
            return Err(e);
        }
        Ok(response)
    }

    fn parse_json<T: DeserializeOwned>(response: &HttpResponse) -> UiResult<T> {
        serde_json::from_str(&response.body).map_err(UiError::from)
    }

    /// GET with JSON response parsing
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> UiResult<T> {
        let config = RequestConfig::new(HttpMethod::Get, self.url(path));
        let response = self.execute_request(config).await?;
        Self::parse_json(&response)
    }

    /// GET without a bearer token
    pub async fn get_public_json<T: DeserializeOwned>(&self, path: &str) -> UiResult<T> {
        let config = RequestConfig::new(HttpMethod::Get, self.url(path)).without_auth();
        let response = self.execute_request(config).await?;
        Self::parse_json(&response)
    }

    /// POST with JSON body and response
    pub async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        data: &B,
        require_auth: bool,
    ) -> UiResult<R> {
        let mut config = RequestConfig::new(HttpMethod::Post, self.url(path)).with_json_body(data)?;
        config.require_auth = require_auth;
        let response = self.execute_request(config).await?;
        Self::parse_json(&response)
    }

    /// PUT with JSON body and response
    pub async fn put_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        data: &B,
    ) -> UiResult<R> {
        let config = RequestConfig::new(HttpMethod::Put, self.url(path)).with_json_body(data)?;
        let response = self.execute_request(config).await?;
        Self::parse_json(&response)
    }

    /// DELETE, ignoring any response body
    pub async fn delete(&self, path: &str) -> UiResult<()> {
        let config = RequestConfig::new(HttpMethod::Delete, self.url(path));
        self.execute_request(config).await?;
        Ok(())
    }
}
