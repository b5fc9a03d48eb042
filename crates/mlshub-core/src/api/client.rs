//! Network service for fetching and decoding remote resources.
//!
//! `NetworkService` builds a request from an [`Endpoint`], hands it to an
//! [`HttpTransport`] and decodes the body into whatever shape the caller
//! asks for. It makes exactly one attempt per call.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Request};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{Endpoint, NetworkError};

/// Maximum length of a response body echoed into logs
const MAX_LOGGED_BODY_LENGTH: usize = 200;

/// Status line and body of a completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Executes built requests. Implemented by [`ReqwestTransport`] in
/// production and by stubs in tests.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: Request) -> Result<RawResponse, NetworkError>;
}

/// Transport backed by a shared `reqwest::Client` with its default timeout.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: Request) -> Result<RawResponse, NetworkError> {
        let url = request.url().to_string();
        let response = self.client.execute(request).await?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| NetworkError::InvalidResponse(format!("{}: {}", url, e)))?;

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}

#[derive(Clone)]
pub struct NetworkService {
    transport: Arc<dyn HttpTransport>,
}

impl NetworkService {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Fetch an endpoint and decode its JSON body as `T`.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &dyn Endpoint,
    ) -> Result<T, NetworkError> {
        let request = endpoint.make_request()?;
        debug!(method = %request.method(), url = %request.url(), "Sending request");

        let response = self.transport.execute(request).await?;

        if response.status != 200 {
            warn!(
                status = response.status,
                body = %truncate_body(&response.body),
                "Unexpected response status"
            );
            return Err(NetworkError::from_status(response.status));
        }

        debug!(bytes = response.body.len(), "Response received");
        Ok(serde_json::from_slice(&response.body)?)
    }
}

impl Default for NetworkService {
    fn default() -> Self {
        Self::new(Arc::new(ReqwestTransport::new()))
    }
}

fn truncate_body(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    if text.chars().count() <= MAX_LOGGED_BODY_LENGTH {
        text.into_owned()
    } else {
        let head: String = text.chars().take(MAX_LOGGED_BODY_LENGTH).collect();
        format!("{}... (truncated, {} total bytes)", head, body.len())
    }
}
