use std::future::Future;

use crate::error::ClientError;

/// What came back from a single GET
#[derive(Debug, Clone, PartialEq, Eq)]
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

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One outbound HTTP GET.
///
/// Implementations report connection, DNS, timeout and body read failures as
/// [`ClientError::Network`]. A non-2xx status is still a response.
pub trait HttpTransport: Send + Sync {
    fn get(&self, url: &str) -> impl Future<Output = Result<HttpResponse, ClientError>> + Send;
}

/// [`HttpTransport`] backed by an async reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build with reqwest's default timeouts
    pub fn new() -> Result<Self, ClientError> {
        let http_client = reqwest::Client::builder()
            .user_agent(format!("yamaha-volume/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http_client })
    }

    /// Use an already configured reqwest client
    pub fn with_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, ClientError> {
        let response = self.http_client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}
