// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::HttpError;

/// Default timeout applied to every request made by [`ReqwestClient`]
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client abstraction for testability
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Fetch the entire response body as bytes
    async fn get_bytes(&self, url: &str) -> Result<Bytes, HttpError>;

    /// Request a URL and return where it ended up after following redirects.
    /// The response body is never read.
    async fn resolve_url(&self, url: &str) -> Result<String, HttpError>;
}

/// Default HTTP client implementation using reqwest
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a new ReqwestClient with the default timeout
    pub fn new() -> Result<Self, HttpError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a new ReqwestClient whose requests give up after `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(HttpError::ClientBuild)?;
        Ok(Self { client })
    }

    /// Create a new ReqwestClient with a custom reqwest::Client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn send(&self, url: &str) -> Result<reqwest::Response, HttpError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HttpError::RequestFailed {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(HttpError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get_bytes(&self, url: &str) -> Result<Bytes, HttpError> {
        self.send(url)
            .await?
            .bytes()
            .await
            .map_err(|e| HttpError::RequestFailed {
                url: url.to_string(),
                source: e,
            })
    }

    async fn resolve_url(&self, url: &str) -> Result<String, HttpError> {
        let response = self.send(url).await?;
        let final_url = response.url().to_string();
        if final_url != url {
            log::debug!("{url} redirected to {final_url}");
        }
        Ok(final_url)
    }
}
