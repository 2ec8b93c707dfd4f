//! HTTP implementation of the gateway over reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::gateway::{GatewayError, UserGateway};
use crate::model::{Post, UserProfile};

/// Gateway over a JSONPlaceholder-style REST API.
///
/// Two endpoints are used: `GET {base}/users/{id}` and
/// `GET {base}/posts?userId={id}`. Timeouts come from configuration; the
/// aggregation layer imposes none of its own.
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    /// Build a gateway from API configuration.
    ///
    /// # Errors
    /// Returns the underlying builder error if the HTTP client cannot be
    /// constructed (e.g. TLS backend initialization failure).
    pub fn new(api: &ApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api.connect_timeout_seconds))
            .timeout(Duration::from_secs(api.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: api.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T>(&self, url: String) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
    {
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GatewayError::Server {
                status: status.as_u16(),
                message: server_message(status, resp).await,
            });
        }

        resp.json::<T>()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

/// Prefer the response body as the server's message; fall back to the
/// canonical reason phrase when the body is empty or unreadable.
async fn server_message(status: StatusCode, resp: Response) -> String {
    match resp.text().await {
        Ok(body) if !body.trim().is_empty() => body.trim().to_string(),
        _ => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    }
}

#[async_trait]
impl UserGateway for HttpGateway {
    async fn fetch_user(&self, id: i64) -> Result<UserProfile, GatewayError> {
        self.get_json(format!("{}/users/{}", self.base_url, id)).await
    }

    async fn fetch_posts(&self, user_id: i64) -> Result<Vec<Post>, GatewayError> {
        self.get_json(format!("{}/posts?userId={}", self.base_url, user_id))
            .await
    }
}
