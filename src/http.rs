//! Shared HTTP transport for the completions API.

use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::constants;
use crate::error::AiError;
use crate::response::ApiErrorResponse;

/// Configuration for the underlying HTTP client.
#[derive(Debug, Clone, Default)]
pub struct HttpConfig {
    /// Optional request timeout. When `None`, requests wait indefinitely.
    pub timeout: Option<Duration>,
}

/// Thin wrapper around `reqwest::Client` that speaks JSON in both directions.
pub(crate) struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: HttpConfig) -> Result<Self, AiError> {
        let mut builder =
            reqwest::Client::builder().user_agent(format!("hens-ai/{}", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            AiError::Configuration(format!("Failed to build reqwest client: {e}"))
        })?;

        Ok(Self { client })
    }

    /// Make a POST request with a JSON body.
    ///
    /// Non-success status codes become [`AiError::Api`] carrying the
    /// `error.message` field from the response body when one is present.
    #[tracing::instrument(
        name = "http_post_json",
        skip(self, headers, body),
        fields(url = %url),
        err
    )]
    pub async fn post_json<Req, Res>(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &Req,
    ) -> Result<Res, AiError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let mut req_builder = self.client.post(url).json(body);

        for (name, value) in headers {
            req_builder = req_builder.header(name, value);
        }

        let res = req_builder.send().await.map_err(|e| AiError::Network {
            message: format!("Request failed: {e}"),
            source: Box::new(e),
        })?;

        let status = res.status();

        if status.is_success() {
            debug!(status = %status, "HTTP request successful");

            let response_text = res.text().await.map_err(|e| AiError::Parse {
                message: "Failed to read response body".to_string(),
                source: Box::new(e),
            })?;

            return serde_json::from_str(&response_text).map_err(|e| AiError::Parse {
                message: "Failed to parse API response".to_string(),
                source: Box::new(e),
            });
        }

        warn!(status = %status, "API returned error status");

        let error_text = res.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorResponse>(&error_text)
            .ok()
            .and_then(|body| body.error)
            .and_then(|error| error.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| constants::GENERIC_FAILURE_MESSAGE.to_string());

        Err(AiError::Api {
            message,
            status_code: Some(status.as_u16()),
        })
    }
}
