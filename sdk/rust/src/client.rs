use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shown when a field is empty; no request is sent in that case.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter both numbers.";

#[derive(Debug, Serialize)]
struct SumRequest<'a> {
    a: &'a str,
    b: &'a str,
}

/// Successful `/sumar` response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Addition {
    pub a: f64,
    pub b: f64,
    pub resultado: f64,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

#[derive(Debug, Error)]
pub enum ClientError {
    /// One of the inputs was blank; caught locally.
    #[error("{}", EMPTY_INPUT_MESSAGE)]
    EmptyInput,

    /// The service answered with an error status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The service was unreachable or replied with something unreadable.
    #[error("Connection error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Network(e.to_string())
    }
}

pub struct SumClient {
    client: Client,
    base_url: String,
}

impl SumClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Add two user-typed values on the server.
    ///
    /// Both inputs are trimmed; if either is empty the call fails with
    /// `ClientError::EmptyInput` before touching the network.
    pub async fn submit(&self, a: &str, b: &str) -> Result<Addition, ClientError> {
        let a = a.trim();
        let b = b.trim();
        if a.is_empty() || b.is_empty() {
            return Err(ClientError::EmptyInput);
        }

        let resp = self
            .client
            .post(format!("{}/sumar", self.base_url))
            .json(&SumRequest { a, b })
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            let body: ErrorResponse = serde_json::from_str(&text)
                .map_err(|e| ClientError::Network(e.to_string()))?;
            return Err(ClientError::Server {
                status: status.as_u16(),
                message: body.error.unwrap_or_else(|| "Server error".to_string()),
            });
        }

        serde_json::from_str::<Addition>(&text).map_err(|e| ClientError::Network(e.to_string()))
    }

    /// Fetch the HTML form.
    pub async fn page(&self) -> Result<String, ClientError> {
        let resp = self.client.get(format!("{}/", self.base_url)).send().await?;
        Ok(resp.error_for_status()?.text().await?)
    }
}
