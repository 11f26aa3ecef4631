//! Vertex AI `:predict` client

use crate::auth::get_vertex_auth;
use crate::error::{Error, Result};
use crate::types::GenerationParameters;
use crate::vertex::VertexConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Anything that turns a prompt into generated text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run one generation request
    async fn predict(&self, prompt: &str, parameters: &GenerationParameters) -> Result<String>;
}

/// Vertex AI text model client using reqwest
pub struct VertexClient {
    client: Client,
    endpoint: String,
    /// `None` means look the token up when a request is made
    token: Option<String>,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    instances: [Instance<'a>; 1],
    parameters: &'a GenerationParameters,
}

#[derive(Serialize)]
struct Instance<'a> {
    prompt: &'a str,
}

#[derive(Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Deserialize)]
struct Prediction {
    content: String,
}

impl VertexClient {
    /// Create a client for the configured project, region and model.
    ///
    /// The access token is resolved per request via [`get_vertex_auth`].
    pub fn new(config: &VertexConfig) -> Result<Self> {
        Self::build(config.predict_url(), None)
    }

    /// Create a client posting to an explicit `:predict` URL with a fixed token
    pub fn with_endpoint(endpoint: String, token: String) -> Result<Self> {
        Self::build(endpoint, Some(token))
    }

    fn build(endpoint: String, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::VertexApi(e.to_string()))?;
        Ok(Self {
            client,
            endpoint,
            token,
        })
    }

    async fn access_token(&self) -> Result<String> {
        if let Some(token) = &self.token {
            return Ok(token.clone());
        }
        let auth = get_vertex_auth().await?;
        debug!(source = ?auth.source, "resolved Vertex AI access token");
        Ok(auth.token)
    }
}

#[async_trait]
impl TextGenerator for VertexClient {
    async fn predict(&self, prompt: &str, parameters: &GenerationParameters) -> Result<String> {
        let request = PredictRequest {
            instances: [Instance { prompt }],
            parameters,
        };

        let token = self.access_token().await?;
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::VertexApi(format!("{status}: {body}")));
        }

        let response: PredictResponse = response.json().await?;
        response
            .predictions
            .into_iter()
            .next()
            .map(|p| p.content)
            .ok_or(Error::EmptyPrediction)
    }
}
