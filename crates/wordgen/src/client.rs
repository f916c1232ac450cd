//! HTTP client for text generation services.
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;
use url::Url;

use crate::{GenerationError, WordSource};

const DEFAULT_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";
const DEFAULT_API_KEY_HEADER: &str = "x-goog-api-key";

/// Text generation service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Endpoint that accepts generation requests.
    pub url: Url,

    /// Name of the header carrying the API key.
    pub api_key_header: String,

    /// API key for the service.
    #[serde(skip)]
    pub api_key: Option<SecretString>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            // Constant URL is always valid
            url: DEFAULT_URL.parse().unwrap(),
            api_key_header: DEFAULT_API_KEY_HEADER.to_owned(),
            api_key: None,
        }
    }
}

impl ProviderConfig {
    /// Create a config for an endpoint.
    pub fn new(url: Url) -> Self {
        Self {
            url,
            ..Default::default()
        }
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }
}

/// Client for a `generateContent` style endpoint.
#[derive(Clone)]
pub struct GenerativeClient {
    config: ProviderConfig,
    client: reqwest::Client,
}

impl fmt::Debug for GenerativeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerativeClient")
            .field("url", &self.config.url.as_str())
            .field("api_key", &self.config.api_key.is_some())
            .finish()
    }
}

impl GenerativeClient {
    /// Create a new client.
    pub fn new(
        config: ProviderConfig,
    ) -> std::result::Result<Self, GenerationError> {
        let client = reqwest::ClientBuilder::new().build()?;
        Ok(Self { config, client })
    }

    /// Service configuration.
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

#[async_trait]
impl WordSource for GenerativeClient {
    #[instrument(skip_all, fields(url = %self.config.url))]
    async fn generate_text(
        &self,
        prompt: &str,
    ) -> std::result::Result<String, GenerationError> {
        let body = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let mut request = self.client.post(self.config.url.clone()).json(&body);
        if let Some(api_key) = &self.config.api_key {
            request = request
                .header(&self.config.api_key_header, api_key.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "generate_text::status");
            return Err(GenerationError::ResponseCode(status));
        }

        let response: GenerateResponse = response.json().await?;
        response.into_text().ok_or(GenerationError::MissingText)
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// Text of the first part of the first candidate.
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}
