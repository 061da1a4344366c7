use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::providers::TextGenerator;

/// Default public endpoint for the Gemini API
const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Gemini client for interacting with the Google Gemini API
#[derive(Debug)]
pub struct Gemini {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL (optional, defaults to public API)
    endpoint: String,
    /// Model name, embedded in the request URL
    model: String,
}

/// Gemini content generation request
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    /// The conversation contents (a single user turn for this pipeline)
    contents: Vec<GeminiContent>,

    /// Generation parameters
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationParams>,
}

/// One content entry in a Gemini request or response
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiContent {
    /// Content parts, concatenated by the backend
    pub parts: Vec<GeminiPart>,

    /// Role of the content producer (user, model)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// A single text part
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiPart {
    /// The text content
    pub text: String,
}

/// Generation parameters for a request
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Maximum number of tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

/// Gemini response
#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    /// Candidate completions; the first one carries the response text
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

/// A single candidate completion
#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    /// The generated content
    pub content: GeminiContent,
}

impl GeminiRequest {
    /// Create a request carrying a single user prompt
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.into(),
                }],
                role: Some("user".to_string()),
            }],
            generation_config: None,
        }
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.generation_config
            .get_or_insert_with(GenerationParams::default)
            .temperature = Some(temperature);
        self
    }

    /// Set the maximum number of output tokens
    pub fn max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.generation_config
            .get_or_insert_with(GenerationParams::default)
            .max_output_tokens = Some(max_output_tokens);
        self
    }
}

impl Gemini {
    /// Create a new Gemini client with the default timeout
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new_with_config(api_key, model, "", 120)
    }

    /// Create a new Gemini client with endpoint and timeout configuration
    ///
    /// An empty endpoint selects the public API.
    pub fn new_with_config(
        api_key: impl Into<String>,
        model: impl Into<String>,
        endpoint: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }

    /// Complete a content generation request
    pub async fn complete(&self, request: GeminiRequest) -> Result<GeminiResponse, ProviderError> {
        let base = if self.endpoint.is_empty() {
            DEFAULT_ENDPOINT
        } else {
            self.endpoint.trim_end_matches('/')
        };
        let api_url = format!("{}/v1beta/models/{}:generateContent", base, self.model);

        let response = self
            .client
            .post(&api_url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                ProviderError::ConnectionError(format!(
                    "Failed to send request to Gemini API: {}",
                    e
                ))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Gemini API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json::<GeminiResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(format!("Gemini API response: {}", e)))
    }

    /// Test the connection to the Gemini API
    pub async fn check_connection(&self) -> Result<(), ProviderError> {
        let request = GeminiRequest::from_prompt("Hello").max_output_tokens(10);
        self.complete(request).await?;
        Ok(())
    }

    /// Extract the response text from a Gemini response
    ///
    /// Concatenates the text parts of the first candidate; an empty candidate
    /// list yields an empty string.
    pub fn extract_text_from_response(response: &GeminiResponse) -> String {
        response
            .candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for Gemini {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = GeminiRequest::from_prompt(prompt);
        let response = self.complete(request).await?;
        Ok(Self::extract_text_from_response(&response))
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        self.check_connection().await
    }
}
