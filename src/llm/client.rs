use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use tracing::{debug, error};

/// The upstream text generator, reduced to the one call the service needs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model,
            api_key: config.api_key,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let Some(api_key) = self.api_key.as_deref() else {
            error!("API key is not configured");
            return Err(Error::config("The API key is not set on the server."));
        };

        debug!(
            "Calling model {} with a {} byte prompt",
            self.model,
            prompt.len()
        );

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {}>", e.without_url()));
            error!("Error from upstream API ({}): {}", status, body);
            return Err(Error::Upstream {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;

        debug!(
            "Received generateContent response with {} candidates",
            parsed.candidates.len()
        );

        parsed
            .first_text()
            .map(str::to_string)
            .ok_or_else(|| Error::shape("No valid response from the API."))
    }
}
