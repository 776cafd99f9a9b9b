use async_trait::async_trait;
use judgment_relay::{Error, Result, llm::LlmClient};
use std::sync::{Arc, Mutex};

/// Mock LLM client that records every prompt it receives.
#[derive(Debug, Clone)]
pub struct MockLlmClient {
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub response: Option<String>,
    pub error: Option<String>,
}

impl MockLlmClient {
    pub fn with_response(response: &str) -> Self {
        Self {
            prompts: Arc::new(Mutex::new(Vec::new())),
            response: Some(response.to_string()),
            error: None,
        }
    }

    pub fn with_error(error: &str) -> Self {
        Self {
            prompts: Arc::new(Mutex::new(Vec::new())),
            response: None,
            error: Some(error.to_string()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(ref error) = self.error {
            return Err(Error::internal(error.clone()));
        }

        self.response
            .clone()
            .ok_or_else(|| Error::internal("No mock response configured"))
    }
}
