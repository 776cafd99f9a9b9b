use super::fsm::{JudgmentEvent, JudgmentStateMachine};
use crate::{Error, Result, llm::LlmClient, prompt::render_prompt};
use std::sync::Arc;
use tracing::{error, info};

/// Drives one request from raw input to generated judgment text.
///
/// Holds no per-request state, so a single instance is shared by every
/// handler invocation.
#[derive(Clone)]
pub struct Judge {
    llm: Arc<dyn LlmClient>,
}

impl Judge {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Validates the input, renders the prompt and makes exactly one upstream
    /// call. Empty or absent input is rejected before anything is sent.
    pub async fn judge(&self, user_input: Option<&str>) -> Result<String> {
        let mut fsm = JudgmentStateMachine::new();
        fsm.transition(JudgmentEvent::InputReceived)?;

        let input = match user_input {
            Some(input) if !input.is_empty() => input,
            _ => {
                fsm.transition(JudgmentEvent::InputRejected)?;
                info!("Rejected judgment request with empty input");
                return Err(Error::validation("No question was provided."));
            }
        };

        fsm.transition(JudgmentEvent::InputAccepted)?;
        let prompt = render_prompt(input);

        match self.llm.generate(&prompt).await {
            Ok(judgment) => {
                fsm.transition(JudgmentEvent::GenerationSucceeded)?;
                info!("Generated judgment of {} bytes", judgment.len());
                Ok(judgment)
            }
            Err(e) => {
                fsm.transition(JudgmentEvent::GenerationFailed)?;
                error!("Judgment generation failed: {}", e);
                Err(e)
            }
        }
    }
}
