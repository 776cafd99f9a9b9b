use crate::{Error, Result};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JudgmentState {
    AwaitingInput,
    Validating,
    CallingExternal,
    RespondingSuccess,
    RespondingError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JudgmentEvent {
    InputReceived,
    InputAccepted,
    InputRejected,
    GenerationSucceeded,
    GenerationFailed,
}

/// Lifecycle of a single judgment request. Never outlives the request.
#[derive(Debug)]
pub struct JudgmentStateMachine {
    state: JudgmentState,
}

impl Default for JudgmentStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl JudgmentStateMachine {
    pub fn new() -> Self {
        Self {
            state: JudgmentState::AwaitingInput,
        }
    }

    pub fn current_state(&self) -> JudgmentState {
        self.state
    }

    pub fn transition(&mut self, event: JudgmentEvent) -> Result<()> {
        use JudgmentEvent as E;
        use JudgmentState as S;

        let new_state = match (self.state, event) {
            (S::AwaitingInput, E::InputReceived) => S::Validating,
            (S::Validating, E::InputAccepted) => S::CallingExternal,
            (S::Validating, E::InputRejected) => S::RespondingError,
            (S::CallingExternal, E::GenerationSucceeded) => S::RespondingSuccess,
            (S::CallingExternal, E::GenerationFailed) => S::RespondingError,
            (current, event) => {
                warn!(
                    "Invalid judgment transition from {:?} with event {:?}",
                    current, event
                );
                return Err(Error::InvalidTransition {
                    current: format!("{:?}", current),
                    requested: format!("{:?}", event),
                });
            }
        };

        debug!(
            "Judgment state transition: {:?} -> {:?} (event: {:?})",
            self.state, new_state, event
        );

        self.state = new_state;
        Ok(())
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.state,
            JudgmentState::RespondingSuccess | JudgmentState::RespondingError
        )
    }
}
