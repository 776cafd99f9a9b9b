pub mod fsm;
pub mod service;

pub use fsm::{JudgmentEvent, JudgmentState, JudgmentStateMachine};
pub use service::Judge;
