use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct JudgmentRequest {
    #[serde(default, rename = "userInput")]
    pub user_input: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JudgmentResponse {
    pub judgment: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
