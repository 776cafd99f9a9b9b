use super::types::{ErrorResponse, JudgmentRequest, JudgmentResponse};
use crate::{Error, judgment::Judge};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub judge: Arc<Judge>,
}

type ErrorReply = (StatusCode, Json<ErrorResponse>);

fn error_reply(err: &Error) -> ErrorReply {
    let message = match err {
        Error::Validation(msg) => msg.clone(),
        other => format!("Server error: {}", other),
    };

    (err.status_code(), Json(ErrorResponse { error: message }))
}

pub async fn get_judgment(
    State(state): State<AppState>,
    payload: Result<Json<JudgmentRequest>, JsonRejection>,
) -> Result<Json<JudgmentResponse>, ErrorReply> {
    let request_id = Uuid::new_v4();

    async move {
        let request = match payload {
            Ok(Json(request)) => request,
            Err(rejection) => {
                warn!("Rejected malformed judgment request: {}", rejection.body_text());
                return Err(error_reply(&Error::validation(format!(
                    "Invalid request body: {}",
                    rejection.body_text()
                ))));
            }
        };

        info!("Received judgment request");

        match state.judge.judge(request.user_input.as_deref()).await {
            Ok(judgment) => {
                info!("Judgment request completed");
                Ok(Json(JudgmentResponse { judgment }))
            }
            Err(e) => {
                if matches!(e, Error::Validation(_)) {
                    warn!("Judgment request failed validation: {}", e);
                } else {
                    error!("Internal server error: {}", e);
                }
                Err(error_reply(&e))
            }
        }
    }
    .instrument(info_span!("get_judgment", %request_id))
    .await
}
