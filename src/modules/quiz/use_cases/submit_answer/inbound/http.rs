use axum::{
    Extension, Json,
    extract::rejection::JsonRejection,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::modules::quiz::core::catalog;
use crate::modules::quiz::core::identity::Identity;
use crate::modules::quiz::use_cases::submit_answer::handler::SubmissionOutcome;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SubmitAnswerBody {
    #[serde(default)]
    pub answer: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct SubmitAnswerResponse {
    pub correct: bool,
    pub message: &'static str,
}

/// Scalars are compared by their textual form, so `12` and `"12"` are the same
/// answer.
fn answer_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
    body: Result<Json<SubmitAnswerBody>, JsonRejection>,
) -> Result<Json<SubmitAnswerResponse>, ApiError> {
    let question_id = catalog::parse_id(&id)
        .filter(|id| catalog::find_by_id(*id).is_some())
        .ok_or_else(|| ApiError::NotFound("Question not found".into()))?;

    let answer = body
        .ok()
        .and_then(|Json(b)| b.answer)
        .as_ref()
        .and_then(answer_text)
        .ok_or_else(|| ApiError::BadRequest("Answer required".into()))?;

    let response = match state
        .submit_handler
        .handle(&identity, question_id, &answer)
        .await?
    {
        SubmissionOutcome::Correct { .. } => SubmitAnswerResponse {
            correct: true,
            message: "Correct!",
        },
        SubmissionOutcome::Wrong => SubmitAnswerResponse {
            correct: false,
            message: "Wrong, try again!",
        },
    };
    Ok(Json(response))
}
