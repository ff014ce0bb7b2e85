use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};

use crate::shell::error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct StartQuizBody {
    #[serde(default)]
    pub email: Option<serde_json::Value>,
}

#[derive(Serialize)]
pub struct StartQuizResponse {
    pub message: &'static str,
    pub token: String,
    pub instructions: &'static str,
}

#[derive(Serialize)]
pub struct WrongMethodResponse {
    pub message: &'static str,
}

pub async fn wrong_method() -> Json<WrongMethodResponse> {
    Json(WrongMethodResponse {
        message: "Wrong Method type, Try again",
    })
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<StartQuizBody>, JsonRejection>,
) -> Result<Json<StartQuizResponse>, ApiError> {
    let Json(body) = body
        .map_err(|_| ApiError::BadRequest("Please include email in request body".into()))?;

    let email = body
        .email
        .as_ref()
        .and_then(|v| v.as_str())
        .filter(|email| !email.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Email required".into()))?;

    let identity = state.start_handler.handle(email).await?;

    Ok(Json(StartQuizResponse {
        message: "Quiz started!",
        token: identity.to_string(),
        instructions: "Use Authorization: Bearer <your_email> and use /next route to get question",
    }))
}
