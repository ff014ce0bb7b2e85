use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
    pub instructions: &'static str,
}

pub async fn handle() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Step-by-Step Quiz",
        instructions: "POST your email to /start to begin",
    })
}
