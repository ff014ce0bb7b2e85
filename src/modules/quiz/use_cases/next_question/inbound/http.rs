use axum::{Extension, Json, extract::State};
use serde::Serialize;

use crate::modules::quiz::core::identity::Identity;
use crate::modules::quiz::core::question::DeliveryMethod;
use crate::modules::quiz::core::state::AnsweredQuestion;
use crate::modules::quiz::use_cases::next_question::handler::NextStep;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct Instructions {
    pub fetch: String,
    pub answer: String,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum NextQuestionResponse {
    #[serde(rename_all = "camelCase")]
    Pending {
        id: u32,
        fetch_style: DeliveryMethod,
        instructions: Instructions,
    },
    Completed {
        message: &'static str,
        answers: Vec<AnsweredQuestion>,
    },
}

pub async fn handle(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<NextQuestionResponse>, ApiError> {
    let response = match state.next_handler.handle(&identity).await? {
        NextStep::Pending(question) => NextQuestionResponse::Pending {
            id: question.id,
            fetch_style: question.delivery_method,
            instructions: Instructions {
                fetch: question.fetch_instruction(),
                answer: question.answer_instruction(),
            },
        },
        NextStep::Completed { answers } => NextQuestionResponse::Completed {
            message: "🎉 Quiz completed!",
            answers,
        },
    };
    Ok(Json(response))
}
