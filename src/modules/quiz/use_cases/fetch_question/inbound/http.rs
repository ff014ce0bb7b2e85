// Question delivery routes.
//
// Every question can only be fetched in its own style. `GET /question` serves
// both the query-string and the `X-Quiz-ID` header style: a query `id` wins,
// otherwise the header is used.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{Path, Query},
    http::HeaderMap,
};
use serde::{Deserialize, Serialize};

use crate::modules::quiz::core::catalog;
use crate::modules::quiz::core::question::{DeliveryMethod, Question};
use crate::modules::quiz::use_cases::fetch_question::lookup::lookup;
use crate::shell::error::ApiError;

pub const QUIZ_ID_HEADER: &str = "x-quiz-id";

#[derive(Deserialize)]
pub struct QuestionQueryParams {
    pub id: Option<String>,
}

#[derive(Deserialize)]
pub struct QuestionBody {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub id: u32,
    pub question: &'static str,
    pub answer_method: String,
}

impl From<&Question> for QuestionResponse {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id,
            question: q.text,
            answer_method: q.answer_instruction(),
        }
    }
}

pub async fn handle_query_or_header(
    headers: HeaderMap,
    params: Result<Query<QuestionQueryParams>, QueryRejection>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let query_id = params.ok().and_then(|Query(p)| p.id);
    let header_id = headers
        .get(QUIZ_ID_HEADER)
        .and_then(|v| v.to_str().ok());

    let question = match (query_id, header_id) {
        (Some(id), _) => {
            lookup(&id, DeliveryMethod::Query).ok_or_else(|| not_found("Invalid query param"))?
        }
        (None, Some(id)) => {
            lookup(id, DeliveryMethod::Header).ok_or_else(|| not_found("Invalid header param"))?
        }
        (None, None) => return Err(not_found("Invalid query param")),
    };
    Ok(Json(question.into()))
}

pub async fn handle_params(Path(id): Path<String>) -> Result<Json<QuestionResponse>, ApiError> {
    let question =
        lookup(&id, DeliveryMethod::Params).ok_or_else(|| not_found("Invalid route param"))?;
    Ok(Json(question.into()))
}

pub async fn handle_body(
    body: Result<Json<QuestionBody>, JsonRejection>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let Json(body) =
        body.map_err(|_| ApiError::BadRequest("Please include id in request body".into()))?;

    let question = body
        .id
        .as_ref()
        .and_then(catalog::json_id)
        .and_then(|id| catalog::find_for_delivery(id, DeliveryMethod::Body))
        .ok_or_else(|| not_found("Invalid body param"))?;
    Ok(Json(question.into()))
}

fn not_found(message: &str) -> ApiError {
    ApiError::NotFound(message.into())
}
