use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::quiz::use_cases::fetch_question::inbound::http as fetch_http;
use crate::modules::quiz::use_cases::next_question::inbound::http as next_http;
use crate::modules::quiz::use_cases::start_quiz::inbound::http as start_http;
use crate::modules::quiz::use_cases::submit_answer::inbound::http as submit_http;
use crate::modules::quiz::use_cases::welcome::inbound::http as welcome_http;
use crate::shell::auth::require_identity;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/next", get(next_http::handle))
        .route(
            "/question",
            get(fetch_http::handle_query_or_header).post(fetch_http::handle_body),
        )
        .route("/question/{id}", get(fetch_http::handle_params))
        .route("/questions/{id}/submit", post(submit_http::handle))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_identity,
        ));

    Router::new()
        .route("/", get(welcome_http::handle))
        .route(
            "/start",
            get(start_http::wrong_method).post(start_http::handle),
        )
        .merge(protected)
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found".into())
}
