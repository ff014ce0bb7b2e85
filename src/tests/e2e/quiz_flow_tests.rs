// End to end in memory tests for the full quiz flow, driven through the router.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::modules::quiz::adapters::outbound::progress_store::ProgressStore;
use crate::modules::quiz::adapters::outbound::progress_store_in_memory::InMemoryProgressStore;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::send;

const EMAIL: &str = "a@b.com";

type BeforeEachReturn = (Arc<InMemoryProgressStore>, Router);

#[fixture]
fn before_each() -> BeforeEachReturn {
    let store = Arc::new(InMemoryProgressStore::new());
    let app = router(AppState::in_memory(store.clone()));
    (store, app)
}

fn bearer() -> String {
    format!("Bearer {EMAIL}")
}

fn start_request() -> Request<Body> {
    Request::post("/start")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "email": EMAIL }).to_string()))
        .unwrap()
}

fn next_request() -> Request<Body> {
    Request::get("/next")
        .header("authorization", bearer())
        .body(Body::empty())
        .unwrap()
}

fn submit_request(id: u32, answer: &str) -> Request<Body> {
    Request::post(format!("/questions/{id}/submit"))
        .header("authorization", bearer())
        .header("content-type", "application/json")
        .body(Body::from(json!({ "answer": answer }).to_string()))
        .unwrap()
}

async fn progress(store: &InMemoryProgressStore) -> usize {
    store.load(EMAIL).await.unwrap().unwrap().state.progress
}

#[rstest]
#[tokio::test]
async fn it_should_walk_through_the_first_question(before_each: BeforeEachReturn) {
    let (_, app) = before_each;

    let (status, json) = send(app.clone(), start_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["token"], EMAIL);

    let (status, json) = send(app.clone(), next_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 10001);
    assert_eq!(json["fetchStyle"], "query");

    let (status, json) = send(
        app.clone(),
        Request::get("/question?id=10001")
            .header("authorization", bearer())
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["question"], "What is 5 + 7?");

    let (status, json) = send(app.clone(), submit_request(10001, "12")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["correct"], true);

    let (_, json) = send(app, next_request()).await;
    assert_eq!(json["id"], 10002);
    assert_eq!(json["fetchStyle"], "params");
}

#[rstest]
#[tokio::test]
async fn it_should_complete_the_quiz_and_stay_completed(before_each: BeforeEachReturn) {
    let (store, app) = before_each;
    send(app.clone(), start_request()).await;

    for (id, answer) in [(10001, "12"), (10002, "paris"), (10003, " get "), (10004, "12")] {
        let (_, json) = send(app.clone(), submit_request(id, answer)).await;
        assert_eq!(json["correct"], true, "question {id}");
    }
    assert_eq!(progress(&store).await, 4);

    let (_, first) = send(app.clone(), next_request()).await;
    let (_, second) = send(app, next_request()).await;
    assert_eq!(first["message"], "🎉 Quiz completed!");
    assert_eq!(first["answers"].as_array().map(Vec::len), Some(4));
    assert_eq!(first, second);
    assert_eq!(progress(&store).await, 4);
}

#[rstest]
#[tokio::test]
async fn it_should_not_reset_progress_when_starting_again(before_each: BeforeEachReturn) {
    let (store, app) = before_each;
    send(app.clone(), start_request()).await;
    send(app.clone(), submit_request(10001, "12")).await;

    let (status, _) = send(app, start_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(progress(&store).await, 1);
}

#[rstest]
#[tokio::test]
async fn it_should_advance_only_once_per_question(before_each: BeforeEachReturn) {
    let (store, app) = before_each;
    send(app.clone(), start_request()).await;

    for _ in 0..3 {
        let (_, json) = send(app.clone(), submit_request(10001, "12")).await;
        assert_eq!(json, json!({ "correct": true, "message": "Correct!" }));
    }

    assert_eq!(progress(&store).await, 1);
}

#[rstest]
#[tokio::test]
async fn it_should_never_mutate_state_on_wrong_answers(before_each: BeforeEachReturn) {
    let (store, app) = before_each;
    send(app.clone(), start_request()).await;

    for id in [10001, 10002, 10003, 10004] {
        let (_, json) = send(app.clone(), submit_request(id, "definitely wrong")).await;
        assert_eq!(json["correct"], false);
    }

    let loaded = store.load(EMAIL).await.unwrap().unwrap();
    assert_eq!(loaded.state.progress, 0);
    assert!(loaded.state.answered_questions.is_empty());
}

#[rstest]
#[tokio::test]
async fn it_should_accept_answers_out_of_order(before_each: BeforeEachReturn) {
    let (store, app) = before_each;
    send(app.clone(), start_request()).await;

    send(app.clone(), submit_request(10004, "12")).await;

    assert_eq!(progress(&store).await, 1);
    let (_, json) = send(app, next_request()).await;
    // progress is a count, so the next pointer moves to the second question
    assert_eq!(json["id"], 10002);
}

#[rstest]
#[case(Request::get("/next"))]
#[case(Request::get("/question?id=10001"))]
#[case(Request::get("/question").header("X-Quiz-ID", "10003"))]
#[case(Request::get("/question/10002"))]
#[case(Request::post("/question"))]
#[case(Request::post("/questions/10001/submit"))]
#[tokio::test]
async fn it_should_reject_unauthenticated_requests_without_mutating_state(
    before_each: BeforeEachReturn,
    #[case] builder: axum::http::request::Builder,
) {
    let (store, app) = before_each;
    send(app.clone(), start_request()).await;

    let (status, json): (StatusCode, Value) = send(
        app,
        builder
            .header("content-type", "application/json")
            .body(Body::from(r#"{"id":10004,"answer":"12"}"#))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "Missing or invalid token");
    assert_eq!(progress(&store).await, 0);
}
