use std::sync::Arc;

use axum::{
  body::{to_bytes, Body},
  http::{Request, StatusCode},
  Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use math_engine::routes::build_router;
use math_engine::state::AppState;

fn app() -> (Router, Arc<AppState>) {
  let state = Arc::new(AppState::default());
  (build_router(state.clone()), state)
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
  let res = app.clone().oneshot(req).await.unwrap();
  let status = res.status();
  let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
  let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap_or(Value::Null) };
  (status, body)
}

fn get(uri: &str) -> Request<Body> {
  Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: Value) -> Request<Body> {
  Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(body.to_string()))
    .unwrap()
}

#[tokio::test]
async fn health() {
  let (app, _) = app();
  let (status, body) = send(&app, get("/api/v1/health")).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn question_answer_and_hints() {
  let (app, state) = app();
  let (status, q) = send(
    &app,
    post(
      "/api/v1/question",
      json!({
        "tagName": "fraction-addition",
        "profile": { "accuracy": 0.9, "avgTimeMs": 10000, "streak": 0, "level": 2 },
        "seed": 77
      }),
    ),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(q["domain"], "FRACTIONS");
  assert_eq!(q["level"], 3);
  assert_eq!(q["seed"], 77);
  assert_eq!(q["hintCount"], 2);
  assert!(q.get("answer").is_none());
  assert!(q.get("explanationEn").is_none());

  let id = q["id"].as_str().unwrap().to_string();
  let expected = state.get_question(&id).await.unwrap().answer_text();

  let (status, graded) = send(&app, post("/api/v1/answer", json!({ "questionId": id, "answer": expected }))).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(graded["correct"], true);
  assert_eq!(graded["expected"], expected.as_str());
  assert!(graded["explanationZh"].as_str().is_some_and(|s| !s.is_empty()));

  let (_, wrong) = send(&app, post("/api/v1/answer", json!({ "questionId": id, "answer": "banana" }))).await;
  assert_eq!(wrong["correct"], false);

  let (status, hint) = send(&app, get(&format!("/api/v1/hint?questionId={id}&index=0"))).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(hint["index"], 0);
  assert_eq!(hint["remaining"], 1);

  let (status, _) = send(&app, get(&format!("/api/v1/hint?questionId={id}&index=5"))).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_question_is_404() {
  let (app, _) = app();
  let (status, body) = send(&app, post("/api/v1/answer", json!({ "questionId": "nope", "answer": "1" }))).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert!(body["error"].as_str().unwrap().contains("nope"));
}

#[tokio::test]
async fn level_classify_validate() {
  let (app, _) = app();

  let (_, level) = send(
    &app,
    post(
      "/api/v1/level",
      json!({ "profile": { "accuracy": 0.9, "avgTimeMs": 10000, "streak": 5, "level": 2 } }),
    ),
  )
  .await;
  assert_eq!(level["level"], 4);

  let (_, domain) = send(&app, get("/api/v1/classify?tag=hsf-tf-unit-circle")).await;
  assert_eq!(domain["domain"], "TRIGONOMETRY");

  let (_, ok) = send(&app, post("/api/v1/validate", json!({ "userAnswer": "1 3/4", "correctAnswer": "1.75" }))).await;
  assert_eq!(ok["correct"], true);
  let (_, bad) = send(&app, post("/api/v1/validate", json!({ "userAnswer": "", "correctAnswer": "5" }))).await;
  assert_eq!(bad["correct"], false);
  let (_, unit) = send(&app, post("/api/v1/validate", json!({ "userAnswer": "24 cm²", "correctAnswer": "24" }))).await;
  assert_eq!(unit["correct"], true);
  let (_, root) = send(&app, post("/api/v1/validate", json!({ "userAnswer": "sqrt(3)/2", "correctAnswer": "√3/2" }))).await;
  assert_eq!(root["correct"], true);

  let (_, domain) = send(&app, get("/api/v1/classify?tag=unit-cost")).await;
  assert_eq!(domain["domain"], "ARITHMETIC");
}

#[tokio::test]
async fn taxonomy_lists_knowledge_points() {
  let (app, _) = app();
  let (status, body) = send(&app, get("/api/v1/taxonomy")).await;
  assert_eq!(status, StatusCode::OK);
  let items = body.as_array().unwrap();
  assert_eq!(items.len(), math_engine::KNOWLEDGE_POINT_TAXONOMY.len());
  assert!(items.iter().any(|kp| kp["slug"] == "pythagorean-theorem" && kp["domain"] == "GEOMETRY"));
}

#[tokio::test]
async fn malformed_json_is_rejected() {
  let (app, _) = app();
  let req = Request::builder()
    .method("POST")
    .uri("/api/v1/validate")
    .header("content-type", "application/json")
    .body(Body::from("{not json"))
    .unwrap();
  let (status, _) = send(&app, req).await;
  assert!(status.is_client_error());
}
