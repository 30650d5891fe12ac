//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented; answer text is logged by length only.

use std::sync::Arc;

use axum::{
  extract::{Query, State},
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use tracing::{info, instrument};

use crate::classifier::infer_domain_from_tag;
use crate::logic::*;
use crate::protocol::*;
use crate::state::AppState;
use crate::taxonomy::KNOWLEDGE_POINT_TAXONOMY;

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::UnknownQuestion(_) | ApiError::NoSuchHint { .. } => StatusCode::NOT_FOUND,
    };
    (status, Json(ErrorOut { error: self.to_string() })).into_response()
  }
}

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse {
  Json(HealthOut { ok: true })
}

#[instrument(level = "info", skip(state, body), fields(tag = %body.tag_name))]
pub async fn http_post_question(
  State(state): State<Arc<AppState>>,
  Json(body): Json<QuestionIn>,
) -> impl IntoResponse {
  Json(issue_question(&state, body).await)
}

#[instrument(level = "info", skip(state, body), fields(%body.question_id, answer_len = body.answer.len()))]
pub async fn http_post_answer(
  State(state): State<Arc<AppState>>,
  Json(body): Json<AnswerIn>,
) -> Result<Json<AnswerOut>, ApiError> {
  evaluate_answer(&state, &body.question_id, &body.answer).await.map(Json)
}

#[instrument(level = "info", skip(state), fields(%q.question_id, q.index))]
pub async fn http_get_hint(
  State(state): State<Arc<AppState>>,
  Query(q): Query<HintQuery>,
) -> Result<Json<HintOut>, ApiError> {
  let hint = hint_at(&state, &q.question_id, q.index).await?;
  info!(target: "question", id = %q.question_id, index = q.index, "HTTP hint served");
  Ok(Json(hint))
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_post_level(
  State(state): State<Arc<AppState>>,
  Json(body): Json<LevelIn>,
) -> impl IntoResponse {
  Json(LevelOut { level: state.config.leveling.recommend(&body.profile) })
}

#[instrument(level = "info", fields(%q.tag))]
pub async fn http_get_classify(Query(q): Query<ClassifyQuery>) -> impl IntoResponse {
  Json(ClassifyOut { domain: infer_domain_from_tag(&q.tag) })
}

#[instrument(level = "info", skip(state, body), fields(user_len = body.user_answer.len()))]
pub async fn http_post_validate(
  State(state): State<Arc<AppState>>,
  Json(body): Json<ValidateIn>,
) -> impl IntoResponse {
  Json(ValidateOut { correct: validate_free_text(&state, &body.user_answer, &body.correct_answer) })
}

#[instrument(level = "info")]
pub async fn http_get_taxonomy() -> impl IntoResponse {
  Json(KNOWLEDGE_POINT_TAXONOMY)
}
