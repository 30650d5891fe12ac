//! Core behaviors behind the HTTP handlers.
//!
//!   - Issuing a question (build + store)
//!   - Grading a stored question with the typed answer
//!   - Serving progressive hints
//!   - Free-text validation with the configured tolerance

use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::builder::build_with_policy;
use crate::domain::QuestionRequest;
use crate::protocol::{to_out, AnswerOut, HintOut, QuestionIn, QuestionOut};
use crate::state::AppState;
use crate::validator::Validator;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error("unknown questionId: {0}")]
  UnknownQuestion(String),
  #[error("hint index {index} out of range (question has {available})")]
  NoSuchHint { index: usize, available: usize },
}

#[instrument(level = "info", skip(state, input), fields(tag = %input.tag_name, seeded = input.seed.is_some()))]
pub async fn issue_question(state: &AppState, input: QuestionIn) -> QuestionOut {
  let req = QuestionRequest { tag_name: input.tag_name, profile: input.profile, seed: input.seed };
  let q = build_with_policy(&req, &state.config.leveling);
  let id = state.insert_question(q.clone()).await;
  info!(target: "question", %id, domain = %q.domain, level = q.level, "Question issued");
  to_out(id, &q)
}

#[instrument(level = "info", skip(state, answer), fields(%question_id, answer_len = answer.len()))]
pub async fn evaluate_answer(state: &AppState, question_id: &str, answer: &str) -> Result<AnswerOut, ApiError> {
  let Some(q) = state.get_question(question_id).await else {
    warn!(target: "question", %question_id, "Answer for unknown question");
    return Err(ApiError::UnknownQuestion(question_id.to_string()));
  };
  let correct = q.check(answer, state.config.validator.tolerance);
  info!(target: "question", %question_id, %correct, domain = %q.domain, "Answer graded");
  Ok(AnswerOut {
    correct,
    expected: q.answer_text(),
    explanation_en: q.explanation_en,
    explanation_zh: q.explanation_zh,
  })
}

#[instrument(level = "info", skip(state), fields(%question_id, index))]
pub async fn hint_at(state: &AppState, question_id: &str, index: usize) -> Result<HintOut, ApiError> {
  let q = state
    .get_question(question_id)
    .await
    .ok_or_else(|| ApiError::UnknownQuestion(question_id.to_string()))?;
  let available = q.hints.len();
  let hint = q
    .hints
    .into_iter()
    .nth(index)
    .ok_or(ApiError::NoSuchHint { index, available })?;
  Ok(HintOut { index, en: hint.en, zh: hint.zh, remaining: available - index - 1 })
}

#[instrument(level = "debug", skip_all, fields(user_len = user_answer.len()))]
pub fn validate_free_text(state: &AppState, user_answer: &str, correct_answer: &str) -> bool {
  Validator::new(state.config.validator.tolerance).validate(user_answer, correct_answer)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::MasteryProfile;

  fn input(tag: &str, seed: u64) -> QuestionIn {
    QuestionIn { tag_name: tag.into(), profile: MasteryProfile::default(), seed: Some(seed) }
  }

  #[tokio::test]
  async fn issue_then_grade() {
    let state = AppState::default();
    let out = issue_question(&state, input("linear equations", 9)).await;
    let stored = state.get_question(&out.id).await.unwrap();

    let right = evaluate_answer(&state, &out.id, &stored.answer_text()).await.unwrap();
    assert!(right.correct);
    assert_eq!(right.expected, stored.answer_text());

    let wrong = evaluate_answer(&state, &out.id, "not a number").await.unwrap();
    assert!(!wrong.correct);
  }

  #[tokio::test]
  async fn hints_run_out() {
    let state = AppState::default();
    let out = issue_question(&state, input("area", 3)).await;
    let first = hint_at(&state, &out.id, 0).await.unwrap();
    assert_eq!(first.remaining, 1);
    let last = hint_at(&state, &out.id, 1).await.unwrap();
    assert_eq!(last.remaining, 0);
    assert!(matches!(
      hint_at(&state, &out.id, 2).await,
      Err(ApiError::NoSuchHint { index: 2, available: 2 })
    ));
  }

  #[tokio::test]
  async fn unknown_question() {
    let state = AppState::default();
    assert!(matches!(evaluate_answer(&state, "nope", "1").await, Err(ApiError::UnknownQuestion(_))));
  }
}
