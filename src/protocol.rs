//! Public HTTP request/response structs (serde ready, camelCase on the wire).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{AdaptiveQuestion, Domain, MasteryProfile};

/// A question as delivered to the learner: no answer, no explanation, no
/// hints (those are fetched one at a time).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOut {
  pub id: String,
  pub prompt_en: String,
  pub prompt_zh: String,
  pub domain: Domain,
  pub knowledge_point_slug: String,
  pub level: u8,
  pub hint_count: usize,
  pub fun_fact_en: String,
  pub fun_fact_zh: String,
  pub seed: u64,
}

pub fn to_out(id: String, q: &AdaptiveQuestion) -> QuestionOut {
  QuestionOut {
    id,
    prompt_en: q.prompt_en.clone(),
    prompt_zh: q.prompt_zh.clone(),
    domain: q.domain,
    knowledge_point_slug: q.knowledge_point_slug.clone(),
    level: q.level,
    hint_count: q.hints.len(),
    fun_fact_en: q.fun_fact_en.clone(),
    fun_fact_zh: q.fun_fact_zh.clone(),
    seed: q.seed,
  }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionIn {
  pub tag_name: String,
  #[serde(default)]
  pub profile: MasteryProfile,
  #[serde(default)]
  pub seed: Option<u64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerIn {
  pub question_id: String,
  pub answer: String,
}
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOut {
  pub correct: bool,
  pub expected: String,
  pub explanation_en: String,
  pub explanation_zh: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HintQuery {
  pub question_id: String,
  #[serde(default)]
  pub index: usize,
}
#[derive(Debug, Serialize)]
pub struct HintOut {
  pub index: usize,
  pub en: String,
  pub zh: String,
  /// Hints still available after this one.
  pub remaining: usize,
}

#[derive(Deserialize)]
pub struct LevelIn {
  pub profile: MasteryProfile,
}
#[derive(Serialize)]
pub struct LevelOut {
  pub level: u8,
}

#[derive(Debug, Deserialize)]
pub struct ClassifyQuery {
  pub tag: String,
}
#[derive(Serialize)]
pub struct ClassifyOut {
  pub domain: Domain,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateIn {
  pub user_answer: String,
  pub correct_answer: String,
}
#[derive(Serialize)]
pub struct ValidateOut {
  pub correct: bool,
}

#[derive(Serialize)]
pub struct HealthOut {
  pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorOut {
  pub error: String,
}
