//! Domain models: math domains, the learner's mastery profile, and the
//! generated question itself.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::answer::Answer;

/// The ten top-level math subject categories. Closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Domain {
  Arithmetic,
  Algebra,
  Geometry,
  Fractions,
  NumberTheory,
  Probability,
  Statistics,
  Trigonometry,
  Calculus,
  WordProblems,
}

impl Domain {
  pub const ALL: [Domain; 10] = [
    Domain::Arithmetic,
    Domain::Algebra,
    Domain::Geometry,
    Domain::Fractions,
    Domain::NumberTheory,
    Domain::Probability,
    Domain::Statistics,
    Domain::Trigonometry,
    Domain::Calculus,
    Domain::WordProblems,
  ];

  /// Wire name, identical to the serde representation.
  pub fn as_str(self) -> &'static str {
    match self {
      Domain::Arithmetic => "ARITHMETIC",
      Domain::Algebra => "ALGEBRA",
      Domain::Geometry => "GEOMETRY",
      Domain::Fractions => "FRACTIONS",
      Domain::NumberTheory => "NUMBER_THEORY",
      Domain::Probability => "PROBABILITY",
      Domain::Statistics => "STATISTICS",
      Domain::Trigonometry => "TRIGONOMETRY",
      Domain::Calculus => "CALCULUS",
      Domain::WordProblems => "WORD_PROBLEMS",
    }
  }

  pub fn label_en(self) -> &'static str {
    match self {
      Domain::Arithmetic => "Arithmetic",
      Domain::Algebra => "Algebra",
      Domain::Geometry => "Geometry",
      Domain::Fractions => "Fractions",
      Domain::NumberTheory => "Number Theory",
      Domain::Probability => "Probability",
      Domain::Statistics => "Statistics",
      Domain::Trigonometry => "Trigonometry",
      Domain::Calculus => "Calculus",
      Domain::WordProblems => "Word Problems",
    }
  }

  pub fn label_zh(self) -> &'static str {
    match self {
      Domain::Arithmetic => "算术",
      Domain::Algebra => "代数",
      Domain::Geometry => "几何",
      Domain::Fractions => "分数",
      Domain::NumberTheory => "数论",
      Domain::Probability => "概率",
      Domain::Statistics => "统计",
      Domain::Trigonometry => "三角",
      Domain::Calculus => "微积分",
      Domain::WordProblems => "应用题",
    }
  }
}

impl fmt::Display for Domain {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Rolling per-learner, per-topic performance snapshot.
/// Read-only here; persisted by whoever calls us.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryProfile {
  /// Recent correct-answer rate in [0, 1].
  pub accuracy: f64,
  pub avg_time_ms: f64,
  pub streak: u32,
  /// Current level. Fractional or out-of-range values are tolerated and
  /// rounded/clamped by the recommender.
  pub level: f64,
}

impl Default for MasteryProfile {
  fn default() -> Self {
    Self { accuracy: 0.0, avg_time_ms: 0.0, streak: 0, level: 1.0 }
  }
}

/// An English/Chinese text pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bilingual {
  pub en: String,
  pub zh: String,
}

impl Bilingual {
  pub fn new(en: impl Into<String>, zh: impl Into<String>) -> Self {
    Self { en: en.into(), zh: zh.into() }
  }
}

/// Input to the question builder.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRequest {
  pub tag_name: String,
  pub profile: MasteryProfile,
  /// Reproduce a previous question by passing its seed back in.
  #[serde(default)]
  pub seed: Option<u64>,
}

/// One generated, ready-to-render question. Immutable value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptiveQuestion {
  pub prompt_en: String,
  pub prompt_zh: String,
  pub answer: Answer,
  /// Ordered vague → specific.
  pub hints: Vec<Bilingual>,
  pub explanation_en: String,
  pub explanation_zh: String,
  pub fun_fact_en: String,
  pub fun_fact_zh: String,
  pub domain: Domain,
  pub knowledge_point_slug: String,
  pub level: u8,
  /// Seed of the generator that produced this question.
  pub seed: u64,
}

impl AdaptiveQuestion {
  /// Canonical answer text, e.g. `"3/4"`, `"7.07"`, `"4x^3"`.
  pub fn answer_text(&self) -> String {
    self.answer.to_string()
  }

  /// Grade a learner's free-text answer against the typed canonical answer.
  pub fn check(&self, user_answer: &str, tolerance: f64) -> bool {
    self.answer.accepts(user_answer, tolerance)
  }
}
