//! Adaptive math question engine.
//!
//! - Answer validation across integers, decimals, word-numbers, fractions
//!   and mixed numbers
//! - Mastery-driven level recommendation
//! - Topic tag → domain classification
//! - Bilingual (en/zh) question synthesis for ten domains, seeded and
//!   reproducible
//! - A small axum HTTP surface over all of the above (`routes`)

pub mod answer;
pub mod builder;
pub mod classifier;
pub mod config;
pub mod domain;
pub mod funfacts;
pub mod leveling;
pub mod logic;
pub mod protocol;
pub mod routes;
pub mod state;
pub mod synth;
pub mod taxonomy;
pub mod telemetry;
pub mod util;
pub mod validator;

pub use answer::Answer;
pub use builder::{build_adaptive_question, build_question_for, build_with_policy};
pub use classifier::infer_domain_from_tag;
pub use domain::{AdaptiveQuestion, Bilingual, Domain, MasteryProfile, QuestionRequest};
pub use leveling::{recommend_next_level, LevelPolicy};
pub use taxonomy::{KnowledgePointDef, KNOWLEDGE_POINT_TAXONOMY};
pub use validator::validate_answer;
