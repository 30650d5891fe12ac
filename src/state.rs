//! Application state: engine config and the in-memory store of issued
//! questions.
//!
//! The store is a bounded FIFO keyed by uuid; once full, the oldest issued
//! question is evicted to make room.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::config::{load_engine_config_from_env, EngineConfig};
use crate::domain::AdaptiveQuestion;

#[derive(Debug)]
pub struct QuestionStore {
  by_id: HashMap<String, AdaptiveQuestion>,
  order: VecDeque<String>,
  capacity: usize,
}

impl QuestionStore {
  pub fn new(capacity: usize) -> Self {
    Self { by_id: HashMap::new(), order: VecDeque::new(), capacity: capacity.max(1) }
  }

  /// Store `q` under a fresh id, evicting the oldest entries beyond capacity.
  pub fn insert(&mut self, q: AdaptiveQuestion) -> String {
    let id = Uuid::new_v4().to_string();
    while self.order.len() >= self.capacity {
      match self.order.pop_front() {
        Some(old) => {
          self.by_id.remove(&old);
          debug!(target: "question", evicted = %old, "Question store full; evicted oldest");
        }
        None => break,
      }
    }
    self.order.push_back(id.clone());
    self.by_id.insert(id.clone(), q);
    id
  }

  pub fn get(&self, id: &str) -> Option<&AdaptiveQuestion> {
    self.by_id.get(id)
  }

  pub fn len(&self) -> usize {
    self.by_id.len()
  }

  pub fn is_empty(&self) -> bool {
    self.by_id.is_empty()
  }
}

#[derive(Clone)]
pub struct AppState {
  pub questions: Arc<RwLock<QuestionStore>>,
  pub config: EngineConfig,
}

impl AppState {
  /// Build state from env (ENGINE_CONFIG_PATH), falling back to defaults.
  #[instrument(level = "info", skip_all)]
  pub fn new() -> Self {
    Self::with_config(load_engine_config_from_env())
  }

  pub fn with_config(config: EngineConfig) -> Self {
    info!(
      target: "math_engine",
      tolerance = config.validator.tolerance,
      max_questions = config.store.max_questions,
      "Engine state ready"
    );
    Self {
      questions: Arc::new(RwLock::new(QuestionStore::new(config.store.max_questions))),
      config,
    }
  }

  #[instrument(level = "debug", skip(self, q), fields(domain = %q.domain, level = q.level))]
  pub async fn insert_question(&self, q: AdaptiveQuestion) -> String {
    self.questions.write().await.insert(q)
  }

  #[instrument(level = "debug", skip(self), fields(%id))]
  pub async fn get_question(&self, id: &str) -> Option<AdaptiveQuestion> {
    self.questions.read().await.get(id).cloned()
  }
}

impl Default for AppState {
  fn default() -> Self {
    Self::with_config(EngineConfig::default())
  }
}
