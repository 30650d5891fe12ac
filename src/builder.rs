//! Adaptive question façade: classify → recommend → synthesize → annotate.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

use crate::classifier::infer_domain_from_tag;
use crate::domain::{AdaptiveQuestion, Domain, QuestionRequest};
use crate::funfacts::fun_fact_for;
use crate::leveling::LevelPolicy;
use crate::synth::{synthesize, Draft};

/// Build a question for `req` with the default leveling thresholds.
pub fn build_adaptive_question(req: &QuestionRequest) -> AdaptiveQuestion {
  build_with_policy(req, &LevelPolicy::default())
}

/// Same as [`build_adaptive_question`] with caller-supplied thresholds.
///
/// The generator is seeded from `req.seed` when present; otherwise a fresh
/// seed is drawn and recorded on the result so the question can be replayed.
#[instrument(level = "debug", skip(req, policy), fields(tag = %req.tag_name, seeded = req.seed.is_some()))]
pub fn build_with_policy(req: &QuestionRequest, policy: &LevelPolicy) -> AdaptiveQuestion {
  let domain = infer_domain_from_tag(&req.tag_name);
  let level = policy.recommend(&req.profile);
  let seed = req.seed.unwrap_or_else(|| rand::thread_rng().gen());
  let mut rng = ChaCha8Rng::seed_from_u64(seed);

  let question = assemble(synthesize(domain, level, &mut rng), seed, &mut rng);
  debug!(
    target: "question",
    domain = %question.domain,
    level = question.level,
    slug = %question.knowledge_point_slug,
    seed,
    "Question synthesized"
  );
  question
}

/// Synthesize directly for `domain`/`level`, skipping classification and
/// leveling. The reported seed is 0 since the caller owns the generator.
pub fn build_question_for<R: Rng + ?Sized>(domain: Domain, level: u8, rng: &mut R) -> AdaptiveQuestion {
  let draft = synthesize(domain, level, rng);
  assemble(draft, 0, rng)
}

/// Attach the fun fact (keyed by the draft's own domain and slug) and flatten.
fn assemble<R: Rng + ?Sized>(draft: Draft, seed: u64, rng: &mut R) -> AdaptiveQuestion {
  let fact = fun_fact_for(draft.domain, draft.slug, rng);
  AdaptiveQuestion {
    prompt_en: draft.prompt.en,
    prompt_zh: draft.prompt.zh,
    answer: draft.answer,
    hints: draft.hints,
    explanation_en: draft.explanation.en,
    explanation_zh: draft.explanation.zh,
    fun_fact_en: fact.en,
    fun_fact_zh: fact.zh,
    domain: draft.domain,
    knowledge_point_slug: draft.slug.to_string(),
    level: draft.level,
    seed,
  }
}
