use math_engine::taxonomy::knowledge_point;
use math_engine::util::{gcd, lcm};
use math_engine::validator::DEFAULT_TOLERANCE;
use math_engine::{
  build_adaptive_question, build_question_for, recommend_next_level, validate_answer, Answer, Domain,
  MasteryProfile, QuestionRequest,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SAMPLES: usize = 40;

fn for_every_question(seed: u64, mut check: impl FnMut(Domain, u8, &math_engine::AdaptiveQuestion)) {
  let mut rng = ChaCha8Rng::seed_from_u64(seed);
  for domain in Domain::ALL {
    for level in 1..=5 {
      for _ in 0..SAMPLES {
        let q = build_question_for(domain, level, &mut rng);
        check(domain, level, &q);
      }
    }
  }
}

fn integers(s: &str) -> Vec<i64> {
  s.split(|c: char| !c.is_ascii_digit())
    .filter(|t| !t.is_empty())
    .filter_map(|t| t.parse().ok())
    .collect()
}

#[test]
fn canonical_answer_is_accepted() {
  for_every_question(1, |domain, level, q| {
    let text = q.answer_text();
    assert!(q.check(&text, DEFAULT_TOLERANCE), "{domain} L{level}: {text}");
    assert!(validate_answer(&text, &text), "{domain} L{level}: {text}");
  });
}

#[test]
fn numeric_answers_accept_decimal_form() {
  for_every_question(2, |domain, level, q| {
    if let Some(v) = q.answer.value() {
      let decimal = format!("{v:.6}");
      assert!(q.check(&decimal, DEFAULT_TOLERANCE), "{domain} L{level}: {decimal} vs {}", q.answer_text());
      assert!(validate_answer(&decimal, &q.answer_text()), "{domain} L{level}: {decimal}");
    }
  });
}

#[test]
fn fractions_are_reduced_with_positive_denominator() {
  for_every_question(3, |domain, level, q| {
    if let Answer::Fraction { num, den } = q.answer {
      assert!(den > 1, "{domain} L{level}: {num}/{den}");
      assert_eq!(gcd(num, den), 1, "{domain} L{level}: {num}/{den}");
    }
  });
}

#[test]
fn metadata_matches_taxonomy() {
  for_every_question(4, |domain, level, q| {
    assert_eq!(q.domain, domain);
    assert_eq!(q.level, level);
    let kp = knowledge_point(&q.knowledge_point_slug).expect("slug in taxonomy");
    assert_eq!(kp.domain, domain);
    assert!(kp.covers(level), "{} does not cover L{level}", kp.slug);
    assert_eq!(q.hints.len(), 2);
    assert!(!q.fun_fact_en.is_empty() && !q.fun_fact_zh.is_empty());
    assert!(!q.prompt_zh.is_empty() && !q.explanation_zh.is_empty());
  });
}

#[test]
fn gcd_and_lcm_recomputed_from_prompt() {
  let mut rng = ChaCha8Rng::seed_from_u64(5);
  for level in 1..=3 {
    for _ in 0..200 {
      let q = build_question_for(Domain::NumberTheory, level, &mut rng);
      let nums = integers(&q.prompt_en);
      assert_eq!(nums.len(), 2, "{}", q.prompt_en);
      let want = if q.prompt_en.starts_with("A teacher") {
        gcd(nums[0], nums[1])
      } else {
        lcm(nums[0], nums[1])
      };
      assert_eq!(q.answer, Answer::integer(want), "{}", q.prompt_en);
    }
  }
}

#[test]
fn seed_reproduces_question() {
  let profile = MasteryProfile { accuracy: 0.7, avg_time_ms: 30_000.0, streak: 2, level: 3.0 };
  for tag in ["fractions", "quadratic", "median", "interest", "sin"] {
    let req = QuestionRequest { tag_name: tag.into(), profile: profile.clone(), seed: Some(2024) };
    let a = build_adaptive_question(&req);
    let b = build_adaptive_question(&req);
    assert_eq!(a, b, "{tag}");
    assert_eq!(a.seed, 2024);
  }
}

proptest! {
  #[test]
  fn recommendation_is_always_in_range(
    accuracy in -1.0f64..2.0,
    avg_time_ms in -1_000.0f64..200_000.0,
    streak in 0u32..50,
    level in -10.0f64..20.0,
  ) {
    let l = recommend_next_level(&MasteryProfile { accuracy, avg_time_ms, streak, level });
    prop_assert!((1..=5).contains(&l));
  }

  #[test]
  fn longer_streak_never_lowers_level(level in 1u8..=5, s1 in 0u32..10, s2 in 0u32..10) {
    let (lo, hi) = if s1 <= s2 { (s1, s2) } else { (s2, s1) };
    let at = |streak| recommend_next_level(&MasteryProfile {
      accuracy: 0.9,
      avg_time_ms: 10_000.0,
      streak,
      level: level as f64,
    });
    prop_assert!(at(lo) <= at(hi));
  }

  #[test]
  fn slow_answers_cost_one_level(level in 2u8..=4, streak in 0u32..10) {
    let at = |avg_time_ms| recommend_next_level(&MasteryProfile {
      accuracy: 0.9,
      avg_time_ms,
      streak,
      level: level as f64,
    });
    prop_assert_eq!(at(70_000.0) + 1, at(60_000.0));
  }
}
