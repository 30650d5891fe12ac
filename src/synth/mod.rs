//! Per-domain question synthesizers.
//!
//! Every synthesizer draws its operands first, computes the typed `Answer`
//! from those exact values, and only then formats prompt, hints, and
//! explanation from the same values. A `Draft` is the whole result; the
//! builder adds the fun fact and metadata.

use rand::Rng;

use crate::answer::Answer;
use crate::domain::{Bilingual, Domain};

pub mod algebra;
pub mod arithmetic;
pub mod calculus;
pub mod fractions;
pub mod geometry;
pub mod number_theory;
pub mod probability;
pub mod statistics;
pub mod trigonometry;
pub mod word_problems;

/// A synthesized question before annotation.
#[derive(Clone, Debug, PartialEq)]
pub struct Draft {
  pub domain: Domain,
  pub slug: &'static str,
  pub level: u8,
  pub prompt: Bilingual,
  pub answer: Answer,
  pub hints: Vec<Bilingual>,
  pub explanation: Bilingual,
}

/// Dispatch to the synthesizer of `domain`. `level` is expected in 1..=5;
/// anything else is clamped.
pub fn synthesize<R: Rng + ?Sized>(domain: Domain, level: u8, rng: &mut R) -> Draft {
  let level = level.clamp(1, 5);
  match domain {
    Domain::Arithmetic => arithmetic::build(level, rng),
    Domain::Algebra => algebra::build(level, rng),
    Domain::Geometry => geometry::build(level, rng),
    Domain::Fractions => fractions::build(level, rng),
    Domain::NumberTheory => number_theory::build(level, rng),
    Domain::Probability => probability::build(level, rng),
    Domain::Statistics => statistics::build(level, rng),
    Domain::Trigonometry => trigonometry::build(level, rng),
    Domain::Calculus => calculus::build(level, rng),
    Domain::WordProblems => word_problems::build(level, rng),
  }
}

/// Equal-odds choice between the two narrative templates of a band.
pub(crate) fn first_template<R: Rng + ?Sized>(rng: &mut R) -> bool {
  rng.gen_bool(0.5)
}

/// Shorthand for the two-step hint ladder (vague, then specific).
pub(crate) fn hint_pair(vague: (String, String), specific: (String, String)) -> Vec<Bilingual> {
  vec![Bilingual::new(vague.0, vague.1), Bilingual::new(specific.0, specific.1)]
}

pub(crate) fn text(en: impl Into<String>, zh: impl Into<String>) -> Bilingual {
  Bilingual::new(en, zh)
}

#[cfg(test)]
mod tests {
  use rand::SeedableRng;
  use rand_chacha::ChaCha8Rng;

  use super::*;
  use crate::taxonomy::knowledge_point;

  #[test]
  fn drafts_are_complete_for_every_domain_and_level() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for domain in Domain::ALL {
      for level in 1..=5 {
        for _ in 0..25 {
          let d = synthesize(domain, level, &mut rng);
          assert_eq!(d.domain, domain);
          assert_eq!(d.level, level);
          assert_eq!(d.hints.len(), 2);
          assert!(!d.prompt.en.is_empty() && !d.prompt.zh.is_empty());
          assert!(!d.explanation.en.is_empty() && !d.explanation.zh.is_empty());
          let kp = knowledge_point(d.slug).unwrap_or_else(|| panic!("unknown slug {}", d.slug));
          assert_eq!(kp.domain, domain);
          assert!(kp.covers(level), "{} not active at level {}", d.slug, level);
        }
      }
    }
  }

  #[test]
  fn out_of_range_levels_clamp() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert_eq!(synthesize(Domain::Algebra, 0, &mut rng).level, 1);
    assert_eq!(synthesize(Domain::Algebra, 9, &mut rng).level, 5);
  }
}
