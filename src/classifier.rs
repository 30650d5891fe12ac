//! Topic tag → math domain.
//!
//! An ordered rule table: the first rule whose keyword appears in the
//! lowercased tag wins, and Arithmetic is the fallback. Order is priority
//! (trigonometry before geometry, geometry before algebra, ...).
//!
//! Short keywords such as "sin" or "cos" hide inside ordinary words
//! ("missing", "unit-cost"), so those only match a whole token of the tag.

use crate::domain::Domain;

pub struct DomainRule {
  pub domain: Domain,
  /// Matched anywhere in the tag.
  pub keywords: &'static [&'static str],
  /// Matched only as a whole alphanumeric token.
  pub tokens: &'static [&'static str],
}

impl DomainRule {
  /// Expects an already-lowercased tag.
  pub fn matches(&self, tag: &str) -> bool {
    self.keywords.iter().any(|k| tag.contains(k))
      || tag
        .split(|c: char| !c.is_alphanumeric())
        .any(|t| !t.is_empty() && self.tokens.iter().any(|k| *k == t))
  }
}

pub const DOMAIN_RULES: &[DomainRule] = &[
  DomainRule {
    domain: Domain::Trigonometry,
    keywords: &["trig", "tangent", "triangle", "hsf-tf", "hsg-srt", "radian"],
    tokens: &["sin", "cos", "tan", "sine", "cosine", "soh", "cah", "toa"],
  },
  DomainRule {
    domain: Domain::Calculus,
    keywords: &["calc", "deriv", "integral", "integrat", "differentia", "limit"],
    tokens: &[],
  },
  DomainRule {
    domain: Domain::Statistics,
    keywords: &["stat", "mean", "median", "average", "data", "-sp-"],
    tokens: &[],
  },
  DomainRule {
    domain: Domain::Probability,
    keywords: &["probab", "chance", "odds", "dice", "coin"],
    tokens: &[],
  },
  DomainRule {
    domain: Domain::Fractions,
    keywords: &["fraction", "frac", "numerator", "denominator", "-nf-", ".nf."],
    tokens: &[],
  },
  DomainRule {
    domain: Domain::NumberTheory,
    keywords: &["prime", "gcd", "lcm", "factor", "divisib", "multiple", "number-theory", "number theory", "-ns-"],
    tokens: &[],
  },
  DomainRule {
    domain: Domain::Geometry,
    keywords: &["geometr", "area", "perimeter", "pythag", "rectangle", "circle", "polygon", "volume", "shape"],
    tokens: &["geo"],
  },
  DomainRule {
    domain: Domain::WordProblems,
    keywords: &["word", "story", "speed", "distance", "interest"],
    tokens: &[],
  },
  DomainRule {
    domain: Domain::Algebra,
    keywords: &["algebra", "equation", "linear", "quadratic", "variable", "expression", "function", "-ee-", "hsa-"],
    tokens: &[],
  },
];

/// Case-insensitive classification. Never fails.
pub fn infer_domain_from_tag(tag_name: &str) -> Domain {
  let tag = tag_name.to_lowercase();
  DOMAIN_RULES
    .iter()
    .find(|rule| rule.matches(&tag))
    .map(|rule| rule.domain)
    .unwrap_or(Domain::Arithmetic)
}
