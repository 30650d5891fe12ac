//! Static catalog of knowledge points, each tied to a domain and the band of
//! difficulty levels it is active for.

use serde::Serialize;

use crate::domain::Domain;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgePointDef {
  pub slug: &'static str,
  pub domain: Domain,
  pub name_en: &'static str,
  pub name_zh: &'static str,
  pub min_level: u8,
  pub max_level: u8,
}

impl KnowledgePointDef {
  pub fn covers(&self, level: u8) -> bool {
    (self.min_level..=self.max_level).contains(&level)
  }
}

const fn kp(
  slug: &'static str,
  domain: Domain,
  name_en: &'static str,
  name_zh: &'static str,
  min_level: u8,
  max_level: u8,
) -> KnowledgePointDef {
  KnowledgePointDef { slug, domain, name_en, name_zh, min_level, max_level }
}

pub const KNOWLEDGE_POINT_TAXONOMY: &[KnowledgePointDef] = &[
  // Arithmetic
  kp("add-subtract-multi-digit", Domain::Arithmetic, "Multi-digit Addition & Subtraction", "多位数加减法", 1, 2),
  kp("multiplication-arrays", Domain::Arithmetic, "Multiplication with Arrays", "乘法与点阵", 3, 4),
  kp("exponents-powers", Domain::Arithmetic, "Exponents & Powers", "乘方与幂", 5, 5),
  // Algebra
  kp("linear-equations-basic", Domain::Algebra, "One-step Linear Equations", "一步线性方程", 1, 2),
  kp("linear-equations-two-step", Domain::Algebra, "Two-step Linear Equations", "两步线性方程", 3, 4),
  kp("proportions", Domain::Algebra, "Proportions", "比例", 3, 4),
  kp("quadratic-equations", Domain::Algebra, "Quadratic Equations", "一元二次方程", 5, 5),
  // Geometry
  kp("rectangle-area", Domain::Geometry, "Area of Rectangles", "长方形面积", 1, 2),
  kp("pythagorean-theorem", Domain::Geometry, "Pythagorean Theorem", "勾股定理", 3, 5),
  // Fractions
  kp("fraction-addition-like", Domain::Fractions, "Adding Like Fractions", "同分母分数加法", 1, 3),
  kp("fraction-of-whole", Domain::Fractions, "Fraction of a Whole", "求一个数的几分之几", 1, 3),
  kp("fraction-addition-unlike", Domain::Fractions, "Adding Unlike Fractions", "异分母分数加法", 4, 5),
  kp("fraction-scaling", Domain::Fractions, "Multiplying Fractions by Integers", "分数乘整数", 4, 5),
  // Number theory
  kp("gcd-lcm", Domain::NumberTheory, "GCD & LCM", "最大公约数与最小公倍数", 1, 3),
  kp("prime-numbers", Domain::NumberTheory, "Prime Numbers", "质数", 4, 5),
  // Probability
  kp("basic-probability", Domain::Probability, "Basic Probability", "基础概率", 1, 3),
  kp("complementary-events", Domain::Probability, "Complementary Events", "对立事件", 1, 3),
  kp("conditional-probability", Domain::Probability, "Conditional Probability", "条件概率", 4, 5),
  kp("independent-events", Domain::Probability, "Independent Events", "独立事件", 4, 5),
  // Statistics
  kp("mean-average", Domain::Statistics, "Mean (Average)", "平均数", 1, 3),
  kp("median", Domain::Statistics, "Median", "中位数", 4, 5),
  // Trigonometry
  kp("special-angles", Domain::Trigonometry, "Special Angle Values", "特殊角三角函数值", 1, 3),
  kp("trig-ratios", Domain::Trigonometry, "SOH-CAH-TOA Ratios", "三角比", 4, 5),
  // Calculus
  kp("power-rule-derivatives", Domain::Calculus, "Power Rule Derivatives", "幂函数求导", 1, 3),
  kp("definite-integrals", Domain::Calculus, "Definite Integrals", "定积分", 4, 5),
  // Word problems
  kp("distance-speed-time", Domain::WordProblems, "Distance, Speed & Time", "路程、速度与时间", 1, 3),
  kp("simple-interest", Domain::WordProblems, "Simple Interest", "单利", 4, 5),
];

pub fn knowledge_point(slug: &str) -> Option<&'static KnowledgePointDef> {
  KNOWLEDGE_POINT_TAXONOMY.iter().find(|k| k.slug == slug)
}

/// Knowledge points of `domain` whose band includes `level`.
pub fn knowledge_points_for(domain: Domain, level: u8) -> Vec<&'static KnowledgePointDef> {
  KNOWLEDGE_POINT_TAXONOMY
    .iter()
    .filter(|k| k.domain == domain && k.covers(level))
    .collect()
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;

  #[test]
  fn bands_are_well_formed() {
    for k in KNOWLEDGE_POINT_TAXONOMY {
      assert!(1 <= k.min_level && k.min_level <= k.max_level && k.max_level <= 5, "{}", k.slug);
    }
  }

  #[test]
  fn slugs_are_unique() {
    let mut seen = HashSet::new();
    for k in KNOWLEDGE_POINT_TAXONOMY {
      assert!(seen.insert(k.slug), "duplicate slug {}", k.slug);
    }
  }

  #[test]
  fn every_domain_covers_every_level() {
    for d in Domain::ALL {
      for level in 1..=5 {
        assert!(!knowledge_points_for(d, level).is_empty(), "{d} has no point at level {level}");
      }
    }
  }

  #[test]
  fn lookup() {
    assert_eq!(knowledge_point("gcd-lcm").map(|k| k.domain), Some(Domain::NumberTheory));
    assert!(knowledge_point("nope").is_none());
  }
}
