//! Bilingual fun facts attached to synthesized questions.
//!
//! A slug-specific fact wins over the domain pool; otherwise one entry of the
//! domain's pool is picked uniformly.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::{Bilingual, Domain};

type Fact = (&'static str, &'static str);

/// Targeted facts for individual knowledge points.
const SLUG_FACTS: &[(&str, Fact)] = &[
  (
    "conditional-probability",
    (
      "P(A | B) and P(B | A) are usually different: most soccer players may play chess without most chess players playing soccer.",
      "P(A | B) 和 P(B | A) 通常不相等：大多数踢足球的人可能会下棋，但大多数下棋的人不一定踢足球。",
    ),
  ),
  (
    "pythagorean-theorem",
    (
      "The 3-4-5 triangle was used by ancient builders with knotted ropes to lay out perfect right angles.",
      "古代工匠用打了结的绳子围成 3-4-5 三角形，来得到标准的直角。",
    ),
  ),
  (
    "prime-numbers",
    (
      "Euclid proved over 2,000 years ago that there are infinitely many primes.",
      "两千多年前，欧几里得就证明了质数有无穷多个。",
    ),
  ),
  (
    "gcd-lcm",
    (
      "Euclid's algorithm for the greatest common divisor is one of the oldest algorithms still in everyday use.",
      "求最大公约数的辗转相除法是至今仍在日常使用的最古老算法之一。",
    ),
  ),
  (
    "special-angles",
    (
      "The exact values of sin 30°, 45° and 60° all come from just two triangles you can draw from memory.",
      "sin 30°、45°、60° 的精确值都来自两个可以凭记忆画出的三角形。",
    ),
  ),
  (
    "simple-interest",
    (
      "Clay tablets from ancient Mesopotamia record interest on loans of grain and silver.",
      "古代美索不达米亚的泥板上就记载着谷物和白银借贷的利息。",
    ),
  ),
];

fn pool(domain: Domain) -> &'static [Fact] {
  match domain {
    Domain::Arithmetic => &[
      ("The equals sign was invented in 1557 by Robert Recorde, who was tired of writing \"is equal to\".", "等号是罗伯特·雷科德在1557年发明的，因为他厌倦了反复写“等于”。"),
      ("Zero as a number in its own right was developed by Indian mathematicians around the 5th century.", "把零当作一个真正的数，是印度数学家在公元5世纪左右发展起来的。"),
      ("The abacus is still used in some schools to build fast mental arithmetic.", "一些学校至今仍用算盘来训练快速心算。"),
    ],
    Domain::Algebra => &[
      ("The word \"algebra\" comes from the Arabic al-jabr, meaning \"restoring broken parts\".", "“代数”一词源自阿拉伯语 al-jabr，意思是“把断开的部分复原”。"),
      ("Using letters like x for unknowns became common thanks to René Descartes in the 1600s.", "用 x 之类的字母表示未知数，是17世纪笛卡尔推广开来的。"),
    ],
    Domain::Geometry => &[
      ("Geometry means \"earth measuring\"; it began with surveying fields along the Nile.", "“几何”原意是“测量土地”，起源于尼罗河畔的田地测量。"),
      ("Bees build hexagonal cells because hexagons tile a plane using the least wax for the area enclosed.", "蜜蜂建造六边形蜂房，因为六边形铺满平面时，围成同样面积所用的蜂蜡最少。"),
    ],
    Domain::Fractions => &[
      ("Ancient Egyptians wrote almost every fraction as a sum of different unit fractions like 1/2 + 1/4.", "古埃及人几乎把所有分数都写成不同单位分数之和，比如 1/2 + 1/4。"),
      ("Musical notes are named by fractions: half notes, quarter notes and eighth notes.", "音符是用分数命名的：二分音符、四分音符和八分音符。"),
    ],
    Domain::NumberTheory => &[
      ("Online encryption relies on how hard it is to factor the product of two huge primes.", "网络加密依赖于一个事实：把两个巨大质数的乘积分解开非常困难。"),
      ("Periodical cicadas emerge every 13 or 17 years, both primes.", "周期蝉每13年或17年出土一次，这两个数都是质数。"),
    ],
    Domain::Probability => &[
      ("Probability theory grew out of letters between Pascal and Fermat about a dice game.", "概率论起源于帕斯卡和费马讨论一个骰子游戏的通信。"),
      ("In a room of just 23 people, there is better than even odds two share a birthday.", "只要屋里有23个人，就有超过一半的可能有两人生日相同。"),
    ],
    Domain::Statistics => &[
      ("Florence Nightingale used statistical charts to convince officials to improve hospital sanitation.", "南丁格尔用统计图表说服官员改善医院卫生。"),
      ("The median is used for house prices because a few mansions would pull the mean up.", "房价常用中位数，因为少数豪宅会把平均数拉高。"),
    ],
    Domain::Trigonometry => &[
      ("Ancient astronomers like Hipparchus built chord tables, the ancestors of sine tables.", "喜帕恰斯等古代天文学家编制了弦表，它是正弦表的前身。"),
      ("Trigonometry lets surveyors measure a mountain's height without climbing it.", "三角学让测量员不用爬山就能测出山的高度。"),
    ],
    Domain::Calculus => &[
      ("Newton and Leibniz developed calculus independently in the late 1600s.", "牛顿和莱布尼茨在17世纪末各自独立地发明了微积分。"),
      ("Your car's speedometer shows a derivative: how fast distance changes with time.", "汽车速度表显示的就是导数：路程随时间变化的快慢。"),
    ],
    Domain::WordProblems => &[
      ("Word problems appear in the Rhind Papyrus, written in Egypt around 1550 BC.", "约公元前1550年的埃及莱因德纸草书里就有应用题。"),
      ("Light from the Sun takes about 8 minutes and 20 seconds to reach Earth.", "阳光从太阳到达地球大约需要8分20秒。"),
    ],
  }
}

/// The override for `slug`, if one exists.
pub fn slug_fact(slug: &str) -> Option<Bilingual> {
  SLUG_FACTS
    .iter()
    .find(|(s, _)| *s == slug)
    .map(|(_, (en, zh))| Bilingual::new(*en, *zh))
}

/// Fun fact for a synthesized question: slug override first, then a random
/// pick from the domain pool.
pub fn fun_fact_for<R: Rng + ?Sized>(domain: Domain, slug: &str, rng: &mut R) -> Bilingual {
  if let Some(fact) = slug_fact(slug) {
    return fact;
  }
  let facts = pool(domain);
  let (en, zh) = facts.choose(rng).copied().unwrap_or(facts[0]);
  Bilingual::new(en, zh)
}

#[cfg(test)]
mod tests {
  use rand::SeedableRng;
  use rand_chacha::ChaCha8Rng;

  use super::*;
  use crate::taxonomy::knowledge_point;

  #[test]
  fn every_domain_has_a_pool() {
    for domain in Domain::ALL {
      let facts = pool(domain);
      assert!(facts.len() >= 2, "{domain}");
      assert!(facts.iter().all(|(en, zh)| !en.is_empty() && !zh.is_empty()));
    }
  }

  #[test]
  fn overrides_name_real_knowledge_points() {
    for (slug, _) in SLUG_FACTS {
      assert!(knowledge_point(slug).is_some(), "{slug}");
    }
  }

  #[test]
  fn override_wins_over_pool() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let fact = fun_fact_for(Domain::Geometry, "pythagorean-theorem", &mut rng);
    assert!(fact.en.contains("3-4-5"));
  }

  #[test]
  fn pool_pick_comes_from_domain() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    for _ in 0..20 {
      let fact = fun_fact_for(Domain::Calculus, "definite-integrals", &mut rng);
      assert!(pool(Domain::Calculus).iter().any(|(en, _)| *en == fact.en));
    }
  }
}
