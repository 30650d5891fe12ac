//! Fractions: like-denominator addition and fraction-of-a-whole (1–3),
//! unlike-denominator addition and fraction × integer (4–5). Every result is
//! reduced through `Answer::fraction`.

use rand::Rng;

use super::{first_template, hint_pair, text, Draft};
use crate::answer::Answer;
use crate::domain::Domain;

pub fn build<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  match level {
    0..=3 => {
      if first_template(rng) {
        like_addition(level, rng)
      } else {
        fraction_of_whole(level, rng)
      }
    }
    _ => {
      if first_template(rng) {
        unlike_addition(level, rng)
      } else {
        scaling(level, rng)
      }
    }
  }
}

fn like_addition<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  let den: i64 = rng.gen_range(3..=band_max(level, 8, 12));
  let a: i64 = rng.gen_range(1..den);
  let b: i64 = rng.gen_range(1..den);
  let sum = a + b;
  let answer = Answer::fraction(sum, den);

  Draft {
    domain: Domain::Fractions,
    slug: "fraction-addition-like",
    level,
    prompt: text(
      format!("Ana ate {a}/{den} of a pizza and Ben ate {b}/{den} of the same pizza. What fraction of the pizza did they eat together? Give your answer in simplest form."),
      format!("安娜吃了一个披萨的{a}/{den}，本吃了同一个披萨的{b}/{den}。他们一共吃了这个披萨的几分之几？请写成最简形式。"),
    ),
    hints: hint_pair(
      ("The pieces are the same size, so only the counts of pieces add.".into(), "每一块一样大，只需把块数相加。".into()),
      (format!("Add the numerators {a} + {b} and keep the denominator {den}, then simplify."), format!("分子相加 {a} + {b}，分母{den}不变，再约分。")),
    ),
    explanation: text(
      format!("{a}/{den} + {b}/{den} = {sum}/{den} = {answer}. The denominator names the size of the pieces, and that does not change when you add."),
      format!("{a}/{den} + {b}/{den} = {sum}/{den} = {answer}。分母表示每块的大小，相加时不会改变。"),
    ),
    answer,
  }
}

fn fraction_of_whole<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  let den: i64 = rng.gen_range(2..=band_max(level, 6, 10));
  let num: i64 = rng.gen_range(1..den);
  let groups: i64 = rng.gen_range(2..=band_max(level, 6, 12));
  let whole = den * groups;
  let answer = Answer::fraction(num * whole, den);

  Draft {
    domain: Domain::Fractions,
    slug: "fraction-of-whole",
    level,
    prompt: text(
      format!("A class has {whole} students and {num}/{den} of them walk to school. How many students walk to school?"),
      format!("一个班有{whole}名学生，其中{num}/{den}步行上学。有多少名学生步行上学？"),
    ),
    hints: hint_pair(
      (format!("Split the {whole} students into {den} equal groups."), format!("把{whole}名学生平均分成{den}组。")),
      (format!("One group is {whole} ÷ {den}; take {num} of those groups."), format!("一组是 {whole} ÷ {den}，取其中{num}组。")),
    ),
    explanation: text(
      format!("{whole} ÷ {den} = {groups}, and {groups} × {num} = {answer}. Taking a fraction of a number means dividing by the denominator and multiplying by the numerator."),
      format!("{whole} ÷ {den} = {groups}，{groups} × {num} = {answer}。求一个数的几分之几，就是先除以分母再乘分子。"),
    ),
    answer,
  }
}

fn unlike_addition<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  let hi = band_max(level, 9, 12);
  let b: i64 = rng.gen_range(2..=hi);
  let mut d: i64 = rng.gen_range(2..=hi);
  if d == b {
    d = if b == hi { b - 1 } else { b + 1 };
  }
  let a: i64 = rng.gen_range(1..b);
  let c: i64 = rng.gen_range(1..d);
  // Cross-multiply onto the common denominator b·d.
  let num = a * d + c * b;
  let den = b * d;
  let answer = Answer::fraction(num, den);

  Draft {
    domain: Domain::Fractions,
    slug: "fraction-addition-unlike",
    level,
    prompt: text(
      format!("A jug holds {a}/{b} liter of juice and another holds {c}/{d} liter. How much juice is there altogether? Give your answer in simplest form."),
      format!("一个壶里有{a}/{b}升果汁，另一个壶里有{c}/{d}升。一共有多少升果汁？请写成最简形式。"),
    ),
    hints: hint_pair(
      ("You can only add pieces of the same size, so find a common denominator first.".into(), "只有同样大小的块才能直接相加，先通分。".into()),
      (format!("Use {b} × {d} = {den} as the denominator: {a}×{d}/{den} + {c}×{b}/{den}."), format!("用 {b} × {d} = {den} 作公分母：{a}×{d}/{den} + {c}×{b}/{den}。")),
    ),
    explanation: text(
      format!("{a}/{b} + {c}/{d} = {}/{den} + {}/{den} = {num}/{den} = {answer}. Rewriting both fractions over one denominator makes the pieces comparable.", a * d, c * b),
      format!("{a}/{b} + {c}/{d} = {}/{den} + {}/{den} = {num}/{den} = {answer}。通分后两个分数的“块”一样大，才能相加。", a * d, c * b),
    ),
    answer,
  }
}

fn scaling<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  let den: i64 = rng.gen_range(2..=band_max(level, 9, 12));
  let num: i64 = rng.gen_range(1..den);
  let k: i64 = rng.gen_range(2..=band_max(level, 9, 15));
  let product = num * k;
  let answer = Answer::fraction(product, den);

  Draft {
    domain: Domain::Fractions,
    slug: "fraction-scaling",
    level,
    prompt: text(
      format!("Each smoothie needs {num}/{den} cup of yogurt. How many cups are needed for {k} smoothies? Give your answer in simplest form."),
      format!("每杯奶昔需要{num}/{den}杯酸奶。做{k}杯奶昔需要多少杯酸奶？请写成最简形式。"),
    ),
    hints: hint_pair(
      ("Repeated equal amounts mean multiplication.".into(), "相同的量重复多次，用乘法。".into()),
      (format!("Multiply only the numerator: {num} × {k} over {den}, then simplify."), format!("只把分子相乘：{num} × {k}，分母仍是{den}，再约分。")),
    ),
    explanation: text(
      format!("{num}/{den} × {k} = {product}/{den} = {answer}. Multiplying by a whole number counts more pieces of the same size."),
      format!("{num}/{den} × {k} = {product}/{den} = {answer}。乘以整数就是数出更多同样大小的块。"),
    ),
    answer,
  }
}

/// Upper bound for a draw: the lower level of each band gets the smaller range.
fn band_max(level: u8, low: i64, high: i64) -> i64 {
  if level <= 2 || level == 4 { low } else { high }
}

#[cfg(test)]
mod tests {
  use rand::SeedableRng;
  use rand_chacha::ChaCha8Rng;

  use super::*;
  use crate::util::gcd;

  #[test]
  fn results_are_in_lowest_terms() {
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    for level in 1..=5 {
      for _ in 0..200 {
        match build(level, &mut rng).answer {
          Answer::Fraction { num, den } => {
            assert!(den > 1);
            assert_eq!(gcd(num, den), 1);
          }
          Answer::Integer { .. } => {}
          other => panic!("unexpected {other:?}"),
        }
      }
    }
  }

  #[test]
  fn unlike_denominators_differ() {
    let mut rng = ChaCha8Rng::seed_from_u64(32);
    for _ in 0..200 {
      let d = unlike_addition(5, &mut rng);
      let en = &d.prompt.en;
      // "holds a/b liter ... holds c/d liter"
      let fracs: Vec<&str> = en.split_whitespace().filter(|w| w.contains('/')).collect();
      let den = |s: &str| s.split('/').nth(1).unwrap().to_string();
      assert_ne!(den(fracs[0]), den(fracs[1]));
    }
  }
}
