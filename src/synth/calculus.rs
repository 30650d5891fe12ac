//! Calculus: power-rule derivatives (1–3) and definite integrals of linear
//! rates over `[0, U]` (4–5).

use rand::Rng;

use super::{first_template, hint_pair, text, Draft};
use crate::answer::Answer;
use crate::domain::Domain;

pub fn build<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  match level {
    0..=3 => derivative(level, rng),
    _ => integral(level, rng),
  }
}

/// `c·x^p` written the way learners type it: `6x^2`, `6x`, `6`.
fn monomial(c: i64, p: u32) -> String {
  match p {
    0 => c.to_string(),
    1 => format!("{c}x"),
    _ => format!("{c}x^{p}"),
  }
}

fn derivative<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  let a_hi = if level <= 1 { 5 } else { 9 };
  let a: i64 = rng.gen_range(2..=a_hi);
  let n: u32 = rng.gen_range(2..=(level as u32 + 3));
  let lead = a * n as i64;
  let lead_term = monomial(lead, n - 1);

  if first_template(rng) {
    let answer = Answer::symbolic(lead_term.clone());
    Draft {
      domain: Domain::Calculus,
      slug: "power-rule-derivatives",
      level,
      prompt: text(
        format!("Find the derivative of f(x) = {a}x^{n}."),
        format!("求 f(x) = {a}x^{n} 的导数。"),
      ),
      hints: hint_pair(
        ("Power rule: d/dx xⁿ = n·xⁿ⁻¹.".into(), "幂函数求导法则：d/dx xⁿ = n·xⁿ⁻¹。".into()),
        (format!("Bring the exponent {n} down in front and lower it by one."), format!("把指数{n}乘到前面，再把指数减一。")),
      ),
      explanation: text(
        format!("f'(x) = {a}·{n}·x^{} = {answer}. The derivative measures how fast f changes, and for powers that rate follows the power rule.", n - 1),
        format!("f'(x) = {a}·{n}·x^{} = {answer}。导数表示函数变化的快慢，幂函数的变化率遵循幂法则。", n - 1),
      ),
      answer,
    }
  } else {
    let b: i64 = rng.gen_range(1..=9);
    let answer = Answer::symbolic(format!("{lead_term} + {b}"));
    Draft {
      domain: Domain::Calculus,
      slug: "power-rule-derivatives",
      level,
      prompt: text(
        format!("A drone's height is h(x) = {a}x^{n} + {b}x. Find h'(x)."),
        format!("无人机的高度为 h(x) = {a}x^{n} + {b}x。求 h'(x)。"),
      ),
      hints: hint_pair(
        ("Differentiate each term separately and add the results.".into(), "逐项求导，再把结果相加。".into()),
        (format!("d/dx {a}x^{n} = {lead_term} and d/dx {b}x = {b}."), format!("d/dx {a}x^{n} = {lead_term}，d/dx {b}x = {b}。")),
      ),
      explanation: text(
        format!("h'(x) = {lead_term} + {b} = {answer}. The derivative of a sum is the sum of the derivatives, and a linear term bx has constant slope b."),
        format!("h'(x) = {lead_term} + {b} = {answer}。和的导数等于导数的和，一次项 bx 的斜率恒为 b。"),
      ),
      answer,
    }
  }
}

fn integral<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  let u_hi = if level <= 4 { 8 } else { 12 };
  let upper: i64 = rng.gen_range(2..=u_hi);

  if first_template(rng) {
    // ∫₀ᵁ t dt = U²/2
    let sq = upper * upper;
    let answer = Answer::fraction(sq, 2);
    Draft {
      domain: Domain::Calculus,
      slug: "definite-integrals",
      level,
      prompt: text(
        format!("Evaluate the definite integral of t dt from 0 to {upper}."),
        format!("计算 t 从 0 到 {upper} 的定积分 ∫ t dt。"),
      ),
      hints: hint_pair(
        ("An antiderivative of t is t²/2.".into(), "t 的一个原函数是 t²/2。".into()),
        (format!("Evaluate t²/2 at {upper} and subtract its value at 0."), format!("把 t = {upper} 代入 t²/2，再减去 t = 0 时的值。")),
      ),
      explanation: text(
        format!("[t²/2] from 0 to {upper} = {sq}/2 − 0 = {answer}. Geometrically it is the area of a triangle with base and height {upper}."),
        format!("[t²/2] 从 0 到 {upper} = {sq}/2 − 0 = {answer}。几何上，它就是底和高都为{upper}的三角形面积。"),
      ),
      answer,
    }
  } else {
    let a: i64 = rng.gen_range(1..=if_level(level, 4, 6));
    let b: i64 = rng.gen_range(1..=if_level(level, 5, 9));
    // a·U²/2 + b·U over a common denominator.
    let num = a * upper * upper + 2 * b * upper;
    let answer = Answer::fraction(num, 2);
    Draft {
      domain: Domain::Calculus,
      slug: "definite-integrals",
      level,
      prompt: text(
        format!("Water flows into a tank at r(t) = {a}t + {b} liters per minute. How many liters flow in from t = 0 to t = {upper}? Give an exact answer."),
        format!("水以 r(t) = {a}t + {b} 升/分钟的速度流入水箱。从 t = 0 到 t = {upper} 一共流入多少升？请给出精确值。"),
      ),
      hints: hint_pair(
        ("Total change is the integral of the rate.".into(), "总变化量等于变化率的积分。".into()),
        (format!("An antiderivative is {a}t²/2 + {b}t; evaluate it at {upper} and at 0."), format!("原函数是 {a}t²/2 + {b}t；分别代入 {upper} 和 0。")),
      ),
      explanation: text(
        format!("{a}·{upper}²/2 + {b}·{upper} = {num}/2 = {answer} liters. The fundamental theorem of calculus turns accumulated flow into a difference of antiderivative values."),
        format!("{a}·{upper}²/2 + {b}·{upper} = {num}/2 = {answer} 升。微积分基本定理把累积量变成原函数值之差。"),
      ),
      answer,
    }
  }
}

fn if_level(level: u8, low: i64, high: i64) -> i64 {
  if level <= 4 { low } else { high }
}

#[cfg(test)]
mod tests {
  use rand::SeedableRng;
  use rand_chacha::ChaCha8Rng;

  use super::*;
  use crate::validator::DEFAULT_TOLERANCE;

  #[test]
  fn monomials_render_compactly() {
    assert_eq!(monomial(6, 2), "6x^2");
    assert_eq!(monomial(6, 1), "6x");
    assert_eq!(monomial(6, 0), "6");
  }

  #[test]
  fn derivatives_are_symbolic_polynomials() {
    let mut rng = ChaCha8Rng::seed_from_u64(81);
    for level in 1..=3 {
      for _ in 0..100 {
        let d = build(level, &mut rng);
        let Answer::Symbolic { text } = &d.answer else { panic!("expected symbolic") };
        assert!(text.contains('x'));
        let spaced = text.replace('x', " * x");
        assert!(d.answer.accepts(&spaced, DEFAULT_TOLERANCE), "{spaced} vs {text}");
      }
    }
  }

  #[test]
  fn integral_of_t_is_half_square() {
    let mut rng = ChaCha8Rng::seed_from_u64(82);
    for _ in 0..100 {
      let d = build(4, &mut rng);
      if d.prompt.en.starts_with("Evaluate") {
        let upper: f64 = d
          .prompt
          .en
          .trim_end_matches('.')
          .rsplit(' ')
          .next()
          .and_then(|s| s.parse().ok())
          .unwrap();
        assert!((d.answer.value().unwrap() - upper * upper / 2.0).abs() < 1e-9);
      }
    }
  }
}
