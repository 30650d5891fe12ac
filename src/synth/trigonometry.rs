//! Trigonometry: exact values at the special angles (1–3) and SOH/CAH ratios
//! from integer sides of a right triangle (4–5).

use rand::seq::SliceRandom;
use rand::Rng;

use super::{first_template, hint_pair, text, Draft};
use crate::answer::Answer;
use crate::domain::Domain;

#[derive(Clone, Copy)]
enum Ratio {
  Sin,
  Cos,
  Tan,
}

impl Ratio {
  fn name(self) -> &'static str {
    match self {
      Ratio::Sin => "sin",
      Ratio::Cos => "cos",
      Ratio::Tan => "tan",
    }
  }
}

struct SpecialAngle {
  ratio: Ratio,
  degrees: u32,
  /// Exact value as written in the answer.
  exact: &'static str,
  /// Where the value comes from, bilingual.
  why_en: &'static str,
  why_zh: &'static str,
}

static SPECIAL_ANGLES: [SpecialAngle; 5] = [
  SpecialAngle {
    ratio: Ratio::Sin,
    degrees: 30,
    exact: "1/2",
    why_en: "half of an equilateral triangle has hypotenuse 2 and short side 1",
    why_zh: "等边三角形对半分后，斜边为2，短边为1",
  },
  SpecialAngle {
    ratio: Ratio::Cos,
    degrees: 60,
    exact: "1/2",
    why_en: "the side next to 60° in a half equilateral triangle is 1 and the hypotenuse is 2",
    why_zh: "半个等边三角形中，60°角的邻边是1，斜边是2",
  },
  SpecialAngle {
    ratio: Ratio::Tan,
    degrees: 45,
    exact: "1",
    why_en: "a 45° right triangle has two equal legs",
    why_zh: "45°直角三角形的两条直角边相等",
  },
  SpecialAngle {
    ratio: Ratio::Sin,
    degrees: 45,
    exact: "√2/2",
    why_en: "a 45° right triangle with legs 1 has hypotenuse √2, and 1/√2 = √2/2",
    why_zh: "直角边为1的等腰直角三角形斜边是√2，1/√2 = √2/2",
  },
  SpecialAngle {
    ratio: Ratio::Cos,
    degrees: 30,
    exact: "√3/2",
    why_en: "half of an equilateral triangle with side 2 has height √3",
    why_zh: "边长为2的等边三角形对半分后，高是√3",
  },
];

pub fn build<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  match level {
    0..=3 => special_angle(level, rng),
    _ => side_ratio(level, rng),
  }
}

fn exact_answer(exact: &str) -> Answer {
  match exact {
    "1/2" => Answer::fraction(1, 2),
    "1" => Answer::integer(1),
    radical => Answer::symbolic(radical),
  }
}

fn special_angle<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  let entry = SPECIAL_ANGLES.choose(rng).unwrap_or(&SPECIAL_ANGLES[0]);
  let f = entry.ratio.name();
  let deg = entry.degrees;
  let answer = exact_answer(entry.exact);
  let (why_en, why_zh) = (entry.why_en, entry.why_zh);

  let prompt = if first_template(rng) {
    text(
      format!("What is the exact value of {f}({deg}°)? Write it as a fraction or with √ if needed."),
      format!("{f}({deg}°) 的精确值是多少？如有需要请写成分数或用√表示。"),
    )
  } else {
    text(
      format!("A skateboard ramp meets the ground at {deg}°. Its designer needs {f}({deg}°) exactly, not as a rounded decimal. What is it?"),
      format!("一个滑板坡道与地面成{deg}°角。设计师需要 {f}({deg}°) 的精确值，而不是近似小数。它是多少？"),
    )
  };

  Draft {
    domain: Domain::Trigonometry,
    slug: "special-angles",
    level,
    prompt,
    hints: hint_pair(
      ("The special angles come from two triangles: half an equilateral triangle and an isosceles right triangle.".into(), "特殊角来自两个三角形：半个等边三角形和等腰直角三角形。".into()),
      (format!("Draw the triangle containing {deg}° and label its sides."), format!("画出含{deg}°角的三角形并标出各边长度。")),
    ),
    explanation: text(
      format!("{f}({deg}°) = {answer}, because {why_en}."),
      format!("{f}({deg}°) = {answer}，因为{why_zh}。"),
    ),
    answer,
  }
}

fn side_ratio<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  let hi = if level <= 4 { 15 } else { 30 };
  let hyp: i64 = rng.gen_range(5..=hi);
  let side: i64 = rng.gen_range(1..hyp);
  let answer = Answer::fraction(side, hyp);

  let (ratio, word_en, word_zh, rule) = if first_template(rng) {
    (Ratio::Sin, "opposite", "对边", "SOH: sin = opposite / hypotenuse")
  } else {
    (Ratio::Cos, "adjacent", "邻边", "CAH: cos = adjacent / hypotenuse")
  };
  let f = ratio.name();

  Draft {
    domain: Domain::Trigonometry,
    slug: "trig-ratios",
    level,
    prompt: text(
      format!("In right triangle ABC with the right angle at C, the side {word_en} angle A is {side} and the hypotenuse is {hyp}. What is {f}(A)? Give a fraction in simplest form."),
      format!("直角三角形ABC中，C为直角，角A的{word_zh}长{side}，斜边长{hyp}。{f}(A) 等于多少？请写成最简分数。"),
    ),
    hints: hint_pair(
      (format!("Remember {rule}."), format!("记住 {rule}。")),
      (format!("Put {side} over {hyp} and simplify."), format!("用{side}除以{hyp}，再约分。")),
    ),
    explanation: text(
      format!("{f}(A) = {word_en} / hypotenuse = {side}/{hyp} = {answer}. A ratio of sides depends only on the angle, not on how big the triangle is."),
      format!("{f}(A) = {word_zh} / 斜边 = {side}/{hyp} = {answer}。边长之比只取决于角的大小，与三角形的大小无关。"),
    ),
    answer,
  }
}
