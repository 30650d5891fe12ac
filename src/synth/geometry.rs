//! Geometry: rectangle areas including a cut-out composite (1–2) and the
//! Pythagorean theorem in both directions (3–5), rounded to 2 decimals.

use rand::Rng;

use super::{first_template, hint_pair, text, Draft};
use crate::answer::Answer;
use crate::domain::Domain;

const PLACES: u8 = 2;

pub fn build<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  match level {
    0..=2 => rectangles(level, rng),
    _ => pythagoras(level, rng),
  }
}

fn rectangles<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  let hi = if level <= 1 { 12 } else { 25 };

  if first_template(rng) {
    let w: i64 = rng.gen_range(2..=hi);
    let h: i64 = rng.gen_range(2..=hi);
    let area = w * h;
    Draft {
      domain: Domain::Geometry,
      slug: "rectangle-area",
      level,
      prompt: text(
        format!("A garden bed is a rectangle {w} meters long and {h} meters wide. What is its area in square meters?"),
        format!("一块长方形花坛长{w}米，宽{h}米。它的面积是多少平方米？"),
      ),
      answer: Answer::integer(area),
      hints: hint_pair(
        ("Area counts the unit squares that cover the shape.".into(), "面积就是铺满图形需要多少个单位正方形。".into()),
        (format!("Multiply length by width: {w} × {h}."), format!("长乘宽：{w} × {h}。")),
      ),
      explanation: text(
        format!("Area = {w} × {h} = {area} square meters. A rectangle is an array of unit squares, so its area is rows times columns."),
        format!("面积 = {w} × {h} = {area} 平方米。长方形就是单位正方形排成的点阵，面积等于行数乘列数。"),
      ),
    }
  } else {
    let outer_w: i64 = rng.gen_range(6..=hi);
    let outer_h: i64 = rng.gen_range(6..=hi);
    let inner_w: i64 = rng.gen_range(1..outer_w);
    let inner_h: i64 = rng.gen_range(1..outer_h);
    let outer = outer_w * outer_h;
    let inner = inner_w * inner_h;
    let area = outer - inner;
    Draft {
      domain: Domain::Geometry,
      slug: "rectangle-area",
      level,
      prompt: text(
        format!("A rug is {outer_w} feet by {outer_h} feet. A rectangular hole {inner_w} feet by {inner_h} feet is cut out of it. What area of rug is left, in square feet?"),
        format!("一块地毯长{outer_w}英尺、宽{outer_h}英尺，从中剪掉一块长{inner_w}英尺、宽{inner_h}英尺的长方形。剩下的地毯面积是多少平方英尺？"),
      ),
      answer: Answer::integer(area),
      hints: hint_pair(
        ("Find the whole area, then take away the missing piece.".into(), "先求整体面积，再减去缺掉的部分。".into()),
        (format!("{outer_w} × {outer_h} minus {inner_w} × {inner_h}."), format!("{outer_w} × {outer_h} 减去 {inner_w} × {inner_h}。")),
      ),
      explanation: text(
        format!("{outer_w} × {outer_h} = {outer}, {inner_w} × {inner_h} = {inner}, and {outer} − {inner} = {area}. Composite shapes are areas added or subtracted piece by piece."),
        format!("{outer_w} × {outer_h} = {outer}，{inner_w} × {inner_h} = {inner}，{outer} − {inner} = {area}。组合图形的面积就是各部分面积的加减。"),
      ),
    }
  }
}

fn pythagoras<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  let hi = match level {
    3 => 12,
    4 => 20,
    _ => 40,
  };

  if first_template(rng) {
    let a: i64 = rng.gen_range(3..=hi);
    let b: i64 = rng.gen_range(3..=hi);
    let sq = a * a + b * b;
    let answer = Answer::decimal((sq as f64).sqrt(), PLACES);
    Draft {
      domain: Domain::Geometry,
      slug: "pythagorean-theorem",
      level,
      prompt: text(
        format!("A ladder reaches {a} m up a wall with its foot {b} m from the wall. How long is the ladder? Round to 2 decimal places."),
        format!("梯子顶端靠在墙上{a}米高处，梯脚离墙{b}米。梯子有多长？结果保留两位小数。"),
      ),
      hints: hint_pair(
        ("The wall, the ground and the ladder form a right triangle; the ladder is the hypotenuse.".into(), "墙、地面和梯子构成直角三角形，梯子是斜边。".into()),
        (format!("c² = {a}² + {b}², then take the square root."), format!("c² = {a}² + {b}²，再开平方。")),
      ),
      explanation: text(
        format!("c² = {} + {} = {sq}, so c = √{sq} ≈ {answer}. In every right triangle the squares on the legs add up to the square on the hypotenuse.", a * a, b * b),
        format!("c² = {} + {} = {sq}，所以 c = √{sq} ≈ {answer}。任何直角三角形中，两条直角边的平方和等于斜边的平方。", a * a, b * b),
      ),
      answer,
    }
  } else {
    let c: i64 = rng.gen_range(5..=hi + 5);
    let a: i64 = rng.gen_range(2..c);
    let sq = c * c - a * a;
    let answer = Answer::decimal((sq as f64).sqrt(), PLACES);
    Draft {
      domain: Domain::Geometry,
      slug: "pythagorean-theorem",
      level,
      prompt: text(
        format!("A right triangle has hypotenuse {c} cm and one leg {a} cm. How long is the other leg? Round to 2 decimal places."),
        format!("一个直角三角形的斜边长{c}厘米，一条直角边长{a}厘米。另一条直角边有多长？结果保留两位小数。"),
      ),
      hints: hint_pair(
        ("The hypotenuse is the longest side; a missing leg is found by subtracting squares.".into(), "斜边最长；求直角边要用平方相减。".into()),
        (format!("b² = {c}² − {a}², then take the square root."), format!("b² = {c}² − {a}²，再开平方。")),
      ),
      explanation: text(
        format!("b² = {} − {} = {sq}, so b = √{sq} ≈ {answer}. The theorem works in both directions: add squares for the hypotenuse, subtract for a leg.", c * c, a * a),
        format!("b² = {} − {} = {sq}，所以 b = √{sq} ≈ {answer}。勾股定理可以双向使用：求斜边用加，求直角边用减。", c * c, a * a),
      ),
      answer,
    }
  }
}
