//! Arithmetic: multi-digit addition/subtraction (1–2), array multiplication
//! with a bonus term (3–4), powers with an optional coefficient (5).

use rand::Rng;

use super::{first_template, hint_pair, text, Draft};
use crate::answer::Answer;
use crate::domain::Domain;

pub fn build<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  match level {
    0..=2 => add_subtract(level, rng),
    3..=4 => arrays(level, rng),
    _ => powers(level, rng),
  }
}

fn add_subtract<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  let (lo, hi) = if level <= 1 { (10, 99) } else { (100, 999) };
  let a: i64 = rng.gen_range(lo..=hi);
  let b: i64 = rng.gen_range(lo..=hi);

  if first_template(rng) {
    let sum = a + b;
    Draft {
      domain: Domain::Arithmetic,
      slug: "add-subtract-multi-digit",
      level,
      prompt: text(
        format!("The school library has {a} books. A donation brings {b} more. How many books does the library have now?"),
        format!("学校图书馆有{a}本书，又收到捐赠的{b}本。图书馆现在一共有多少本书？"),
      ),
      answer: Answer::integer(sum),
      hints: hint_pair(
        ("Putting two groups together means adding.".into(), "把两部分合在一起，用加法。".into()),
        (format!("Line up the place values and add {a} + {b}, carrying when a column passes 9."), format!("数位对齐计算 {a} + {b}，满十进一。")),
      ),
      explanation: text(
        format!("{a} + {b} = {sum}. Adding column by column from the ones place keeps every carry in the right spot."),
        format!("{a} + {b} = {sum}。从个位起逐位相加，进位就不会出错。"),
      ),
    }
  } else {
    let (big, small) = if a >= b { (a, b) } else { (b, a) };
    let left = big - small;
    Draft {
      domain: Domain::Arithmetic,
      slug: "add-subtract-multi-digit",
      level,
      prompt: text(
        format!("A baker made {big} cookies and sold {small} of them. How many cookies are left?"),
        format!("面包师做了{big}块饼干，卖掉了{small}块。还剩多少块饼干？"),
      ),
      answer: Answer::integer(left),
      hints: hint_pair(
        ("Taking some away from a group means subtracting.".into(), "从总数里拿走一部分，用减法。".into()),
        (format!("Compute {big} − {small}, borrowing from the next column when needed."), format!("计算 {big} − {small}，不够减时向前一位借一。")),
      ),
      explanation: text(
        format!("{big} − {small} = {left}. Check it backwards: {left} + {small} = {big}."),
        format!("{big} − {small} = {left}。用加法验算：{left} + {small} = {big}。"),
      ),
    }
  }
}

fn arrays<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  let (lo, hi) = if level <= 3 { (3, 9) } else { (6, 15) };
  let rows: i64 = rng.gen_range(lo..=hi);
  let cols: i64 = rng.gen_range(lo..=hi);
  let bonus: i64 = rng.gen_range(1..=hi);
  let product = rows * cols;
  let total = product + bonus;

  let (prompt, hints) = if first_template(rng) {
    (
      text(
        format!("Chairs for the school concert are set out in {rows} rows of {cols}. Then {bonus} extra chairs are added at the back. How many chairs are there in all?"),
        format!("学校音乐会的椅子摆成{rows}排，每排{cols}把，后面又加了{bonus}把。一共有多少把椅子？"),
      ),
      hint_pair(
        ("Equal rows form an array; count it with multiplication.".into(), "每排一样多就是点阵，可以用乘法来数。".into()),
        (format!("First find {rows} × {cols}, then add the {bonus} extra chairs."), format!("先算 {rows} × {cols}，再加上多出的{bonus}把。")),
      ),
    )
  } else {
    (
      text(
        format!("A sticker sheet has {rows} rows with {cols} stickers in each row. Mia also has {bonus} loose stickers. How many stickers does she have?"),
        format!("一张贴纸有{rows}行，每行{cols}个。米娅另外还有{bonus}个散贴纸。她一共有多少个贴纸？"),
      ),
      hint_pair(
        ("Count the full sheet first, then the loose ones.".into(), "先数整张贴纸，再数散的。".into()),
        (format!("The sheet holds {rows} × {cols} stickers; add {bonus} to that."), format!("整张有 {rows} × {cols} 个，再加上{bonus}个。")),
      ),
    )
  };

  Draft {
    domain: Domain::Arithmetic,
    slug: "multiplication-arrays",
    level,
    prompt,
    answer: Answer::integer(total),
    hints,
    explanation: text(
      format!("{rows} × {cols} = {product}, and {product} + {bonus} = {total}. Multiplication is fast repeated addition of equal rows."),
      format!("{rows} × {cols} = {product}，{product} + {bonus} = {total}。乘法就是相同行数的快速连加。"),
    ),
  }
}

fn powers<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  let base: i64 = rng.gen_range(2..=9);
  let exp: u32 = rng.gen_range(2..=4);
  let power = base.pow(exp);

  if first_template(rng) {
    Draft {
      domain: Domain::Arithmetic,
      slug: "exponents-powers",
      level,
      prompt: text(
        format!("A rumor starts with {base} people, and each round every person tells {base} new people, so after {exp} rounds {base}^{exp} people know. What is {base}^{exp}?"),
        format!("一个消息从{base}个人开始，每一轮每人再告诉{base}个新的人，{exp}轮后共有{base}^{exp}人知道。{base}^{exp}等于多少？"),
      ),
      answer: Answer::integer(power),
      hints: hint_pair(
        (format!("{base}^{exp} means multiplying {base} by itself {exp} times."), format!("{base}^{exp}表示{exp}个{base}相乘。")),
        (format!("Work step by step: {base}, then × {base}, and so on until you have {exp} factors."), format!("一步一步乘：{base}，再乘{base}……直到乘够{exp}个。")),
      ),
      explanation: text(
        format!("{base}^{exp} = {power}. Exponents grow quickly because each step multiplies rather than adds."),
        format!("{base}^{exp} = {power}。幂增长得很快，因为每一步都是乘而不是加。"),
      ),
    }
  } else {
    let coef: i64 = rng.gen_range(2..=5);
    let total = coef * power;
    Draft {
      domain: Domain::Arithmetic,
      slug: "exponents-powers",
      level,
      prompt: text(
        format!("Evaluate {coef} × {base}^{exp}."),
        format!("计算 {coef} × {base}^{exp}。"),
      ),
      answer: Answer::integer(total),
      hints: hint_pair(
        ("Exponents come before multiplication in the order of operations.".into(), "按运算顺序，先算乘方再算乘法。".into()),
        (format!("Find {base}^{exp} first, then multiply the result by {coef}."), format!("先求{base}^{exp}，再乘以{coef}。")),
      ),
      explanation: text(
        format!("{base}^{exp} = {power}, and {coef} × {power} = {total}. The coefficient scales the power only after the power is evaluated."),
        format!("{base}^{exp} = {power}，{coef} × {power} = {total}。系数要在乘方算完之后再乘。"),
      ),
    }
  }
}

#[cfg(test)]
mod tests {
  use rand::SeedableRng;
  use rand_chacha::ChaCha8Rng;

  use super::*;

  #[test]
  fn answers_are_positive_integers() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for level in 1..=5 {
      for _ in 0..50 {
        match build(level, &mut rng).answer {
          Answer::Integer { value } => assert!(value >= 0),
          other => panic!("unexpected answer {other:?}"),
        }
      }
    }
  }

  #[test]
  fn level_bands_pick_the_right_skill() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    assert_eq!(build(2, &mut rng).slug, "add-subtract-multi-digit");
    assert_eq!(build(4, &mut rng).slug, "multiplication-arrays");
    assert_eq!(build(5, &mut rng).slug, "exponents-powers");
  }
}
