//! Algebra: one-step equations (1–2), two-step equations and proportions
//! (3–4), quadratics by roots or by completed square (5).

use rand::Rng;

use super::{first_template, hint_pair, text, Draft};
use crate::answer::Answer;
use crate::domain::Domain;

pub fn build<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  match level {
    0..=2 => one_step(level, rng),
    3..=4 => {
      if first_template(rng) {
        two_step(level, rng)
      } else {
        proportion(level, rng)
      }
    }
    _ => quadratic(level, rng),
  }
}

fn one_step<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  let hi = if level <= 1 { 20 } else { 50 };
  let k: i64 = rng.gen_range(1..=hi);

  if first_template(rng) {
    let x: i64 = rng.gen_range(1..=hi);
    let rhs = x + k;
    Draft {
      domain: Domain::Algebra,
      slug: "linear-equations-basic",
      level,
      prompt: text(
        format!("A mystery box holds x marbles. After adding {k} more there are {rhs}. Solve x + {k} = {rhs}."),
        format!("神秘盒子里有x颗弹珠，再放进{k}颗后共有{rhs}颗。解方程 x + {k} = {rhs}。"),
      ),
      answer: Answer::integer(x),
      hints: hint_pair(
        ("Undo the addition to get x by itself.".into(), "把加上的数去掉，让x单独留在一边。".into()),
        (format!("Subtract {k} from both sides."), format!("两边同时减去{k}。")),
      ),
      explanation: text(
        format!("x = {rhs} − {k} = {x}. Whatever you do to one side of an equation you must do to the other to keep it balanced."),
        format!("x = {rhs} − {k} = {x}。方程两边做同样的运算，等式才保持平衡。"),
      ),
    }
  } else {
    // x − k stays positive for young learners.
    let x: i64 = k + rng.gen_range(1..=hi);
    let rhs = x - k;
    Draft {
      domain: Domain::Algebra,
      slug: "linear-equations-basic",
      level,
      prompt: text(
        format!("Leo had x stickers and gave away {k}. Now he has {rhs}. Solve x − {k} = {rhs}."),
        format!("小乐原有x张贴纸，送出{k}张后还剩{rhs}张。解方程 x − {k} = {rhs}。"),
      ),
      answer: Answer::integer(x),
      hints: hint_pair(
        ("Undo the subtraction to get x by itself.".into(), "把减去的数加回来，让x单独留下。".into()),
        (format!("Add {k} to both sides."), format!("两边同时加上{k}。")),
      ),
      explanation: text(
        format!("x = {rhs} + {k} = {x}. Addition and subtraction undo each other."),
        format!("x = {rhs} + {k} = {x}。加法和减法互为逆运算。"),
      ),
    }
  }
}

fn two_step<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  let hi = if level <= 3 { 12 } else { 25 };
  let a: i64 = rng.gen_range(2..=9);
  let x: i64 = rng.gen_range(1..=hi);
  let b: i64 = rng.gen_range(1..=20);
  let rhs = a * x + b;

  Draft {
    domain: Domain::Algebra,
    slug: "linear-equations-two-step",
    level,
    prompt: text(
      format!("A gym charges a {b} dollar joining fee plus {a} dollars per visit. Sam paid {rhs} dollars in total. Solve {a}x + {b} = {rhs} for the number of visits x."),
      format!("健身房入会费{b}元，每次{a}元。小山一共付了{rhs}元。解方程 {a}x + {b} = {rhs}，求次数x。"),
    ),
    answer: Answer::integer(x),
    hints: hint_pair(
      ("Undo the operations in reverse order: addition first, then multiplication.".into(), "按相反顺序还原：先去掉加法，再去掉乘法。".into()),
      (format!("Subtract {b} from both sides, then divide by {a}."), format!("两边先减{b}，再除以{a}。")),
    ),
    explanation: text(
      format!("{a}x = {rhs} − {b} = {}, so x = {} ÷ {a} = {x}. Peeling off the last operation first is how every linear equation unwinds.", rhs - b, rhs - b),
      format!("{a}x = {rhs} − {b} = {}，所以 x = {} ÷ {a} = {x}。先撤销最后做的运算，线性方程就能一步步解开。", rhs - b, rhs - b),
    ),
  }
}

fn proportion<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  let d2: i64 = rng.gen_range(2..=9);
  let n: i64 = rng.gen_range(1..=12);
  let m_hi = if level <= 3 { 4 } else { 8 };
  let m: i64 = rng.gen_range(2..=m_hi);
  let d1 = d2 * m;
  // x/d1 = n/d2  ⇒  x = n·d1/d2, exact by construction.
  let x = n * d1 / d2;

  Draft {
    domain: Domain::Algebra,
    slug: "proportions",
    level,
    prompt: text(
      format!("A recipe uses {n} cups of flour for every {d2} muffins. How many cups x are needed for {d1} muffins? Solve x/{d1} = {n}/{d2}."),
      format!("食谱中每做{d2}个松饼要用{n}杯面粉。做{d1}个松饼需要多少杯x？解比例 x/{d1} = {n}/{d2}。"),
    ),
    answer: Answer::integer(x),
    hints: hint_pair(
      ("Cross-multiply to turn the proportion into a plain equation.".into(), "交叉相乘，把比例变成普通方程。".into()),
      (format!("{d2}·x = {n} × {d1}; divide both sides by {d2}."), format!("{d2}·x = {n} × {d1}，两边除以{d2}。")),
    ),
    explanation: text(
      format!("{d2}x = {}, so x = {} ÷ {d2} = {x}. Equal ratios scale together: {d1} is {m} times {d2}, so x is {m} times {n}.", n * d1, n * d1),
      format!("{d2}x = {}，所以 x = {} ÷ {d2} = {x}。比值相等就同步放大：{d1}是{d2}的{m}倍，x也是{n}的{m}倍。", n * d1, n * d1),
    ),
  }
}

fn quadratic<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  if first_template(rng) {
    let r1: i64 = rng.gen_range(1..=11);
    let r2: i64 = rng.gen_range(r1 + 1..=12);
    let sum = r1 + r2;
    let product = r1 * r2;
    Draft {
      domain: Domain::Algebra,
      slug: "quadratic-equations",
      level,
      prompt: text(
        format!("Solve x² − {sum}x + {product} = 0 and give the larger root."),
        format!("解方程 x² − {sum}x + {product} = 0，写出较大的根。"),
      ),
      answer: Answer::integer(r2),
      hints: hint_pair(
        (format!("Look for two numbers that add to {sum} and multiply to {product}."), format!("找两个数，它们的和是{sum}，积是{product}。")),
        ("Write the equation as (x − p)(x − q) = 0; each factor gives one root.".into(), "写成 (x − p)(x − q) = 0，每个因式给出一个根。".into()),
      ),
      explanation: text(
        format!("x² − {sum}x + {product} = (x − {r1})(x − {r2}), so x = {r1} or x = {r2}; the larger root is {r2}. The sum and product of the roots are read straight off the coefficients."),
        format!("x² − {sum}x + {product} = (x − {r1})(x − {r2})，所以 x = {r1} 或 x = {r2}，较大的根是{r2}。两根之和与两根之积可以直接从系数读出。"),
      ),
    }
  } else {
    let shift: i64 = rng.gen_range(1..=10);
    let k: i64 = rng.gen_range(1..=9);
    let c = k * k;
    let larger = shift + k;
    let smaller = shift - k;
    Draft {
      domain: Domain::Algebra,
      slug: "quadratic-equations",
      level,
      prompt: text(
        format!("Solve (x − {shift})² = {c} and give the larger of the two solutions."),
        format!("解方程 (x − {shift})² = {c}，写出两个解中较大的那个。"),
      ),
      answer: Answer::integer(larger),
      hints: hint_pair(
        ("Take the square root of both sides, remembering both signs.".into(), "两边开平方，别忘了正负两个根。".into()),
        (format!("x − {shift} = ±{k}, so x = {shift} ± {k}."), format!("x − {shift} = ±{k}，所以 x = {shift} ± {k}。")),
      ),
      explanation: text(
        format!("x = {shift} + {k} = {larger} or x = {shift} − {k} = {smaller}; the larger is {larger}. A completed square turns a quadratic into a one-step square root."),
        format!("x = {shift} + {k} = {larger} 或 x = {shift} − {k} = {smaller}，较大的是{larger}。配方后，二次方程只需开一次平方。"),
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
  fn bands_map_to_knowledge_points() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..40 {
      assert_eq!(build(1, &mut rng).slug, "linear-equations-basic");
      let mid = build(3, &mut rng).slug;
      assert!(mid == "linear-equations-two-step" || mid == "proportions");
      assert_eq!(build(5, &mut rng).slug, "quadratic-equations");
    }
  }

  #[test]
  fn quadratic_answer_is_a_root() {
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    for _ in 0..100 {
      let d = quadratic(5, &mut rng);
      let Answer::Integer { value } = d.answer else { panic!("integer root expected") };
      assert!(d.explanation.en.contains(&format!("{value}")));
    }
  }
}
