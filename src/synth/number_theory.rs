//! Number theory: GCD (Euclid) and LCM story problems (1–3), primality by
//! trial division as a yes/no question (4–5).

use rand::Rng;

use super::{first_template, hint_pair, text, Draft};
use crate::answer::Answer;
use crate::domain::Domain;
use crate::util::{gcd, lcm, smallest_divisor};

pub fn build<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  match level {
    0..=3 => {
      if first_template(rng) {
        greatest_common_divisor(level, rng)
      } else {
        least_common_multiple(level, rng)
      }
    }
    _ => primality(level, rng),
  }
}

fn greatest_common_divisor<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  let g_hi = if level <= 2 { 6 } else { 12 };
  let g: i64 = rng.gen_range(2..=g_hi);
  let m1: i64 = rng.gen_range(2..=9);
  let mut m2: i64 = rng.gen_range(2..=9);
  if m2 == m1 {
    m2 = if m1 == 9 { 8 } else { m1 + 1 };
  }
  let (a, b) = (g * m1, g * m2);
  let answer = gcd(a, b);
  let steps = euclid_steps(a.max(b), a.min(b));

  Draft {
    domain: Domain::NumberTheory,
    slug: "gcd-lcm",
    level,
    prompt: text(
      format!("A teacher has {a} red pencils and {b} blue pencils. She wants to pack them into identical kits with no pencils left over. What is the greatest number of kits she can make?"),
      format!("老师有{a}支红铅笔和{b}支蓝铅笔，要把它们装成完全相同的文具包，并且没有剩余。最多能装多少包？"),
    ),
    answer: Answer::integer(answer),
    hints: hint_pair(
      ("The number of kits must divide both amounts exactly.".into(), "包数必须同时整除两个数量。".into()),
      (format!("Find the greatest common divisor of {a} and {b}; Euclid's algorithm repeatedly divides and keeps the remainder."), format!("求{a}和{b}的最大公约数；辗转相除法不断用除数去除余数。")),
    ),
    explanation: text(
      format!("{steps}. The last non-zero remainder is gcd({a}, {b}) = {answer}. Any common divisor of two numbers also divides their difference, which is why Euclid's shortcut works."),
      format!("{steps}。最后一个非零余数就是 gcd({a}, {b}) = {answer}。两个数的公约数也能整除它们的差，所以辗转相除法成立。"),
    ),
  }
}

fn least_common_multiple<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  let hi = match level {
    0..=1 => 10,
    2 => 15,
    _ => 20,
  };
  let a: i64 = rng.gen_range(2..=hi);
  let mut b: i64 = rng.gen_range(2..=hi);
  if b == a {
    b = if a == hi { a - 1 } else { a + 1 };
  }
  let g = gcd(a, b);
  let answer = lcm(a, b);

  Draft {
    domain: Domain::NumberTheory,
    slug: "gcd-lcm",
    level,
    prompt: text(
      format!("Bus A leaves the station every {a} minutes and Bus B every {b} minutes. They just left together. After how many minutes will they next leave together?"),
      format!("A路公交车每{a}分钟发一班，B路每{b}分钟发一班。它们刚刚同时发车，再过多少分钟会再次同时发车？"),
    ),
    answer: Answer::integer(answer),
    hints: hint_pair(
      ("Look for the first time that is a multiple of both intervals.".into(), "找同时是两个间隔倍数的最早时间。".into()),
      (format!("lcm({a}, {b}) = {a} × {b} ÷ gcd({a}, {b})."), format!("lcm({a}, {b}) = {a} × {b} ÷ gcd({a}, {b})。")),
    ),
    explanation: text(
      format!("gcd({a}, {b}) = {g}, so lcm = {a} × {b} ÷ {g} = {answer}. Repeating cycles line up again at their least common multiple."),
      format!("gcd({a}, {b}) = {g}，所以 lcm = {a} × {b} ÷ {g} = {answer}。周期性事件会在最小公倍数时再次重合。"),
    ),
  }
}

fn primality<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  let (lo, hi) = if level <= 4 { (11, 199) } else { (101, 997) };
  // Odd candidates only, so "even ⇒ not prime" isn't a giveaway.
  let n: i64 = rng.gen_range(lo / 2..=hi / 2) * 2 + 1;
  let divisor = smallest_divisor(n);
  let prime = divisor.is_none();
  let root = (n as f64).sqrt().floor() as i64;

  let prompt = if first_template(rng) {
    text(
      format!("A secret club code is valid only if it is a prime number. Is {n} a valid code? Answer yes or no."),
      format!("秘密俱乐部的密码只有是质数才有效。{n}是有效密码吗？请回答 yes 或 no。"),
    )
  } else {
    text(
      format!("A treasure chest opens only with a prime number. Will {n} open the chest? Answer yes or no."),
      format!("宝箱只能用质数打开。{n}能打开宝箱吗？请回答 yes 或 no。"),
    )
  };

  let explanation = match divisor {
    Some(d) => text(
      format!("{n} = {d} × {}, so {n} is not prime: no. Finding a single divisor between 2 and √{n} is enough to rule a number out.", n / d),
      format!("{n} = {d} × {}，所以{n}不是质数，答案是 no。只要在 2 到 √{n} 之间找到一个因数，就能排除。", n / d),
    ),
    None => text(
      format!("No whole number from 2 to {root} divides {n}, so {n} is prime: yes. If a number had a factor larger than its square root, it would also have one smaller, so checking up to √{n} is enough."),
      format!("2 到 {root} 之间没有数能整除{n}，所以{n}是质数，答案是 yes。如果一个数有大于其平方根的因数，就一定有小于平方根的因数，所以只需检查到 √{n}。"),
    ),
  };

  Draft {
    domain: Domain::NumberTheory,
    slug: "prime-numbers",
    level,
    prompt,
    answer: Answer::yes_no(prime),
    hints: hint_pair(
      ("A prime has exactly two divisors: 1 and itself.".into(), "质数只有两个因数：1和它本身。".into()),
      (format!("Try dividing {n} by 3, 5, 7, ... up to {root}."), format!("用 3、5、7…… 一直试除到 {root}。")),
    ),
    explanation,
  }
}

/// "48 = 2 × 18 + 12; 18 = 1 × 12 + 6; 12 = 2 × 6 + 0"
fn euclid_steps(mut a: i64, mut b: i64) -> String {
  let mut steps = Vec::new();
  while b != 0 {
    let q = a / b;
    let r = a % b;
    steps.push(format!("{a} = {q} × {b} + {r}"));
    a = b;
    b = r;
  }
  steps.join("; ")
}
