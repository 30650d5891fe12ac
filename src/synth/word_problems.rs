//! Word problems: distance/speed/time both ways (1–3) and simple interest
//! both ways (4–5).

use rand::Rng;

use super::{first_template, hint_pair, text, Draft};
use crate::answer::Answer;
use crate::domain::Domain;

pub fn build<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  match level {
    0..=3 => {
      if first_template(rng) {
        distance(level, rng)
      } else {
        speed(level, rng)
      }
    }
    _ => {
      if first_template(rng) {
        interest(level, rng)
      } else {
        interest_time(level, rng)
      }
    }
  }
}

fn draw_trip<R: Rng + ?Sized>(level: u8, rng: &mut R) -> (i64, i64) {
  let (v_lo, v_hi) = match level {
    0..=1 => (3, 12),
    2 => (10, 60),
    _ => (40, 120),
  };
  let t_hi = if level <= 2 { 5 } else { 9 };
  (rng.gen_range(v_lo..=v_hi), rng.gen_range(2..=t_hi))
}

fn distance<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  let (v, t) = draw_trip(level, rng);
  let d = v * t;

  Draft {
    domain: Domain::WordProblems,
    slug: "distance-speed-time",
    level,
    prompt: text(
      format!("A train travels at a steady {v} km per hour for {t} hours. How many kilometers does it travel?"),
      format!("一列火车以每小时{v}千米的速度匀速行驶了{t}小时。它行驶了多少千米？"),
    ),
    answer: Answer::integer(d),
    hints: hint_pair(
      ("Distance = speed × time.".into(), "路程 = 速度 × 时间。".into()),
      (format!("Every hour adds {v} km; there are {t} hours."), format!("每小时走{v}千米，一共{t}小时。")),
    ),
    explanation: text(
      format!("d = {v} × {t} = {d} km. At a constant speed the distance grows by the same amount every hour."),
      format!("路程 = {v} × {t} = {d} 千米。匀速行驶时，每小时增加的路程相同。"),
    ),
  }
}

fn speed<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  // Draw speed first so that d/t is whole.
  let (v, t) = draw_trip(level, rng);
  let d = v * t;

  Draft {
    domain: Domain::WordProblems,
    slug: "distance-speed-time",
    level,
    prompt: text(
      format!("A cyclist rides {d} km in {t} hours at a steady pace. What is the cyclist's speed in km per hour?"),
      format!("一名骑行者匀速骑了{d}千米，用时{t}小时。他的速度是每小时多少千米？"),
    ),
    answer: Answer::integer(v),
    hints: hint_pair(
      ("Speed = distance ÷ time.".into(), "速度 = 路程 ÷ 时间。".into()),
      (format!("Share {d} km equally over {t} hours."), format!("把{d}千米平均分到{t}小时里。")),
    ),
    explanation: text(
      format!("v = {d} ÷ {t} = {v} km/h. Speed is distance per unit of time, so divide to undo d = v × t."),
      format!("速度 = {d} ÷ {t} = {v} 千米/小时。速度就是单位时间内的路程，用除法还原 d = v × t。"),
    ),
  }
}

fn draw_loan<R: Rng + ?Sized>(level: u8, rng: &mut R) -> (i64, i64, i64) {
  let principal = rng.gen_range(2..=if_level(level, 20, 50)) * 100;
  let rate: i64 = rng.gen_range(2..=if_level(level, 8, 12));
  let years: i64 = rng.gen_range(1..=if_level(level, 5, 10));
  (principal, rate, years)
}

fn interest<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  let (p, r, t) = draw_loan(level, rng);
  let answer = Answer::fraction(p * r * t, 100);

  Draft {
    domain: Domain::WordProblems,
    slug: "simple-interest",
    level,
    prompt: text(
      format!("Lena puts ${p} in a savings account that pays {r}% simple interest per year. How much interest does she earn in {t} years?"),
      format!("莲娜把{p}元存入年利率为{r}%的单利储蓄账户。{t}年后她能得到多少利息？"),
    ),
    hints: hint_pair(
      ("Simple interest: I = P × r × t, with r as a decimal.".into(), "单利公式：I = P × r × t，r 要写成小数。".into()),
      (format!("{r}% = {r}/100, so I = {p} × {r}/100 × {t}."), format!("{r}% = {r}/100，所以 I = {p} × {r}/100 × {t}。")),
    ),
    explanation: text(
      format!("I = {p} × {r}/100 × {t} = {answer}. Simple interest is paid only on the original amount, so it grows by the same amount every year."),
      format!("I = {p} × {r}/100 × {t} = {answer}。单利只按本金计息，所以每年增加的利息相同。"),
    ),
    answer,
  }
}

fn interest_time<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  let (p, r, t) = draw_loan(level, rng);
  // Time in half years; an odd count needs a principal in whole 200s so the
  // interest shown stays whole.
  let halves = 2 * t - i64::from(rng.gen_bool(0.4));
  let p = if halves % 2 == 1 && (p / 100) % 2 == 1 { p + 100 } else { p };
  let earned = p * r * halves / 200;
  let answer = Answer::fraction(100 * earned, p * r);

  Draft {
    domain: Domain::WordProblems,
    slug: "simple-interest",
    level,
    prompt: text(
      format!("A loan of ${p} charges {r}% simple interest per year. The total interest came to ${earned}. For how many years was the money borrowed? Use a fraction or decimal if it is not a whole number."),
      format!("一笔{p}元的贷款按年利率{r}%计单利，总利息为{earned}元。这笔钱借了多少年？如果不是整数，可以写成分数或小数。"),
    ),
    hints: hint_pair(
      ("Rearrange I = P × r × t to t = I ÷ (P × r).".into(), "把 I = P × r × t 变形为 t = I ÷ (P × r)。".into()),
      (format!("One year of interest is {p} × {r}/100."), format!("一年的利息是 {p} × {r}/100。")),
    ),
    explanation: text(
      format!("t = {earned} ÷ ({p} × {r}/100) = {answer} years. Dividing the total interest by one year's interest counts the years."),
      format!("t = {earned} ÷ ({p} × {r}/100) = {answer} 年。总利息除以一年的利息，就是年数。"),
    ),
    answer,
  }
}

fn if_level(level: u8, low: i64, high: i64) -> i64 {
  if level <= 4 { low } else { high }
}
