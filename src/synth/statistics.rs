//! Statistics: mean of 4–5 values to 2 decimals (1–3), median of 6–7
//! values including the even-count midpoint (4–5).

use rand::Rng;

use super::{first_template, hint_pair, text, Draft};
use crate::answer::Answer;
use crate::domain::Domain;

pub fn build<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  match level {
    0..=3 => mean(level, rng),
    _ => median(level, rng),
  }
}

fn draw<R: Rng + ?Sized>(rng: &mut R, count: usize, lo: i64, hi: i64) -> Vec<i64> {
  (0..count).map(|_| rng.gen_range(lo..=hi)).collect()
}

fn join(values: &[i64], sep: &str) -> String {
  values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(sep)
}

fn mean<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  let count = rng.gen_range(4..=5usize);
  let (lo, hi) = match level {
    0..=1 => (1, 20),
    2 => (10, 60),
    _ => (40, 100),
  };
  let values = draw(rng, count, lo, hi);
  let sum: i64 = values.iter().sum();
  let answer = Answer::decimal(sum as f64 / count as f64, 2);
  let list_en = join(&values, ", ");
  let list_zh = join(&values, "、");
  let sum_expr = join(&values, " + ");

  let prompt = if first_template(rng) {
    text(
      format!("Maya's quiz scores are {list_en}. What is her mean score? Round to 2 decimal places if needed."),
      format!("玛雅的测验成绩是{list_zh}。她的平均分是多少？如有需要保留两位小数。"),
    )
  } else {
    text(
      format!("Over {count} days a class collected {list_en} cans for recycling. What was the mean number of cans per day? Round to 2 decimal places if needed."),
      format!("一个班{count}天里分别回收了{list_zh}个易拉罐。平均每天回收多少个？如有需要保留两位小数。"),
    )
  };

  Draft {
    domain: Domain::Statistics,
    slug: "mean-average",
    level,
    prompt,
    hints: hint_pair(
      ("The mean shares the total out equally.".into(), "平均数就是把总数平均分。".into()),
      (format!("Add all {count} values, then divide by {count}."), format!("把{count}个数相加，再除以{count}。")),
    ),
    explanation: text(
      format!("{sum_expr} = {sum}, and {sum} ÷ {count} = {answer}. The mean is the value every item would have if the total were shared evenly."),
      format!("{sum_expr} = {sum}，{sum} ÷ {count} = {answer}。平均数就是把总量平均分配后每一份的大小。"),
    ),
    answer,
  }
}

fn median<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  let count = rng.gen_range(6..=7usize);
  let (lo, hi) = if level <= 4 { (1, 50) } else { (10, 200) };
  let values = draw(rng, count, lo, hi);
  let mut sorted = values.clone();
  sorted.sort_unstable();

  let (answer, how_en, how_zh) = if count % 2 == 1 {
    let mid = sorted[count / 2];
    (
      Answer::integer(mid),
      format!("with {count} values the middle one is number {}: {mid}", count / 2 + 1),
      format!("共{count}个数，正中间是第{}个：{mid}", count / 2 + 1),
    )
  } else {
    let (a, b) = (sorted[count / 2 - 1], sorted[count / 2]);
    // Midpoints of integers are whole or end in .5.
    let answer = Answer::decimal((a + b) as f64 / 2.0, 1);
    let shown = answer.to_string();
    (
      answer,
      format!("with {count} values the middle two are {a} and {b}, so the median is ({a} + {b}) ÷ 2 = {shown}"),
      format!("共{count}个数，中间两个是{a}和{b}，中位数是 ({a} + {b}) ÷ 2 = {shown}"),
    )
  };
  let list_en = join(&values, ", ");
  let list_zh = join(&values, "、");
  let sorted_list = join(&sorted, ", ");

  let prompt = if first_template(rng) {
    text(
      format!("The heights in centimeters of a row of sunflowers are {list_en}. What is the median height?"),
      format!("一排向日葵的高度（厘米）是{list_zh}。高度的中位数是多少？"),
    )
  } else {
    text(
      format!("A shop sold these numbers of ice creams on {count} days: {list_en}. What is the median?"),
      format!("一家店{count}天里每天卖出的冰淇淋数量是{list_zh}。中位数是多少？"),
    )
  };

  Draft {
    domain: Domain::Statistics,
    slug: "median",
    level,
    prompt,
    hints: hint_pair(
      ("Sort the values from smallest to largest first.".into(), "先把数据从小到大排好。".into()),
      ("With an even count, average the two middle values.".into(), "个数是偶数时，取中间两个数的平均值。".into()),
    ),
    explanation: text(
      format!("Sorted: {sorted_list}; {how_en}. The median ignores how extreme the largest and smallest values are."),
      format!("排序后：{sorted_list}；{how_zh}。中位数不受最大值和最小值有多极端的影响。"),
    ),
    answer,
  }
}

#[cfg(test)]
mod tests {
  use rand::SeedableRng;
  use rand_chacha::ChaCha8Rng;

  use super::*;

  fn numbers_after_colon_or_are(prompt: &str) -> Vec<f64> {
    let tail = prompt
      .split_once(" are ")
      .or_else(|| prompt.split_once(": "))
      .map(|(_, t)| t)
      .unwrap();
    let list = tail.split_once(". ").map(|(l, _)| l).unwrap_or(tail);
    list
      .split(", ")
      .map(|s| s.trim_end_matches(|c: char| !c.is_ascii_digit()).parse::<f64>().unwrap())
      .collect()
  }

  #[test]
  fn median_matches_prompt_data() {
    let mut rng = ChaCha8Rng::seed_from_u64(61);
    for _ in 0..200 {
      let d = build(5, &mut rng);
      let mut xs = numbers_after_colon_or_are(&d.prompt.en);
      assert!(xs.len() == 6 || xs.len() == 7);
      xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
      let n = xs.len();
      let want = if n % 2 == 1 { xs[n / 2] } else { (xs[n / 2 - 1] + xs[n / 2]) / 2.0 };
      assert!((d.answer.value().unwrap() - want).abs() < 1e-9);
    }
  }

  #[test]
  fn mean_is_rounded_to_two_places() {
    let mut rng = ChaCha8Rng::seed_from_u64(62);
    for _ in 0..200 {
      let d = build(2, &mut rng);
      let v = d.answer.value().unwrap();
      assert!(((v * 100.0).round() - v * 100.0).abs() < 1e-6);
    }
  }
}
