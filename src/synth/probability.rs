//! Probability: favorable/total and its complement (1–3), conditional and
//! independent joint probability (4–5). All answers are reduced fractions.

use rand::Rng;

use super::{first_template, hint_pair, text, Draft};
use crate::answer::Answer;
use crate::domain::Domain;

pub fn build<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  match level {
    0..=3 => {
      if first_template(rng) {
        simple_ratio(level, rng)
      } else {
        complement(level, rng)
      }
    }
    _ => {
      if first_template(rng) {
        conditional(level, rng)
      } else {
        independent(level, rng)
      }
    }
  }
}

fn simple_ratio<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  let hi = if level <= 2 { 8 } else { 15 };
  let red: i64 = rng.gen_range(1..=hi);
  let blue: i64 = rng.gen_range(1..=hi);
  let total = red + blue;
  let answer = Answer::fraction(red, total);

  Draft {
    domain: Domain::Probability,
    slug: "basic-probability",
    level,
    prompt: text(
      format!("A bag holds {red} red marbles and {blue} blue marbles. You pick one without looking. What is the probability it is red? Give a fraction in simplest form."),
      format!("袋子里有{red}颗红弹珠和{blue}颗蓝弹珠。闭上眼睛摸一颗，摸到红弹珠的概率是多少？请写成最简分数。"),
    ),
    hints: hint_pair(
      ("Probability = favorable outcomes ÷ all equally likely outcomes.".into(), "概率 = 有利结果数 ÷ 所有等可能结果数。".into()),
      (format!("There are {red} red out of {red} + {blue} marbles."), format!("一共有 {red} + {blue} 颗，其中红色{red}颗。")),
    ),
    explanation: text(
      format!("P(red) = {red}/{total} = {answer}. Each marble is equally likely, so probability is just counting."),
      format!("P(红) = {red}/{total} = {answer}。每颗弹珠被摸到的可能性相同，所以概率就是数数。"),
    ),
    answer,
  }
}

fn complement<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  let hi = if level <= 2 { 10 } else { 16 };
  let sections: i64 = rng.gen_range(4..=hi);
  let green: i64 = rng.gen_range(1..sections);
  let not_green = sections - green;
  let p = Answer::fraction(green, sections);
  let answer = Answer::fraction(not_green, sections);

  Draft {
    domain: Domain::Probability,
    slug: "complementary-events",
    level,
    prompt: text(
      format!("A spinner has {sections} equal sections and {green} of them are green. What is the probability the spinner does NOT land on green? Give a fraction in simplest form."),
      format!("一个转盘被平均分成{sections}格，其中{green}格是绿色。指针不停在绿色上的概率是多少？请写成最简分数。"),
    ),
    hints: hint_pair(
      ("An event and its opposite always add up to 1.".into(), "一个事件和它的对立事件的概率之和总是1。".into()),
      (format!("P(green) = {green}/{sections}; subtract it from 1."), format!("P(绿) = {green}/{sections}，用1减去它。")),
    ),
    explanation: text(
      format!("P(not green) = 1 − {p} = {not_green}/{sections} = {answer}. Counting what you don't want is often easier than counting what you do."),
      format!("P(非绿) = 1 − {p} = {not_green}/{sections} = {answer}。有时数“不想要的”比数“想要的”更容易。"),
    ),
    answer,
  }
}

fn conditional<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  let hi = if level <= 4 { 30 } else { 60 };
  let students: i64 = rng.gen_range(20..=hi);
  let soccer: i64 = rng.gen_range(2..=students / 2);
  let both: i64 = rng.gen_range(1..soccer);
  // P(A|B) = P(A∩B)/P(B) = both/soccer once the class size cancels.
  let answer = Answer::fraction(both, soccer);

  Draft {
    domain: Domain::Probability,
    slug: "conditional-probability",
    level,
    prompt: text(
      format!("In a class of {students}, {soccer} students play soccer, and {both} of those also play chess. A soccer player is chosen at random. What is the probability they play chess? Give a fraction in simplest form."),
      format!("一个班有{students}名学生，其中{soccer}人踢足球，踢足球的人中有{both}人也下国际象棋。随机选一名踢足球的学生，他下国际象棋的概率是多少？请写成最简分数。"),
    ),
    hints: hint_pair(
      ("You already know the student plays soccer, so only soccer players count.".into(), "已知这名学生踢足球，所以只看踢足球的人。".into()),
      (format!("P(chess | soccer) = P(both) ÷ P(soccer) = ({both}/{students}) ÷ ({soccer}/{students})."), format!("P(象棋 | 足球) = P(两者) ÷ P(足球) = ({both}/{students}) ÷ ({soccer}/{students})。")),
    ),
    explanation: text(
      format!("P(chess | soccer) = {both}/{soccer} = {answer}; the class size {students} cancels. Conditioning shrinks the sample space to the outcomes you already know happened."),
      format!("P(象棋 | 足球) = {both}/{soccer} = {answer}，班级人数{students}被约掉了。条件概率就是把样本空间缩小到已知发生的结果。"),
    ),
    answer,
  }
}

fn independent<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Draft {
  let die_max: i64 = rng.gen_range(1..=5);
  let coin_den: i64 = 2;
  let spinner_max = if level <= 4 { 6 } else { 10 };
  let spinner: i64 = rng.gen_range(3..=spinner_max);
  let spinner_hits: i64 = rng.gen_range(1..spinner);

  let (prompt, a_num, a_den, b_num, b_den, hint_en, hint_zh) = if first_template(rng) {
    (
      text(
        format!("You roll a fair six-sided die and flip a fair coin. What is the probability of rolling {die_max} or less AND getting heads? Give a fraction in simplest form."),
        format!("掷一个均匀的六面骰子，再抛一枚均匀硬币。掷出不大于{die_max}的点数并且硬币正面朝上的概率是多少？请写成最简分数。"),
      ),
      die_max, 6, 1, coin_den,
      format!("P(die ≤ {die_max}) = {die_max}/6 and P(heads) = 1/2."),
      format!("P(点数 ≤ {die_max}) = {die_max}/6，P(正面) = 1/2。"),
    )
  } else {
    (
      text(
        format!("A fair spinner has {spinner} equal sections, {spinner_hits} of them blue. You spin it and roll a fair six-sided die. What is the probability of landing on blue AND rolling {die_max} or less? Give a fraction in simplest form."),
        format!("一个均匀转盘有{spinner}个相等的格子，其中{spinner_hits}格是蓝色。转一次转盘再掷一个六面骰子，转到蓝色并且掷出不大于{die_max}的概率是多少？请写成最简分数。"),
      ),
      spinner_hits, spinner, die_max, 6,
      format!("P(blue) = {spinner_hits}/{spinner} and P(die ≤ {die_max}) = {die_max}/6."),
      format!("P(蓝) = {spinner_hits}/{spinner}，P(点数 ≤ {die_max}) = {die_max}/6。"),
    )
  };

  let num = a_num * b_num;
  let den = a_den * b_den;
  let answer = Answer::fraction(num, den);

  Draft {
    domain: Domain::Probability,
    slug: "independent-events",
    level,
    prompt,
    hints: hint_pair(
      ("The two actions don't affect each other, so multiply their probabilities.".into(), "两个动作互不影响，把概率相乘。".into()),
      (hint_en, hint_zh),
    ),
    explanation: text(
      format!("P = {a_num}/{a_den} × {b_num}/{b_den} = {num}/{den} = {answer}. For independent events the chance of both is the product of the chances."),
      format!("P = {a_num}/{a_den} × {b_num}/{b_den} = {num}/{den} = {answer}。独立事件同时发生的概率等于各自概率之积。"),
    ),
    answer,
  }
}

#[cfg(test)]
mod tests {
  use rand::SeedableRng;
  use rand_chacha::ChaCha8Rng;

  use super::*;

  #[test]
  fn probabilities_stay_in_unit_interval() {
    let mut rng = ChaCha8Rng::seed_from_u64(51);
    for level in 1..=5 {
      for _ in 0..200 {
        let v = build(level, &mut rng).answer.value().unwrap();
        assert!(v > 0.0 && v < 1.0, "level {level}: {v}");
      }
    }
  }
}
