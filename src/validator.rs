//! Free-text answer validation.
//!
//! Children type answers in many shapes ("1/2", "0.5", "five", "65 degrees",
//! "1 3/4"), so the validator tries several legal readings in order and
//! the first one that decides wins:
//!   1. normalized string equality
//!   2. numeric comparison (plain number, word number, number + unit,
//!      word number + unit)
//!   3. fraction comparison (mixed number, simple fraction, or plain number)
//!   4. symbolic comparison, for answers with no numeric reading on either
//!      side ("sqrt(3)/2" vs "√3/2", "12x^3+5" vs "12x^3 + 5")
//!
//! Nothing here fails: anything unparseable is simply not a match.

use std::sync::LazyLock;

use regex::Regex;

use crate::answer::canonical_symbolic;

/// Absolute tolerance for numeric equivalence. Product policy, overridable
/// through `[validator] tolerance` in the engine config.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

const WORD_NUMBERS: [&str; 21] = [
  "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
  "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
  "nineteen", "twenty",
];

// A single glued letter ("4x") is a variable, not a unit, so it needs a space
// or a word of two or more letters. Whatever follows the unit's first letters
// ("cm²", "m^2", "apples!") is discarded.
static NUMBER_WITH_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^(-?(?:\d+(?:\.\d*)?|\.\d+))(?:\s+\p{L}|\p{L}{2}).*$").expect("Invalid regex")
});
static WORD_WITH_SUFFIX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^(-?)([a-z]+)\s+\S").expect("Invalid regex"));
static MIXED_NUMBER: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^(-?)(\d+)\s+(\d+)\s*/\s*(\d+)$").expect("Invalid regex"));
static SIMPLE_FRACTION: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^(-?\d+)\s*/\s*(-?\d+)$").expect("Invalid regex"));

/// Answer comparison with a fixed tolerance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Validator {
  pub tolerance: f64,
}

impl Default for Validator {
  fn default() -> Self {
    Self { tolerance: DEFAULT_TOLERANCE }
  }
}

impl Validator {
  pub fn new(tolerance: f64) -> Self {
    Self { tolerance }
  }

  /// True when `user_answer` is an acceptable rendering of `correct_answer`.
  pub fn validate(&self, user_answer: &str, correct_answer: &str) -> bool {
    let user = normalize(user_answer);
    let correct = normalize(correct_answer);
    if user.is_empty() {
      return false;
    }
    if user == correct {
      return true;
    }

    if let (Some(a), Some(b)) = (parse_number(&user), parse_number(&correct)) {
      return self.close(a, b);
    }

    if let (Some(a), Some(b)) = (parse_fraction(&user), parse_fraction(&correct)) {
      return self.close(a, b);
    }

    if parse_fraction(&user).is_none() && parse_fraction(&correct).is_none() {
      let got = canonical_symbolic(&user);
      return !got.is_empty() && got == canonical_symbolic(&correct);
    }

    false
  }

  pub fn close(&self, a: f64, b: f64) -> bool {
    (a - b).abs() < self.tolerance
  }
}

/// Validate with the default tolerance.
pub fn validate_answer(user_answer: &str, correct_answer: &str) -> bool {
  Validator::default().validate(user_answer, correct_answer)
}

/// Trim, lowercase, drop half/full-width commas and the degree sign, and
/// collapse whitespace runs to single spaces.
pub fn normalize(s: &str) -> String {
  let stripped: String = s
    .trim()
    .to_lowercase()
    .chars()
    .filter(|c| !matches!(c, ',' | '，' | '°'))
    .collect();
  stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Numeric reading of an already-normalized string.
pub fn parse_number(s: &str) -> Option<f64> {
  if let Some(v) = parse_plain(s) {
    return Some(v);
  }
  if let Some(v) = word_number(s) {
    return Some(v);
  }
  if let Some(caps) = NUMBER_WITH_SUFFIX.captures(s) {
    if let Some(v) = parse_plain(&caps[1]) {
      return Some(v);
    }
  }
  if let Some(caps) = WORD_WITH_SUFFIX.captures(s) {
    if let Some(v) = word_number(&caps[2]) {
      return Some(if &caps[1] == "-" { -v } else { v });
    }
  }
  None
}

/// Fractional reading of an already-normalized string: mixed number
/// `W N/D`, simple fraction `N/D`, or anything `parse_number` accepts.
/// A zero denominator is unparseable.
pub fn parse_fraction(s: &str) -> Option<f64> {
  if let Some(caps) = MIXED_NUMBER.captures(s) {
    let whole: f64 = caps[2].parse().ok()?;
    let num: f64 = caps[3].parse().ok()?;
    let den: f64 = caps[4].parse().ok()?;
    if den == 0.0 {
      return None;
    }
    let magnitude = whole + num / den;
    return Some(if &caps[1] == "-" { -magnitude } else { magnitude });
  }
  if let Some(caps) = SIMPLE_FRACTION.captures(s) {
    let num: f64 = caps[1].parse().ok()?;
    let den: f64 = caps[2].parse().ok()?;
    if den == 0.0 {
      return None;
    }
    return Some(num / den);
  }
  parse_number(s)
}

/// Any numeric or fractional reading of raw (not yet normalized) input.
pub fn parse_value(raw: &str) -> Option<f64> {
  let s = normalize(raw);
  parse_number(&s).or_else(|| parse_fraction(&s))
}

fn parse_plain(s: &str) -> Option<f64> {
  // f64::from_str also accepts "inf"/"nan"; those are not answers.
  if !s.bytes().any(|b| b.is_ascii_digit()) {
    return None;
  }
  s.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn word_number(s: &str) -> Option<f64> {
  let (neg, word) = match s.strip_prefix('-') {
    Some(rest) => (true, rest),
    None => (false, s),
  };
  let v = WORD_NUMBERS.iter().position(|w| *w == word)? as f64;
  Some(if neg { -v } else { v })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn concrete_scenarios() {
    assert!(validate_answer("1/2", "0.5"));
    assert!(validate_answer("1 3/4", "1.75"));
    assert!(validate_answer("five", "5"));
    assert!(validate_answer("65 degrees", "65°"));
    assert!(!validate_answer("3/0", "anything"));
    assert!(!validate_answer("", "5"));
  }

  #[test]
  fn normalization() {
    assert_eq!(normalize("  1,000  Apples "), "1000 apples");
    assert_eq!(normalize("4x^3   +  2"), "4x^3 + 2");
    assert_eq!(normalize("45°"), "45");
    assert_eq!(normalize("1，200"), "1200");
    assert!(validate_answer("YES", "yes"));
  }

  #[test]
  fn units_and_words() {
    assert!(validate_answer("5 faces", "5"));
    assert!(validate_answer("five faces", "5"));
    assert!(validate_answer("12.5 km", "12.50"));
    assert!(validate_answer("twenty", "20"));
    assert!(!validate_answer("twenty-one", "21"));
  }

  #[test]
  fn negatives_everywhere() {
    assert!(validate_answer("-3", "-3.0"));
    assert!(validate_answer("-3/4", "-0.75"));
    assert!(validate_answer("-1 1/2", "-1.5"));
    assert!(validate_answer("-five", "-5"));
    assert!(validate_answer("3/-4", "-0.75"));
  }

  #[test]
  fn tolerance_is_absolute() {
    assert!(validate_answer("0.33333", "0.33333333"));
    assert!(!validate_answer("0.33", "1/3"));
    assert!(Validator::new(0.01).validate("0.33", "1/3"));
  }

  #[test]
  fn numeric_mismatch_is_final() {
    assert!(!validate_answer("6", "5"));
    assert!(!validate_answer("5 apples", "6 apples"));
  }

  #[test]
  fn polynomials_are_not_units() {
    assert!(validate_answer("4x^3", "4x^3"));
    assert!(!validate_answer("4x^2", "4x^3"));
    assert!(!validate_answer("12x + 5", "12x + 3"));
    assert!(validate_answer("65degrees", "65"));
  }

  #[test]
  fn units_with_symbols_are_ignored() {
    assert!(validate_answer("24 cm²", "24"));
    assert!(validate_answer("24 m^2", "24"));
    assert!(validate_answer("5 apples!", "5"));
    assert!(validate_answer("12.5 km/h", "12.5"));
    assert!(!validate_answer("25 cm²", "24"));
  }

  #[test]
  fn symbolic_answers_agree_with_typed_answers() {
    assert!(validate_answer("sqrt(3)/2", "√3/2"));
    assert!(validate_answer("√(2) / 2", "√2/2"));
    assert!(validate_answer("12x^3+5", "12x^3 + 5"));
    assert!(validate_answer("12 * x^3 + 5", "12x^3 + 5"));
    assert!(validate_answer("y", "yes"));
    assert!(!validate_answer("12x^2+5", "12x^3 + 5"));
    assert!(!validate_answer("13/4", "1 3/4"));
    assert!(!validate_answer("1 2", "12"));
  }

  #[test]
  fn garbage_never_matches() {
    assert!(!validate_answer("inf", "inf2"));
    assert!(!validate_answer("nan", "5"));
    assert!(!validate_answer("   ", ""));
    assert!(!validate_answer("1/0", "1"));
    assert!(!validate_answer("abc", "5"));
  }

  #[test]
  fn value_parsing() {
    assert_eq!(parse_value("3/4"), Some(0.75));
    assert_eq!(parse_value("2 1/4"), Some(2.25));
    assert_eq!(parse_value("seven"), Some(7.0));
    assert_eq!(parse_value("x"), None);
  }
}
