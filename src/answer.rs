//! Typed canonical answers.
//!
//! Synthesizers produce an `Answer` computed from the same draws they embed
//! in the prompt. `Display` renders the canonical string; `accepts` grades
//! learner input against the variant that was actually produced.

use std::fmt;

use serde::Serialize;

use crate::util::{format_decimal, gcd};
use crate::validator::{normalize, parse_value};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Answer {
  Integer { value: i64 },
  /// Already rounded to `places` decimals.
  Decimal { value: f64, places: u8 },
  /// Lowest terms, `den > 1`.
  Fraction { num: i64, den: i64 },
  /// Short symbolic text such as `"4x^3 + 2"`, `"√3/2"` or `"yes"`.
  Symbolic { text: String },
}

impl Answer {
  pub fn integer(value: i64) -> Self {
    Answer::Integer { value }
  }

  /// Reduce `num/den` via gcd, move the sign onto the numerator, and collapse
  /// whole results to `Integer`. `den` must be non-zero.
  pub fn fraction(num: i64, den: i64) -> Self {
    debug_assert!(den != 0, "fraction with zero denominator");
    let g = gcd(num, den).max(1);
    let (mut n, mut d) = (num / g, den / g);
    if d < 0 {
      n = -n;
      d = -d;
    }
    if d == 1 {
      Answer::Integer { value: n }
    } else {
      Answer::Fraction { num: n, den: d }
    }
  }

  /// Round to `places` decimals; a whole result collapses to `Integer`.
  pub fn decimal(value: f64, places: u8) -> Self {
    let rounded = crate::util::round_to(value, places);
    if rounded.fract() == 0.0 && rounded.abs() < i64::MAX as f64 {
      Answer::Integer { value: rounded as i64 }
    } else {
      Answer::Decimal { value: rounded, places }
    }
  }

  pub fn symbolic(text: impl Into<String>) -> Self {
    Answer::Symbolic { text: text.into() }
  }

  pub fn yes_no(yes: bool) -> Self {
    Answer::symbolic(if yes { "yes" } else { "no" })
  }

  /// Numeric value for the numeric variants.
  pub fn value(&self) -> Option<f64> {
    match self {
      Answer::Integer { value } => Some(*value as f64),
      Answer::Decimal { value, .. } => Some(*value),
      Answer::Fraction { num, den } => Some(*num as f64 / *den as f64),
      Answer::Symbolic { .. } => None,
    }
  }

  /// Grade free-text input against this answer.
  pub fn accepts(&self, user_answer: &str, tolerance: f64) -> bool {
    match self {
      Answer::Integer { .. } | Answer::Decimal { .. } | Answer::Fraction { .. } => {
        match (parse_value(user_answer), self.value()) {
          (Some(got), Some(want)) => (got - want).abs() < tolerance,
          _ => false,
        }
      }
      Answer::Symbolic { text } => {
        let got = canonical_symbolic(user_answer);
        !got.is_empty() && got == canonical_symbolic(text)
      }
    }
  }
}

impl fmt::Display for Answer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Answer::Integer { value } => write!(f, "{}", value),
      Answer::Decimal { value, places } => f.write_str(&format_decimal(*value, *places)),
      Answer::Fraction { num, den } => write!(f, "{}/{}", num, den),
      Answer::Symbolic { text } => f.write_str(text),
    }
  }
}

/// Case-folded, whitespace-free form with `*` dropped and `sqrt` spelled `√`,
/// so "4 * x^3", "4x^3" and "sqrt(3)/2" vs "√3/2" compare equal. A space
/// between two digits is kept so "1 3/4" and "13/4" stay apart.
pub(crate) fn canonical_symbolic(s: &str) -> String {
  let s = normalize(s).replace("sqrt", "√");
  let mut out = String::with_capacity(s.len());
  let mut chars = s.chars().peekable();
  while let Some(c) = chars.next() {
    match c {
      ' ' if out.ends_with(|p: char| p.is_ascii_digit()) && chars.peek().is_some_and(|n| n.is_ascii_digit()) => {
        out.push(' ')
      }
      ' ' | '*' | '·' => {}
      // √(3) → √3
      '√' if chars.peek() == Some(&'(') => {
        out.push('√');
        chars.next();
        for inner in chars.by_ref() {
          if inner == ')' {
            break;
          }
          if inner != ' ' {
            out.push(inner);
          }
        }
      }
      _ => out.push(c),
    }
  }
  match out.as_str() {
    "y" => "yes".into(),
    "n" => "no".into(),
    _ => out,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::validator::DEFAULT_TOLERANCE as TOL;

  #[test]
  fn fractions_reduce_and_normalize_sign() {
    assert_eq!(Answer::fraction(6, 8), Answer::Fraction { num: 3, den: 4 });
    assert_eq!(Answer::fraction(3, -9), Answer::Fraction { num: -1, den: 3 });
    assert_eq!(Answer::fraction(10, 5), Answer::integer(2));
    assert_eq!(Answer::fraction(0, 7), Answer::integer(0));
    assert_eq!(Answer::fraction(6, 8).to_string(), "3/4");
  }

  #[test]
  fn decimals_render_trimmed() {
    assert_eq!(Answer::decimal(7.0710678, 2).to_string(), "7.07");
    assert_eq!(Answer::decimal(12.5, 2).to_string(), "12.5");
    assert_eq!(Answer::decimal(5.0, 2), Answer::integer(5));
  }

  #[test]
  fn numeric_variants_accept_equivalents() {
    let half = Answer::fraction(1, 2);
    assert!(half.accepts("1/2", TOL));
    assert!(half.accepts("0.5", TOL));
    assert!(half.accepts("2/4", TOL));
    assert!(!half.accepts("0.55", TOL));
    assert!(!half.accepts("", TOL));

    let mixed = Answer::fraction(7, 4);
    assert!(mixed.accepts("1 3/4", TOL));
    assert!(mixed.accepts("1.75", TOL));

    assert!(Answer::integer(5).accepts("five", TOL));
    assert!(Answer::integer(65).accepts("65 degrees", TOL));
    assert!(Answer::decimal(3.6055, 2).accepts("3.61", TOL));
    assert!(Answer::integer(24).accepts("24 cm²", TOL));
    assert!(Answer::integer(24).accepts("24 m^2", TOL));
  }

  #[test]
  fn symbolic_compares_structurally() {
    let poly = Answer::symbolic("12x^3 + 5");
    assert!(poly.accepts("12x^3+5", TOL));
    assert!(poly.accepts("12 * x^3 + 5", TOL));
    assert!(!poly.accepts("12x^2 + 5", TOL));

    let root = Answer::symbolic("√3/2");
    assert!(root.accepts("sqrt(3)/2", TOL));
    assert!(root.accepts("sqrt3/2", TOL));

    let yes = Answer::yes_no(true);
    assert!(yes.accepts("Yes", TOL));
    assert!(yes.accepts("y", TOL));
    assert!(!yes.accepts("no", TOL));
    assert!(!yes.accepts("", TOL));
  }

  #[test]
  fn symbolic_form_keeps_digit_groups_apart() {
    assert_eq!(canonical_symbolic("1 3/4"), "1 3/4");
    assert_eq!(canonical_symbolic("13/4"), "13/4");
    assert_eq!(canonical_symbolic("12 x^3 + 5"), "12x^3+5");
    assert_eq!(canonical_symbolic("√(3) / 2"), "√3/2");
  }

  #[test]
  fn serializes_tagged() {
    let json = serde_json::to_value(Answer::fraction(2, 3)).unwrap();
    assert_eq!(json["kind"], "fraction");
    assert_eq!(json["num"], 2);
    assert_eq!(json["den"], 3);
  }
}
