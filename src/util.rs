//! Small integer/number helpers shared by the synthesizers and the answer model.

/// Greatest common divisor (Euclidean algorithm). Always non-negative.
/// `gcd(0, 0)` is 0.
pub fn gcd(a: i64, b: i64) -> i64 {
  let (mut a, mut b) = (a.abs(), b.abs());
  while b != 0 {
    let r = a % b;
    a = b;
    b = r;
  }
  a
}

/// Least common multiple as `|a·b| / gcd(a, b)`. Zero if either side is zero.
pub fn lcm(a: i64, b: i64) -> i64 {
  if a == 0 || b == 0 {
    return 0;
  }
  (a / gcd(a, b) * b).abs()
}

/// Smallest divisor in `2..=sqrt(n)` found by trial division, or None when
/// `n` is prime. Values below 2 report themselves as their own "divisor"
/// so callers never treat them as prime.
pub fn smallest_divisor(n: i64) -> Option<i64> {
  if n < 2 {
    return Some(n);
  }
  let mut d = 2;
  while d * d <= n {
    if n % d == 0 {
      return Some(d);
    }
    d += 1;
  }
  None
}

pub fn is_prime(n: i64) -> bool {
  smallest_divisor(n).is_none()
}

/// Round half away from zero to `places` decimals.
pub fn round_to(x: f64, places: u8) -> f64 {
  let factor = 10f64.powi(places as i32);
  (x * factor).round() / factor
}

/// Render a number with at most `places` decimals, dropping trailing zeros
/// ("7.50" → "7.5", "5.00" → "5").
pub fn format_decimal(x: f64, places: u8) -> String {
  let s = format!("{:.*}", places as usize, round_to(x, places));
  let s = if s.contains('.') {
    s.trim_end_matches('0').trim_end_matches('.').to_string()
  } else {
    s
  };
  if s == "-0" { "0".into() } else { s }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn gcd_and_lcm() {
    assert_eq!(gcd(48, 18), 6);
    assert_eq!(gcd(-12, 8), 4);
    assert_eq!(gcd(7, 0), 7);
    assert_eq!(lcm(4, 6), 12);
    assert_eq!(lcm(-3, 5), 15);
    assert_eq!(lcm(0, 5), 0);
  }

  #[test]
  fn trial_division() {
    assert!(is_prime(2));
    assert!(is_prime(97));
    assert!(!is_prime(1));
    assert!(!is_prime(91));
    assert_eq!(smallest_divisor(91), Some(7));
    assert_eq!(smallest_divisor(121), Some(11));
  }

  #[test]
  fn decimal_formatting_trims() {
    assert_eq!(format_decimal(7.5, 2), "7.5");
    assert_eq!(format_decimal(5.0, 2), "5");
    assert_eq!(format_decimal(7.071067, 2), "7.07");
    assert_eq!(format_decimal(-0.001, 2), "0");
  }
}
