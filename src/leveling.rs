//! Mastery → next difficulty level.
//!
//! Two independent upward signals (accurate-and-fast, streak) and two
//! independent downward signals (low accuracy, slow answers). Each is a unit
//! step and all four are always evaluated, so they can cancel out.

use serde::Deserialize;

use crate::domain::MasteryProfile;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 5;

/// Thresholds of the leveling policy.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LevelPolicy {
  pub advance_accuracy: f64,
  pub fast_time_ms: f64,
  pub streak_bonus: u32,
  pub struggle_accuracy: f64,
  pub slow_time_ms: f64,
}

impl Default for LevelPolicy {
  fn default() -> Self {
    Self {
      advance_accuracy: 0.85,
      fast_time_ms: 22_000.0,
      streak_bonus: 5,
      struggle_accuracy: 0.55,
      slow_time_ms: 65_000.0,
    }
  }
}

impl LevelPolicy {
  /// Recommended level in `[1, 5]`. Total: any profile, however odd, maps to
  /// a valid level.
  pub fn recommend(&self, profile: &MasteryProfile) -> u8 {
    let mut level = clamp_level(profile.level);

    if profile.accuracy >= self.advance_accuracy
      && profile.avg_time_ms > 0.0
      && profile.avg_time_ms <= self.fast_time_ms
    {
      level += 1;
    }
    if profile.streak >= self.streak_bonus {
      level += 1;
    }
    if profile.accuracy <= self.struggle_accuracy {
      level -= 1;
    }
    if profile.avg_time_ms >= self.slow_time_ms {
      level -= 1;
    }

    level.clamp(MIN_LEVEL as i32, MAX_LEVEL as i32) as u8
  }
}

/// Recommend with the default thresholds.
pub fn recommend_next_level(profile: &MasteryProfile) -> u8 {
  LevelPolicy::default().recommend(profile)
}

fn clamp_level(level: f64) -> i32 {
  if level.is_nan() {
    return MIN_LEVEL as i32;
  }
  level.round().clamp(MIN_LEVEL as f64, MAX_LEVEL as f64) as i32
}
