//! Effect classification and the worst-case-wins policy.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Suitability of an ingredient relative to one skin type or one concern.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
  AsRefStr,
  Display,
  EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Effect {
  Helpful,
  Avoid,
}

/// The effect assumed when a mapping row carries no recognisable effect.
/// Missing data is treated as benign.
pub const DEFAULT_EFFECT: Effect = Effect::Helpful;

impl Effect {
  /// Read an effect from a raw column value. Never fails: blank, missing and
  /// unrecognised values all yield [`DEFAULT_EFFECT`].
  pub fn from_raw(raw: Option<&str>) -> Self {
    raw
      .map(str::trim)
      .and_then(|s| s.parse::<Effect>().ok())
      .unwrap_or(DEFAULT_EFFECT)
  }

  /// Worst case wins: `Avoid` if either side is `Avoid`.
  pub fn combine(self, other: Effect) -> Effect {
    if self == Effect::Avoid || other == Effect::Avoid {
      Effect::Avoid
    } else {
      Effect::Helpful
    }
  }

  pub fn is_avoid(self) -> bool { self == Effect::Avoid }
}
