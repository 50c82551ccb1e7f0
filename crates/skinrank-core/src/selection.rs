//! User selections for skin type and skin concern.

/// Inputs that mean the user declined to pick a value. Compared against the
/// trimmed, lower-cased input.
const UNSURE_SENTINELS: [&str; 4] = ["not sure", "not-sure", "not_sure", "notsure"];

/// A parsed skin-type or skin-concern selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
  /// The user explicitly declined to choose.
  Unsure,
  /// A trimmed title to resolve. May be empty.
  Title(String),
}

impl Selection {
  pub fn parse(raw: &str) -> Self {
    let trimmed = raw.trim();
    if UNSURE_SENTINELS.contains(&trimmed.to_lowercase().as_str()) {
      Self::Unsure
    } else {
      Self::Title(trimmed.to_owned())
    }
  }

  pub fn is_unsure(&self) -> bool { matches!(self, Self::Unsure) }

  pub fn title(&self) -> Option<&str> {
    match self {
      Self::Unsure => None,
      Self::Title(t) => Some(t),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn recognises_every_sentinel_spelling() {
    for raw in ["not sure", "Not-Sure", " NOT_SURE ", "notsure", "NotSure"] {
      assert_eq!(Selection::parse(raw), Selection::Unsure, "{raw:?}");
    }
  }

  #[test]
  fn ordinary_titles_are_trimmed() {
    assert_eq!(Selection::parse("  Oily "), Selection::Title("Oily".into()));
    assert_eq!(Selection::parse(""), Selection::Title(String::new()));
    assert_eq!(Selection::parse("not  sure"), Selection::Title("not  sure".into()));
  }
}
