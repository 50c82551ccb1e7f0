//! User-facing messages for input-state outcomes.
//!
//! These accompany an empty result list. They are normal responses, not
//! errors, and the caller is expected to show them as-is.

pub const PICK_SKIN_TYPE_FIRST: &str =
  "Start by choosing your skin type, then pick the concern you want to work on.";

pub const PICK_SKIN_TYPE: &str =
  "Choose your skin type to see which ingredients suit it.";

pub const PICK_CONCERN: &str =
  "Choose a skin concern to see which ingredients help with it.";

pub const PICK_BOTH: &str =
  "Choose both a skin type and a skin concern to get product suggestions.";

pub const NO_MATCHES_YET: &str =
  "We don't have ingredient matches for this combination yet.";

pub const NO_HELPFUL_INGREDIENTS: &str =
  "We couldn't find ingredients that clearly help this combination yet.";

pub const NO_CANDIDATE_PRODUCTS: &str =
  "No products contain helpful ingredients without also containing ones to avoid.";

pub const NO_RELEVANT_REVIEWS: &str =
  "We found matching products, but none have reviews for this skin type and concern yet.";
