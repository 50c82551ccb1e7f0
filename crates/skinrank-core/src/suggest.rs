//! Product suggestions: products built on helpful ingredients, free of
//! ingredients to avoid, and backed by reviews for the exact skin type and
//! concern.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};
use strum::EnumString;
use tracing::debug;

use crate::{
  catalog::{MappingTable, ProductIngredientRow, ProductRow, ReferenceTable, ReviewRow},
  id::{CatalogId, IdKey, ReferenceId},
  intersect::{intersect, Partition},
  mapping::load_effects,
  messages,
  resolve::resolve_reference,
  selection::Selection,
  store::CatalogStore,
  Error, Result,
};

/// Products returned when the caller does not ask for a specific number.
pub const DEFAULT_LIMIT: usize = 3;
/// Hard ceiling on products returned, whatever the caller asks for.
pub const MAX_LIMIT: usize = 3;

/// Tunables for [`suggest_products`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionPolicy {
  /// How many ingredient-ranked candidates are carried into the review
  /// lookup. Bounds the size of that query; it is not the final ranking.
  /// A cap of 0 is treated as 1.
  pub candidate_cap:           usize,
  pub max_reviews_per_product: usize,
}

impl Default for SuggestionPolicy {
  fn default() -> Self {
    Self { candidate_cap: 20, max_reviews_per_product: 2 }
  }
}

/// Clamp a requested limit into `[1, MAX_LIMIT]`.
pub fn clamp_limit(requested: Option<i64>) -> usize {
  match requested {
    None => DEFAULT_LIMIT,
    Some(n) => n.clamp(1, MAX_LIMIT as i64) as usize,
  }
}

// ─── Request / response ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuggestedProductsRequest {
  pub skin_type_title:    String,
  pub skin_concern_title: String,
  /// Accepts integers, floats (rounded) and numeric strings. Anything else
  /// reads as absent; [`clamp_limit`] does the rest.
  #[serde(deserialize_with = "lenient_limit")]
  pub limit:              Option<i64>,
}

/// Every shape a `limit` may arrive in, from a JSON body or a query string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLimit {
  Int(i64),
  Float(f64),
  Text(String),
  Other(IgnoredAny),
}

fn round_limit(f: f64) -> Option<i64> {
  f.is_finite().then(|| f.round() as i64)
}

impl RawLimit {
  fn into_limit(self) -> Option<i64> {
    match self {
      Self::Int(n) => Some(n),
      Self::Float(f) => round_limit(f),
      Self::Text(s) => {
        let s = s.trim();
        s.parse::<i64>()
          .ok()
          .or_else(|| s.parse::<f64>().ok().and_then(round_limit))
      }
      Self::Other(_) => None,
    }
  }
}

fn lenient_limit<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<RawLimit>::deserialize(deserializer)?.and_then(RawLimit::into_limit))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedReview {
  pub review_link:            Option<String>,
  pub review_text:            Option<String>,
  pub sentiment:              Option<String>,
  pub skin_type_reasoning:    Option<String>,
  pub skin_concern_reasoning: Option<String>,
}

impl From<ReviewRow> for SuggestedReview {
  fn from(row: ReviewRow) -> Self {
    Self {
      review_link:            row.review_link,
      review_text:            row.review_text,
      sentiment:              row.sentiment,
      skin_type_reasoning:    row.skin_type_reasoning,
      skin_concern_reasoning: row.skin_concern_reasoning,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedProduct {
  pub id:      CatalogId,
  pub title:   String,
  pub brand:   Option<String>,
  pub reviews: Vec<SuggestedReview>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedProductsResponse {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message:  Option<String>,
  pub products: Vec<SuggestedProduct>,
}

impl SuggestedProductsResponse {
  fn message(message: &str) -> Self {
    Self { message: Some(message.to_owned()), products: Vec::new() }
  }
}

// ─── Sentiment ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
enum Sentiment {
  Positive,
  Neutral,
  Negative,
}

/// Review ordering: positive, neutral, negative, then anything else.
fn sentiment_rank(raw: Option<&str>) -> u8 {
  match raw.map(str::trim).and_then(|s| s.parse::<Sentiment>().ok()) {
    Some(Sentiment::Positive) => 0,
    Some(Sentiment::Neutral) => 1,
    Some(Sentiment::Negative) => 2,
    None => 3,
  }
}

// ─── Candidate tally ─────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct Candidate {
  id:        CatalogId,
  helpful:   BTreeSet<IdKey>,
  has_avoid: bool,
}

impl Candidate {
  fn helpful_count(&self) -> usize { self.helpful.len() }
}

/// Tally helpful and avoid ingredients per product, keep products with at
/// least one helpful ingredient and no avoid ingredient, and order them by
/// helpful count descending. Ties keep product-key order.
fn rank_candidates(
  rows: Vec<ProductIngredientRow>,
  partition: &Partition,
) -> Vec<Candidate> {
  let helpful: HashSet<IdKey> = partition.helpful.iter().map(CatalogId::key).collect();
  let avoid: HashSet<IdKey> = partition.avoid.iter().map(CatalogId::key).collect();

  let mut tally: BTreeMap<IdKey, Candidate> = BTreeMap::new();
  for row in rows {
    let (Some(product_id), Some(ingredient_id)) = (row.product_id, row.ingredient_id) else {
      continue;
    };
    let ingredient_key = ingredient_id.key();
    let candidate = tally.entry(product_id.key()).or_insert_with(|| Candidate {
      id:        product_id,
      helpful:   BTreeSet::new(),
      has_avoid: false,
    });
    if helpful.contains(&ingredient_key) {
      candidate.helpful.insert(ingredient_key);
    } else if avoid.contains(&ingredient_key) {
      candidate.has_avoid = true;
    }
  }

  let mut candidates: Vec<Candidate> = tally
    .into_values()
    .filter(|c| c.helpful_count() > 0 && !c.has_avoid)
    .collect();
  candidates.sort_by(|a, b| b.helpful_count().cmp(&a.helpful_count()));
  candidates
}

// ─── Engine ──────────────────────────────────────────────────────────────────

/// Suggest up to `limit` products for a skin type and concern.
///
/// Every "nothing to show" outcome is a normal response carrying a message.
/// Only storage failures are errors.
pub async fn suggest_products<S: CatalogStore>(
  store: &S,
  policy: &SuggestionPolicy,
  request: &SuggestedProductsRequest,
) -> Result<SuggestedProductsResponse> {
  let skin_type = Selection::parse(&request.skin_type_title);
  let concern = Selection::parse(&request.skin_concern_title);

  match (skin_type.is_unsure(), concern.is_unsure()) {
    (true, true) => {
      return Ok(SuggestedProductsResponse::message(messages::PICK_SKIN_TYPE_FIRST));
    }
    (true, false) | (false, true) => {
      return Ok(SuggestedProductsResponse::message(messages::PICK_BOTH));
    }
    (false, false) => {}
  }

  let limit = clamp_limit(request.limit);

  let skin_type_id = resolve_reference(store, ReferenceTable::SkinTypes, &skin_type).await?;
  let concern_id = resolve_reference(store, ReferenceTable::SkinConcerns, &concern).await?;

  let concern_map = load_effects(store, MappingTable::ConcernIngredients, concern_id).await?;
  let skin_type_map = load_effects(store, MappingTable::SkinTypeIngredients, skin_type_id).await?;

  let matched = intersect(&concern_map, &skin_type_map);
  // An unresolved title loads an empty mapping, so it ends up here too.
  let (Some(skin_type_id), Some(concern_id)) = (skin_type_id, concern_id) else {
    return Ok(SuggestedProductsResponse::message(messages::NO_MATCHES_YET));
  };
  if matched.is_empty() {
    debug!(skin_type_id, concern_id, "no ingredient intersection");
    return Ok(SuggestedProductsResponse::message(messages::NO_MATCHES_YET));
  }

  let partition = Partition::of(&matched);
  if partition.helpful.is_empty() {
    debug!(
      skin_type_id,
      concern_id,
      avoid = partition.avoid.len(),
      "no helpful ingredients"
    );
    return Ok(SuggestedProductsResponse::message(messages::NO_HELPFUL_INGREDIENTS));
  }

  let membership = store
    .product_ingredients(&partition.union())
    .await
    .map_err(Error::store)?;
  let mut candidates = rank_candidates(membership, &partition);
  if candidates.is_empty() {
    debug!(skin_type_id, concern_id, "no candidate products");
    return Ok(SuggestedProductsResponse::message(messages::NO_CANDIDATE_PRODUCTS));
  }
  candidates.truncate(policy.candidate_cap.max(1));

  let mut reviewed = attach_reviews(store, candidates, skin_type_id, concern_id).await?;
  if reviewed.is_empty() {
    debug!(skin_type_id, concern_id, "no candidates with reviews");
    return Ok(SuggestedProductsResponse::message(messages::NO_RELEVANT_REVIEWS));
  }
  reviewed.sort_by(|(a, _), (b, _)| b.helpful_count().cmp(&a.helpful_count()));
  reviewed.truncate(limit);

  let chosen_ids: Vec<CatalogId> = reviewed.iter().map(|(c, _)| c.id.clone()).collect();
  let display: HashMap<IdKey, ProductRow> = store
    .products_by_ids(&chosen_ids)
    .await
    .map_err(Error::store)?
    .into_iter()
    .filter_map(|row| Some((row.id.as_ref()?.key(), row)))
    .collect();

  let products: Vec<SuggestedProduct> = reviewed
    .into_iter()
    .map(|(candidate, mut reviews)| {
      reviews.sort_by_key(|r| sentiment_rank(r.sentiment.as_deref()));
      reviews.truncate(policy.max_reviews_per_product);
      let row = display.get(&candidate.id.key());
      SuggestedProduct {
        title:   row.and_then(|r| r.title.clone()).unwrap_or_default(),
        brand:   row.and_then(|r| r.brand.clone()),
        reviews: reviews.into_iter().map(SuggestedReview::from).collect(),
        id:      candidate.id,
      }
    })
    .collect();

  debug!(skin_type_id, concern_id, count = products.len(), "suggested products");
  Ok(SuggestedProductsResponse { message: None, products })
}

/// Fetch scoped reviews for `candidates` and pair each candidate with its
/// reviews, dropping candidates that have none. Candidate order is kept.
async fn attach_reviews<S: CatalogStore>(
  store: &S,
  candidates: Vec<Candidate>,
  skin_type_id: ReferenceId,
  concern_id: ReferenceId,
) -> Result<Vec<(Candidate, Vec<ReviewRow>)>> {
  let ids: Vec<CatalogId> = candidates.iter().map(|c| c.id.clone()).collect();
  let rows = store
    .reviews_for(&ids, skin_type_id, concern_id)
    .await
    .map_err(Error::store)?;

  let mut by_product: HashMap<IdKey, Vec<ReviewRow>> = HashMap::new();
  for row in rows {
    let Some(key) = row.product_id.as_ref().map(CatalogId::key) else {
      continue;
    };
    by_product.entry(key).or_default().push(row);
  }

  Ok(
    candidates
      .into_iter()
      .filter_map(|c| {
        let reviews = by_product.remove(&c.id.key())?;
        Some((c, reviews))
      })
      .collect(),
  )
}
