//! Risk-profile driven product recommendations.
//!
//! Each rule pairs one risk category with a threshold and a catalog product.
//! Rules are evaluated in order and independently: every rule whose category
//! score is strictly above its threshold contributes its product, so the
//! result order follows the rule order rather than match scores. Results are
//! not deduplicated; two rules naming the same product yield it twice.

use serde::Serialize;

use crate::catalog::{Catalog, CLINIQUE_TURNAROUND, ESTEE_LAUDER_RE_NUTRIV, PONDS_DRY_SKIN_CREAM};
use crate::domain::product::{ProductId, ProductRecord};
use crate::domain::risk::{RiskCategory, RiskProfile};

/// Shown by renderers when no rule matched.
pub const EMPTY_RECOMMENDATIONS_MESSAGE: &str =
    "No specific recommendations at this time. Check out our full product range in the Shop section.";

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RecommendationRule {
    pub category: RiskCategory,
    pub threshold: f64,
    pub product_id: &'static str,
}

impl RecommendationRule {
    pub fn matches(&self, profile: &RiskProfile) -> bool {
        profile.score(self.category) > self.threshold
    }
}

pub const DEFAULT_RULES: [RecommendationRule; 3] = [
    RecommendationRule {
        category: RiskCategory::Wrinkle,
        threshold: 0.5,
        product_id: PONDS_DRY_SKIN_CREAM,
    },
    RecommendationRule {
        category: RiskCategory::Irritation,
        threshold: 0.7,
        product_id: ESTEE_LAUDER_RE_NUTRIV,
    },
    RecommendationRule {
        category: RiskCategory::Hyperpigmentation,
        threshold: 0.2,
        product_id: CLINIQUE_TURNAROUND,
    },
];

pub trait Recommender: Send + Sync {
    fn recommend(&self, profile: &RiskProfile) -> Vec<ProductRecord>;
}

pub struct ThresholdRecommender {
    catalog: Catalog,
    rules: Vec<RecommendationRule>,
}

impl ThresholdRecommender {
    pub fn new(catalog: Catalog, rules: Vec<RecommendationRule>) -> Self {
        Self { catalog, rules }
    }

    pub fn rules(&self) -> &[RecommendationRule] {
        &self.rules
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Default for ThresholdRecommender {
    fn default() -> Self {
        Self::new(Catalog::builtin().clone(), DEFAULT_RULES.to_vec())
    }
}

impl Recommender for ThresholdRecommender {
    fn recommend(&self, profile: &RiskProfile) -> Vec<ProductRecord> {
        select(&self.catalog, &self.rules, profile)
    }
}

/// Recommendations for `profile` from the built-in catalog and default rules.
pub fn recommend(profile: &RiskProfile) -> Vec<ProductRecord> {
    select(Catalog::builtin(), &DEFAULT_RULES, profile)
}

fn select(
    catalog: &Catalog,
    rules: &[RecommendationRule],
    profile: &RiskProfile,
) -> Vec<ProductRecord> {
    rules
        .iter()
        .filter(|rule| rule.matches(profile))
        .filter_map(|rule| catalog.find(&ProductId::new(rule.product_id)))
        .cloned()
        .collect()
}
