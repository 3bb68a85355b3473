//! Presentation values derived from domain records.

use serde::Serialize;

use crate::domain::product::{PriceTier, ProductRecord};
use crate::domain::risk::{RiskCategory, RiskReport};

/// Score in `[0, 1]` as a whole percentage, rounding halves up.
pub fn match_percentage(score: f64) -> i64 {
    (score * 100.0 + 0.5).floor() as i64
}

pub fn price_tier_symbol(tier: PriceTier) -> String {
    "$".repeat(usize::from(tier.value()))
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub bullets: Vec<String>,
    pub image: String,
    pub match_percentage: i64,
    pub price_symbol: String,
}

impl From<&ProductRecord> for ProductCard {
    fn from(product: &ProductRecord) -> Self {
        Self {
            id: product.id.0.clone(),
            name: product.name.clone(),
            bullets: product.bullets.clone(),
            image: product.image.clone(),
            match_percentage: match_percentage(product.match_score),
            price_symbol: price_tier_symbol(product.price_tier),
        }
    }
}

pub fn product_cards(products: &[ProductRecord]) -> Vec<ProductCard> {
    products.iter().map(ProductCard::from).collect()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RiskCard {
    pub key: &'static str,
    pub title: &'static str,
    pub percentage: i64,
    pub tags: Vec<String>,
}

pub fn risk_cards(report: &RiskReport) -> Vec<RiskCard> {
    RiskCategory::ALL
        .iter()
        .map(|category| {
            let reading = report.reading(*category);
            RiskCard {
                key: category.key(),
                title: category.title(),
                percentage: match_percentage(reading.score),
                tags: reading.tags.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{match_percentage, price_tier_symbol, product_cards, risk_cards};
    use crate::catalog::Catalog;
    use crate::domain::product::PriceTier;
    use crate::domain::risk::RiskReport;

    #[test]
    fn match_percentage_rounds_half_up() {
        assert_eq!(match_percentage(0.965), 97);
        assert_eq!(match_percentage(0.79), 79);
        assert_eq!(match_percentage(0.005), 1);
        assert_eq!(match_percentage(0.0), 0);
        assert_eq!(match_percentage(1.0), 100);
    }

    #[test]
    fn match_percentage_handles_float_noise() {
        // 0.56 * 100 is 56.00000000000001 in binary floating point.
        assert_eq!(match_percentage(0.56), 56);
    }

    #[test]
    fn price_symbol_repeats_dollar_per_tier() {
        assert_eq!(price_tier_symbol(PriceTier::BUDGET), "$");
        assert_eq!(price_tier_symbol(PriceTier::MID), "$$");
        assert_eq!(price_tier_symbol(PriceTier::PREMIUM), "$$$");
    }

    #[test]
    fn product_cards_carry_derived_badge_and_price() {
        let cards = product_cards(Catalog::builtin().products());
        let badges: Vec<(i64, &str)> =
            cards.iter().map(|card| (card.match_percentage, card.price_symbol.as_str())).collect();
        assert_eq!(badges, vec![(79, "$"), (96, "$$$"), (87, "$$")]);
    }

    #[test]
    fn risk_cards_follow_category_order_with_tags() {
        let cards = risk_cards(&RiskReport::demo());
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].title, "Wrinkle Risk");
        assert_eq!(cards[0].percentage, 56);
        assert_eq!(cards[1].percentage, 82);
        assert_eq!(cards[2].tags, vec!["Vitamin C".to_string(), "Niacinamide".to_string()]);
    }
}
