//! The fixed product catalog shipped with the site.

use std::sync::OnceLock;

use crate::domain::product::{PriceTier, ProductId, ProductRecord};

pub const PONDS_DRY_SKIN_CREAM: &str = "ponds-dry-skin-cream";
pub const ESTEE_LAUDER_RE_NUTRIV: &str = "estee-lauder-re-nutriv";
pub const CLINIQUE_TURNAROUND: &str = "clinique-turnaround";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    products: Vec<ProductRecord>,
}

impl Catalog {
    pub fn new(products: Vec<ProductRecord>) -> Self {
        Self { products }
    }

    /// The built-in moisturizer catalog, in display order.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Catalog::new(vec![
                product(
                    PONDS_DRY_SKIN_CREAM,
                    "POND'S Dry Skin Cream Facial Moisturizer",
                    0.79,
                    &["Suitable for dry skin", "Hydrating skin", "Lasting moisture"],
                    PriceTier::BUDGET,
                    "images/cream-1.jpg",
                ),
                product(
                    ESTEE_LAUDER_RE_NUTRIV,
                    "Estée Lauder Re-Nutriv Moisturizer Cream",
                    0.96,
                    &["Instantly moisturizing skin", "Lift Regenerating Firming", "Anti-Aging"],
                    PriceTier::PREMIUM,
                    "images/cream-2.jpg",
                ),
                product(
                    CLINIQUE_TURNAROUND,
                    "Clinique Turnaround™ Revitalizing Moisturizer",
                    0.87,
                    &["Instantly moisturizing skin", "Revitalizing skin", "Fragrance-free"],
                    PriceTier::MID,
                    "images/cream-3.jpg",
                ),
            ])
        })
    }

    pub fn find(&self, product_id: &ProductId) -> Option<&ProductRecord> {
        self.products.iter().find(|product| &product.id == product_id)
    }

    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn product(
    id: &str,
    name: &str,
    match_score: f64,
    bullets: &[&str],
    price_tier: PriceTier,
    image: &str,
) -> ProductRecord {
    ProductRecord {
        id: ProductId::new(id),
        name: name.to_string(),
        match_score,
        bullets: bullets.iter().map(|bullet| (*bullet).to_string()).collect(),
        price_tier,
        image: image.to_string(),
    }
}
