use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Wrinkle,
    Irritation,
    Hyperpigmentation,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 3] =
        [RiskCategory::Wrinkle, RiskCategory::Irritation, RiskCategory::Hyperpigmentation];

    pub fn title(self) -> &'static str {
        match self {
            Self::Wrinkle => "Wrinkle Risk",
            Self::Irritation => "Irritation Risk",
            Self::Hyperpigmentation => "Hyperpigmentation Risk",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Wrinkle => "wrinkle",
            Self::Irritation => "irritation",
            Self::Hyperpigmentation => "hyperpigmentation",
        }
    }
}

/// Predicted skin-condition risk scores, nominally in `[0, 1]`.
///
/// Range is not enforced; the selector compares whatever it is given. Use
/// [`RiskProfile::validated`] at input boundaries to reject values that are
/// not finite numbers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskProfile {
    pub wrinkle: f64,
    pub irritation: f64,
    pub hyperpigmentation: f64,
}

impl RiskProfile {
    pub const fn new(wrinkle: f64, irritation: f64, hyperpigmentation: f64) -> Self {
        Self { wrinkle, irritation, hyperpigmentation }
    }

    pub fn validated(
        wrinkle: f64,
        irritation: f64,
        hyperpigmentation: f64,
    ) -> Result<Self, DomainError> {
        Self::new(wrinkle, irritation, hyperpigmentation).ensure_finite()
    }

    pub fn ensure_finite(self) -> Result<Self, DomainError> {
        for category in RiskCategory::ALL {
            let score = self.score(category);
            if !score.is_finite() {
                return Err(DomainError::InvalidRiskProfile(format!(
                    "{} score must be a finite number, got {score}",
                    category.key()
                )));
            }
        }
        Ok(self)
    }

    pub fn score(&self, category: RiskCategory) -> f64 {
        match category {
            RiskCategory::Wrinkle => self.wrinkle,
            RiskCategory::Irritation => self.irritation,
            RiskCategory::Hyperpigmentation => self.hyperpigmentation,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskReading {
    pub score: f64,
    pub tags: Vec<String>,
}

impl RiskReading {
    pub fn new(score: f64, tags: &[&str]) -> Self {
        Self { score, tags: tags.iter().map(|tag| (*tag).to_string()).collect() }
    }
}

/// A risk profile together with the ingredient focus tags shown on each card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    pub wrinkle: RiskReading,
    pub irritation: RiskReading,
    pub hyperpigmentation: RiskReading,
}

impl RiskReport {
    pub fn demo() -> Self {
        Self {
            wrinkle: RiskReading::new(0.56, &["Peptides", "Retinol"]),
            irritation: RiskReading::new(0.82, &["Gentle", "Fragrance-free"]),
            hyperpigmentation: RiskReading::new(0.24, &["Vitamin C", "Niacinamide"]),
        }
    }

    pub fn reading(&self, category: RiskCategory) -> &RiskReading {
        match category {
            RiskCategory::Wrinkle => &self.wrinkle,
            RiskCategory::Irritation => &self.irritation,
            RiskCategory::Hyperpigmentation => &self.hyperpigmentation,
        }
    }

    pub fn profile(&self) -> RiskProfile {
        RiskProfile::new(self.wrinkle.score, self.irritation.score, self.hyperpigmentation.score)
    }
}
