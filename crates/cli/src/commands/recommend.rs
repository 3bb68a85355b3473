use lumilab_core::display::{product_cards, ProductCard};
use lumilab_core::domain::risk::{RiskProfile, RiskReport};
use lumilab_core::errors::DomainError;
use lumilab_core::recommend::{recommend, EMPTY_RECOMMENDATIONS_MESSAGE};
use serde::Serialize;

use super::{CommandResult, EXIT_INVALID};

const COMMAND: &str = "recommend";

#[derive(Clone, Copy, Debug, Default)]
pub struct ProfileArgs {
    pub wrinkle: Option<f64>,
    pub irritation: Option<f64>,
    pub hyperpigmentation: Option<f64>,
    pub demo: bool,
}

impl ProfileArgs {
    fn resolve(self) -> Result<RiskProfile, DomainError> {
        if self.demo {
            return Ok(RiskReport::demo().profile());
        }
        RiskProfile::validated(
            self.wrinkle.ok_or_else(|| missing("wrinkle"))?,
            self.irritation.ok_or_else(|| missing("irritation"))?,
            self.hyperpigmentation.ok_or_else(|| missing("hyperpigmentation"))?,
        )
    }
}

#[derive(Debug, Serialize)]
struct RecommendReport {
    command: &'static str,
    status: &'static str,
    profile: RiskProfile,
    products: Vec<ProductCard>,
    empty_message: Option<&'static str>,
}

pub fn run(args: ProfileArgs, json_output: bool) -> CommandResult {
    let profile = match args.resolve() {
        Ok(profile) => profile,
        Err(error) => {
            return CommandResult::failure(COMMAND, "invalid_input", error.to_string(), EXIT_INVALID)
        }
    };

    let products = product_cards(&recommend(&profile));
    let report = RecommendReport {
        command: COMMAND,
        status: "ok",
        profile,
        empty_message: products.is_empty().then_some(EMPTY_RECOMMENDATIONS_MESSAGE),
        products,
    };

    if json_output {
        return CommandResult::json(COMMAND, &report);
    }
    CommandResult::text(render_human(&report))
}

fn render_human(report: &RecommendReport) -> String {
    let mut lines = vec![format!(
        "risk profile: wrinkle {}, irritation {}, hyperpigmentation {}",
        report.profile.wrinkle, report.profile.irritation, report.profile.hyperpigmentation
    )];

    if let Some(message) = report.empty_message {
        lines.push(message.to_string());
        return lines.join("\n");
    }

    for (position, product) in report.products.iter().enumerate() {
        lines.push(format!(
            "{}. {} ({}% match, {})",
            position + 1,
            product.name,
            product.match_percentage,
            product.price_symbol
        ));
        for bullet in &product.bullets {
            lines.push(format!("   - {bullet}"));
        }
    }
    lines.join("\n")
}

fn missing(field: &str) -> DomainError {
    DomainError::InvalidRiskProfile(format!("missing --{field} score"))
}
