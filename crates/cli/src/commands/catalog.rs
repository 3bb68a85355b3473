use lumilab_core::catalog::Catalog;
use lumilab_core::display::{product_cards, ProductCard};
use serde::Serialize;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct CatalogReport {
    command: &'static str,
    status: &'static str,
    products: Vec<ProductCard>,
}

pub fn run(json_output: bool) -> CommandResult {
    let products = product_cards(Catalog::builtin().products());

    if json_output {
        let report = CatalogReport { command: "catalog", status: "ok", products };
        return CommandResult::json("catalog", &report);
    }

    let lines: Vec<String> = products
        .iter()
        .map(|product| {
            format!(
                "- {} [{}] {}% match, {}",
                product.name, product.id, product.match_percentage, product.price_symbol
            )
        })
        .collect();
    CommandResult::text(lines.join("\n"))
}
