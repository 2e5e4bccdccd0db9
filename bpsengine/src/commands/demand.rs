use anyhow::Context as _;
use bps_core::models::{Catalog, round_cents};
use bps_solver::ProfitObjective;
use std::io::Write;

/// Write the capacity-clamped demand, revenue and profit of each product at `price`.
///
/// If `product` is given, only that product is forecast; naming a product
/// that is not in the catalog is an error.
pub fn forecast<W: Write>(
    catalog: &Catalog,
    price: f64,
    product: Option<&str>,
    mut output: W,
) -> anyhow::Result<()> {
    let records = match product {
        Some(id) => vec![
            catalog
                .get(&id.into())
                .with_context(|| format!("product {id} is not in the catalog"))?,
        ],
        None => catalog.iter().collect(),
    };

    writeln!(
        output,
        "{:<20}  {:>10}  {:>10}  {:>14}  {:>14}",
        "product", "price", "demand", "revenue", "profit"
    )?;

    for record in records {
        let objective = ProfitObjective::new(record);
        let demand = objective
            .demand(price)
            .with_context(|| format!("forecasting product {}", record.product))?;
        let profit = objective.profit(price)?;
        writeln!(
            output,
            "{:<20}  {:>10.2}  {:>10}  {:>14.2}  {:>14.2}",
            record.product.as_str(),
            price,
            demand,
            round_cents(demand as f64 * price),
            round_cents(profit)
        )?;
    }

    output.flush()?;
    Ok(())
}
