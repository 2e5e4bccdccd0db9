use crate::{PricingError, ProfitObjective};
use bps_core::models::{MetricsRecord, ProductRecord, round_cents};

/// Build the forecast for `record` at exactly `price`.
///
/// The quantities are computed the same way as in [`ProfitObjective`], with
/// profit reported un-negated. Revenue and cost are rounded to cents first,
/// and profit and margin are derived from the rounded values, so the record
/// always satisfies `revenue - cost == profit`.
/// A product with no revenue has a margin of exactly zero.
pub fn assemble(record: &ProductRecord, price: f64) -> Result<MetricsRecord, PricingError> {
    record.validate()?;

    let demand = ProfitObjective::new(record).demand(price)?;
    let units = demand as f64;
    let revenue = round_cents(units * price);
    let cost = round_cents(units * record.unit_cost);
    let profit = round_cents(revenue - cost);
    let margin = if revenue > 0.0 { profit / revenue } else { 0.0 };

    Ok(MetricsRecord {
        product: record.product.clone(),
        optimal_price: round_cents(price),
        demand,
        revenue,
        cost,
        profit,
        margin: round_cents(margin),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bps_core::models::ProductRecordError;

    #[test]
    fn rounds_monetary_fields() {
        let record = ProductRecord::new("widget", 100.0, 10.0, -2.0, 1000, 3.0).unwrap();
        let metrics = assemble(&record, 6.004).unwrap();

        // 10000 / 6.004^2 = 277.41
        assert_eq!(metrics.demand, 277);
        assert_eq!(metrics.optimal_price, 6.0);
        assert_eq!(metrics.revenue, 1663.11);
        assert_eq!(metrics.cost, 831.0);
        assert_eq!(metrics.profit, 832.11);
        assert_eq!(metrics.margin, 0.5);
        assert_eq!(metrics.product.as_str(), "widget");
    }

    #[test]
    fn profit_is_revenue_less_cost_to_the_cent() {
        // 100 units regardless of price: revenue 1000.004 rounds down while
        // cost 300.006 rounds up, so the unrounded profit 699.998 would read 700.00
        let record = ProductRecord::new("flat", 100.0, 10.0, 0.0, 1000, 3.00006).unwrap();
        let metrics = assemble(&record, 10.00004).unwrap();

        assert_eq!(metrics.demand, 100);
        assert_eq!(metrics.revenue, 1000.0);
        assert_eq!(metrics.cost, 300.01);
        assert_eq!(metrics.profit, 699.99);
        assert_eq!(metrics.margin, 0.7);
    }

    #[test]
    fn zero_revenue_has_zero_margin() {
        let record = ProductRecord::new("ghost", 0.0, 10.0, -1.5, 100, 2.0).unwrap();
        let metrics = assemble(&record, 12.0).unwrap();
        assert_eq!(metrics.demand, 0);
        assert_eq!(metrics.revenue, 0.0);
        assert_eq!(metrics.profit, 0.0);
        assert_eq!(metrics.margin, 0.0);
    }

    #[test]
    fn demand_never_exceeds_capacity() {
        let record = ProductRecord::new("scarce", 5000.0, 10.0, -1.2, 40, 1.0).unwrap();
        for price in [1.5, 5.0, 10.0, 29.0] {
            assert!(assemble(&record, price).unwrap().demand <= 40);
        }
    }

    #[test]
    fn rejects_invalid_records() {
        let record = ProductRecord {
            product: "broken".into(),
            base_demand: 10.0,
            base_price: -2.0,
            elasticity: -1.0,
            max_capacity: 10,
            unit_cost: 1.0,
        };
        assert_eq!(
            assemble(&record, 5.0),
            Err(PricingError::InvalidRecord(
                ProductRecordError::NonPositiveBasePrice(-2.0)
            ))
        );
    }
}
