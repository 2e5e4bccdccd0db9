use crate::{PricingError, demand};
use bps_core::models::ProductRecord;

/// The profit of selling a product at a given price, in the sign convention
/// of the minimizers: [`ProfitObjective::evaluate`] returns the *negated* profit.
///
/// Demand is forecast by [`demand`] and only then truncated at the product's
/// capacity, so the capacity cuts the curve off rather than reshaping it.
#[derive(Clone, Copy, Debug)]
pub struct ProfitObjective<'a> {
    record: &'a ProductRecord,
}

impl<'a> ProfitObjective<'a> {
    /// Wrap a (validated) product record
    pub fn new(record: &'a ProductRecord) -> Self {
        Self { record }
    }

    /// The capacity-clamped unit demand at `price`
    pub fn demand(&self, price: f64) -> Result<u64, PricingError> {
        let ProductRecord {
            base_demand,
            base_price,
            elasticity,
            max_capacity,
            ..
        } = *self.record;
        Ok(demand(base_demand, base_price, price, elasticity)?.min(max_capacity))
    }

    /// `revenue - cost` at `price`
    pub fn profit(&self, price: f64) -> Result<f64, PricingError> {
        let units = self.demand(price)? as f64;
        let revenue = units * price;
        let cost = units * self.record.unit_cost;
        Ok(revenue - cost)
    }

    /// `-(revenue - cost)` at `price`, for use with a minimizer
    pub fn evaluate(&self, price: f64) -> Result<f64, PricingError> {
        Ok(-self.profit(price)?)
    }
}

/// The negated profit of `record` at `price`.
pub fn objective(price: f64, record: &ProductRecord) -> Result<f64, PricingError> {
    ProfitObjective::new(record).evaluate(price)
}
