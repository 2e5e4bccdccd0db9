use super::ProductId;

/// The forecast for a single product at its chosen price.
///
/// Prices, monetary amounts and the margin are rounded to two decimal places.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricsRecord {
    /// The product this forecast belongs to
    pub product: ProductId,
    /// The profit-maximizing unit price
    pub optimal_price: f64,
    /// The forecast unit demand, never exceeding the product's capacity
    pub demand: u64,
    /// `demand * optimal_price`
    pub revenue: f64,
    /// `demand * unit_cost`
    pub cost: f64,
    /// `revenue - cost`
    pub profit: f64,
    /// `profit / revenue`, or exactly 0 when there is no revenue
    pub margin: f64,
}
