use bps_core::models::ProductRecordError;

/// The ways in which pricing a single product can fail.
///
/// Every variant is local to the product being priced; the caller decides
/// whether to skip the product or abort the run.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum PricingError {
    /// The demand model was asked for demand at a non-positive (or NaN) price
    #[error("price must be positive, got {price}")]
    InvalidPrice {
        /// The offending price
        price: f64,
    },
    /// The search interval is inverted or has a non-finite end
    #[error("invalid search interval [{lower}, {upper}]")]
    InvalidBounds {
        /// The lower end of the interval
        lower: f64,
        /// The upper end of the interval
        upper: f64,
    },
    /// The product record violates its invariants
    #[error("invalid product record: {0}")]
    InvalidRecord(#[from] ProductRecordError),
}
