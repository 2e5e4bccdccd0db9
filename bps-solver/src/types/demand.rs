use crate::PricingError;
use bps_core::models::ProductRecordError;

/// Forecast unit demand at `price` under a constant-elasticity model.
///
/// `raw = base_demand * (price / base_price) ^ elasticity`, rounded to the
/// nearest unit with ties going to the even unit, and clipped at zero.
/// Non-finite or overflowing forecasts saturate at `u64::MAX`; capacity is
/// not applied here.
pub fn demand(
    base_demand: f64,
    base_price: f64,
    price: f64,
    elasticity: f64,
) -> Result<u64, PricingError> {
    // written so that NaN is rejected as well
    if !(price > 0.0) {
        return Err(PricingError::InvalidPrice { price });
    }
    if !base_price.is_finite() {
        return Err(ProductRecordError::NonFinite {
            field: "base_price",
            value: base_price,
        }
        .into());
    }
    if base_price <= 0.0 {
        return Err(ProductRecordError::NonPositiveBasePrice(base_price).into());
    }

    let raw = base_demand * (price / base_price).powf(elasticity);
    let units = raw.round_ties_even();

    // Clip explicitly rather than relying on the rounding direction. The cast
    // saturates, so +inf becomes u64::MAX.
    if units.is_nan() || units <= 0.0 {
        Ok(0)
    } else {
        Ok(units as u64)
    }
}
