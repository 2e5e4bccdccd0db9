use super::ProductId;

/// A catalog row: the demand parameters and cost structure of a single product.
///
/// Demand is modeled with constant elasticity around a reference point
/// (`base_price`, `base_demand`), truncated at `max_capacity` units.
///
/// The fields are public so that records can be built directly, but every
/// computation over a record first calls [`ProductRecord::validate`].
/// Deserialization always validates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ProductRecordDto", into = "ProductRecordDto")
)]
pub struct ProductRecord {
    /// The product identifier, unique within a catalog
    pub product: ProductId,
    /// The unit demand observed at `base_price` (finite, ≥ 0)
    pub base_demand: f64,
    /// The reference price (finite, > 0)
    pub base_price: f64,
    /// The exponent of the demand curve (finite, typically negative)
    pub elasticity: f64,
    /// The most units that can be produced or sold
    pub max_capacity: u64,
    /// The marginal cost of a unit (finite, ≥ 0)
    pub unit_cost: f64,
}

impl ProductRecord {
    /// Creates a new record, validating all of its fields
    pub fn new(
        product: impl Into<ProductId>,
        base_demand: f64,
        base_price: f64,
        elasticity: f64,
        max_capacity: u64,
        unit_cost: f64,
    ) -> Result<Self, ProductRecordError> {
        let record = Self {
            product: product.into(),
            base_demand,
            base_price,
            elasticity,
            max_capacity,
            unit_cost,
        };
        record.validate()?;
        Ok(record)
    }

    /// Check the invariants the demand model relies on.
    pub fn validate(&self) -> Result<(), ProductRecordError> {
        if self.product.as_str().trim().is_empty() {
            return Err(ProductRecordError::EmptyProduct);
        }

        for (field, value) in [
            ("base_demand", self.base_demand),
            ("base_price", self.base_price),
            ("elasticity", self.elasticity),
            ("unit_cost", self.unit_cost),
        ] {
            if !value.is_finite() {
                return Err(ProductRecordError::NonFinite { field, value });
            }
        }

        if self.base_price <= 0.0 {
            Err(ProductRecordError::NonPositiveBasePrice(self.base_price))
        } else if self.base_demand < 0.0 {
            Err(ProductRecordError::NegativeBaseDemand(self.base_demand))
        } else if self.unit_cost < 0.0 {
            Err(ProductRecordError::NegativeUnitCost(self.unit_cost))
        } else {
            Ok(())
        }
    }
}

/// A DTO to ensure that we always validate when we deserialize from an untrusted source.
///
/// Tabular sources frequently render integers as floats, so the capacity is
/// accepted as any number and checked to be a non-negative integer.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug)]
pub struct ProductRecordDto {
    /// The product identifier
    pub product: String,
    /// The unit demand observed at `base_price`
    pub base_demand: f64,
    /// The reference price
    pub base_price: f64,
    /// The exponent of the demand curve
    pub elasticity: f64,
    /// The most units that can be produced or sold
    pub max_capacity: f64,
    /// The marginal cost of a unit
    pub unit_cost: f64,
}

impl TryFrom<ProductRecordDto> for ProductRecord {
    type Error = ProductRecordError;

    fn try_from(value: ProductRecordDto) -> Result<Self, Self::Error> {
        let ProductRecordDto {
            product,
            base_demand,
            base_price,
            elasticity,
            max_capacity,
            unit_cost,
        } = value;

        if !max_capacity.is_finite()
            || max_capacity < 0.0
            || max_capacity.fract() != 0.0
            || max_capacity > u64::MAX as f64
        {
            return Err(ProductRecordError::InvalidCapacity(max_capacity));
        }

        Self::new(
            product,
            base_demand,
            base_price,
            elasticity,
            max_capacity as u64,
            unit_cost,
        )
    }
}

impl From<ProductRecord> for ProductRecordDto {
    fn from(value: ProductRecord) -> Self {
        Self {
            product: value.product.as_str().to_owned(),
            base_demand: value.base_demand,
            base_price: value.base_price,
            elasticity: value.elasticity,
            max_capacity: value.max_capacity as f64,
            unit_cost: value.unit_cost,
        }
    }
}

/// The ways in which a product record can be invalid
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ProductRecordError {
    /// The identifier is empty or whitespace
    #[error("product identifier is empty")]
    EmptyProduct,
    /// A numeric field is NaN or infinite
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// The name of the offending field
        field: &'static str,
        /// The offending value
        value: f64,
    },
    /// The reference price is zero or negative
    #[error("base_price must be positive, got {0}")]
    NonPositiveBasePrice(f64),
    /// The reference demand is negative
    #[error("base_demand must be non-negative, got {0}")]
    NegativeBaseDemand(f64),
    /// The unit cost is negative
    #[error("unit_cost must be non-negative, got {0}")]
    NegativeUnitCost(f64),
    /// The capacity is negative, fractional, or not finite
    #[error("max_capacity must be a non-negative integer, got {0}")]
    InvalidCapacity(f64),
}
