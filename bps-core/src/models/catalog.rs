use super::{Map, ProductId, ProductRecord, ProductRecordError};

/// An ordered collection of validated product records with unique identifiers.
///
/// Iteration follows the order in which records were supplied, which is the
/// order results are reported in.
#[derive(Clone, Debug, Default)]
pub struct Catalog(Map<ProductId, ProductRecord>);

impl Catalog {
    /// Build a catalog, validating every record and rejecting duplicate identifiers.
    ///
    /// Errors report the zero-based position of the offending record.
    pub fn new(records: impl IntoIterator<Item = ProductRecord>) -> Result<Self, CatalogError> {
        let mut map = Map::default();
        for (row, record) in records.into_iter().enumerate() {
            record
                .validate()
                .map_err(|source| CatalogError::InvalidRecord { row, source })?;

            if map.contains_key(&record.product) {
                return Err(CatalogError::Duplicate {
                    row,
                    product: record.product,
                });
            }
            map.insert(record.product.clone(), record);
        }
        Ok(Self(map))
    }

    /// The number of products in the catalog
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the catalog has no products
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up a product by its identifier
    pub fn get(&self, product: &ProductId) -> Option<&ProductRecord> {
        self.0.get(product)
    }

    /// Iterate over the records in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &ProductRecord> {
        self.0.values()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ProductRecord;
    type IntoIter = indexmap::map::Values<'a, ProductId, ProductRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.values()
    }
}

/// The ways in which a catalog can fail to load
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// A record failed validation
    #[error("invalid record at row {row}: {source}")]
    InvalidRecord {
        /// The position of the record
        row: usize,
        /// What was wrong with it
        source: ProductRecordError,
    },
    /// Two records share an identifier
    #[error("duplicate product {product} at row {row}")]
    Duplicate {
        /// The position of the second occurrence
        row: usize,
        /// The repeated identifier
        product: ProductId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(product: &str, base_price: f64) -> ProductRecord {
        ProductRecord {
            product: product.into(),
            base_demand: 100.0,
            base_price,
            elasticity: -1.5,
            max_capacity: 500,
            unit_cost: 2.0,
        }
    }

    #[test]
    fn test_preserves_order() {
        let catalog = Catalog::new(vec![
            record("zeta", 10.0),
            record("alpha", 12.0),
            record("mid", 8.0),
        ])
        .unwrap();

        let ids = catalog
            .iter()
            .map(|r| r.product.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.get(&"alpha".into()).map(|r| r.base_price),
            Some(12.0)
        );
    }

    #[test]
    fn test_rejects_duplicates() {
        let result = Catalog::new(vec![record("a", 10.0), record("b", 5.0), record("a", 7.0)]);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::Duplicate {
                row: 2,
                product: "a".into()
            }
        );
    }

    #[test]
    fn test_rejects_invalid_records() {
        let result = Catalog::new(vec![record("a", 10.0), record("b", -1.0)]);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::InvalidRecord {
                row: 1,
                source: ProductRecordError::NonPositiveBasePrice(-1.0)
            }
        );
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.iter().count(), 0);
    }

    #[test]
    fn test_load_from_csv() {
        let raw = "\
product,base_demand,base_price,elasticity,max_capacity,unit_cost
Laptop,1200,900,-1.8,2000,550
Phone,3000,600,-2.2,4000,320
";
        let mut reader = csv::Reader::from_reader(raw.as_bytes());
        let records = reader
            .deserialize::<ProductRecord>()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        let catalog = Catalog::new(records).unwrap();

        assert_eq!(catalog.len(), 2);
        let phone = catalog.get(&"Phone".into()).unwrap();
        assert_eq!(phone.max_capacity, 4000);
        assert_eq!(phone.elasticity, -2.2);
    }
}
