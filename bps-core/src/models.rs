mod catalog;
mod metrics;
mod product;
mod summary;

pub use catalog::{Catalog, CatalogError};
pub use metrics::MetricsRecord;
pub use product::{ProductRecord, ProductRecordDto, ProductRecordError};
pub use summary::SummaryRecord;

use std::fmt;

/// A hashmap with deterministic (insertion) ordering
pub type Map<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;

macro_rules! string_wrapper {
    ($struct:ident) => {
        #[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        #[doc = concat!("A newtype wrapper for ", stringify!($struct))]
        pub struct $struct(String);

        impl $struct {
            /// View the underlying identifier
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $struct {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $struct {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl fmt::Display for $struct {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

string_wrapper!(ProductId);

/// Round a monetary quantity (or ratio) to two decimal places.
///
/// Ties are broken towards the even cent, which is the same convention used
/// for rounding unit demand.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
