use super::{MetricsRecord, round_cents};

/// Company-wide totals over a run of per-product forecasts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummaryRecord {
    /// The sum of every product's revenue
    pub total_revenue: f64,
    /// The sum of every product's profit
    pub total_profit: f64,
    /// `total_profit / total_revenue`, or exactly 0 when there is no revenue
    pub margin: f64,
    /// The product contributing the most profit, if any products were given
    pub top_product: Option<MetricsRecord>,
}

impl SummaryRecord {
    /// Reduce a sequence of forecasts into company-wide totals.
    ///
    /// Totals do not depend on the order of the input. When several products
    /// tie for the highest profit, the first one encountered is reported.
    pub fn from_metrics<'a>(metrics: impl IntoIterator<Item = &'a MetricsRecord>) -> Self {
        let mut total_revenue = 0.0;
        let mut total_profit = 0.0;
        let mut top_product: Option<&MetricsRecord> = None;

        for record in metrics {
            total_revenue += record.revenue;
            total_profit += record.profit;

            // strict comparison keeps the earliest of equally profitable products
            if top_product.is_none_or(|top| record.profit > top.profit) {
                top_product = Some(record);
            }
        }

        let margin = if total_revenue > 0.0 {
            total_profit / total_revenue
        } else {
            0.0
        };

        Self {
            total_revenue: round_cents(total_revenue),
            total_profit: round_cents(total_profit),
            margin: round_cents(margin),
            top_product: top_product.cloned(),
        }
    }
}

impl<'a> FromIterator<&'a MetricsRecord> for SummaryRecord {
    fn from_iter<I: IntoIterator<Item = &'a MetricsRecord>>(iter: I) -> Self {
        Self::from_metrics(iter)
    }
}
