use crate::models::{MetricsRecord, SummaryRecord};

/// Interface for presenting the results of a pricing run.
///
/// Computation never prints; instead, the per-product forecasts and their
/// reduction are handed to a reporter, which decides how (and where) to
/// render them.
pub trait Reporter {
    /// Error type for rendering failures
    type Error: std::error::Error;

    /// Render a completed run.
    ///
    /// # Arguments
    ///
    /// - `summary`: the company-wide totals, including the top product
    /// - `metrics`: the per-product forecasts, in catalog order
    fn report(
        &mut self,
        summary: &SummaryRecord,
        metrics: &[MetricsRecord],
    ) -> Result<(), Self::Error>;
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    type Error = R::Error;

    fn report(
        &mut self,
        summary: &SummaryRecord,
        metrics: &[MetricsRecord],
    ) -> Result<(), Self::Error> {
        (**self).report(summary, metrics)
    }
}
