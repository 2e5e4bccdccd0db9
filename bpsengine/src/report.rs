use bps_core::{
    models::{MetricsRecord, SummaryRecord},
    ports::Reporter,
};
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

/// The available renderings of a pricing run
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ReportFormat {
    /// A console table followed by the company summary and recommendation
    #[default]
    Table,
    /// A single JSON document
    Json,
}

/// Renders the pricing table, the company summary and the executive
/// recommendation as plain text.
pub struct ConsoleReporter<W: Write>(W);

impl<W: Write> ConsoleReporter<W> {
    pub fn new(writer: W) -> Self {
        Self(writer)
    }

    pub fn into_inner(self) -> W {
        self.0
    }

    fn table(&mut self, metrics: &[MetricsRecord]) -> std::io::Result<()> {
        let width = metrics
            .iter()
            .map(|m| m.product.as_str().chars().count())
            .max()
            .unwrap_or(0)
            .max("product".len());

        writeln!(
            self.0,
            "{:<width$}  {:>13}  {:>10}  {:>14}  {:>14}  {:>14}  {:>7}",
            "product", "optimal_price", "demand", "revenue", "cost", "profit", "margin"
        )?;
        for m in metrics {
            writeln!(
                self.0,
                "{:<width$}  {:>13.2}  {:>10}  {:>14.2}  {:>14.2}  {:>14.2}  {:>7.2}",
                m.product.as_str(),
                m.optimal_price,
                m.demand,
                m.revenue,
                m.cost,
                m.profit,
                m.margin
            )?;
        }
        Ok(())
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    type Error = std::io::Error;

    fn report(
        &mut self,
        summary: &SummaryRecord,
        metrics: &[MetricsRecord],
    ) -> Result<(), Self::Error> {
        writeln!(self.0, "\n===== BOARDROOM PRICING STRATEGY =====\n")?;
        self.table(metrics)?;

        writeln!(self.0, "\n===== COMPANY SUMMARY =====\n")?;
        writeln!(self.0, "Total Revenue: {:.2}", summary.total_revenue)?;
        writeln!(self.0, "Total Profit: {:.2}", summary.total_profit)?;
        writeln!(self.0, "Overall Margin: {:.2}", summary.margin)?;

        writeln!(self.0, "\n===== EXECUTIVE RECOMMENDATION =====\n")?;
        match &summary.top_product {
            Some(top) => {
                writeln!(self.0, "Focus on maximizing sales of {}.\n", top.product)?;
                writeln!(self.0, "Optimal Price: ${:.2}", top.optimal_price)?;
                writeln!(self.0, "Expected Profit: ${:.2}\n", top.profit)?;
                writeln!(
                    self.0,
                    "This product delivers the strongest profit contribution\nunder current demand conditions."
                )?;
            }
            None => writeln!(self.0, "No products were priced.")?,
        }

        self.0.flush()
    }
}

/// Writes `{ "summary": ..., "products": [...] }` as pretty-printed JSON.
pub struct JsonReporter<W: Write>(W);

impl<W: Write> JsonReporter<W> {
    pub fn new(writer: W) -> Self {
        Self(writer)
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: &'a SummaryRecord,
    products: &'a [MetricsRecord],
}

impl<W: Write> Reporter for JsonReporter<W> {
    type Error = serde_json::Error;

    fn report(
        &mut self,
        summary: &SummaryRecord,
        metrics: &[MetricsRecord],
    ) -> Result<(), Self::Error> {
        let report = JsonReport {
            summary,
            products: metrics,
        };
        serde_json::to_writer_pretty(&mut self.0, &report)?;
        writeln!(self.0)
            .and_then(|_| self.0.flush())
            .map_err(serde_json::Error::io)
    }
}
