use anyhow::Context as _;
use bps_core::models::{Catalog, ProductRecord};
use clap::Args;
use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write, stdin, stdout},
    path::PathBuf,
    str::FromStr,
};
use tracing::{Level, event};

// Both subcommands read a catalog and write a plain-text or JSON rendering of it.
#[derive(Args)]
pub struct IOArgs {
    /// The product catalog CSV file ("-" implies stdin)
    #[arg(value_parser = clap::value_parser!(Stream))]
    input: Stream,

    /// The output file ("-" implies stdout)
    #[arg(short, long, default_value = "-", value_parser = clap::value_parser!(Stream))]
    output: Stream,
}

impl IOArgs {
    pub fn read(&self) -> anyhow::Result<Box<dyn Read>> {
        match &self.input {
            Stream::File(path) => Ok(Box::new(BufReader::new(
                File::open(path).with_context(|| format!("opening {}", path.display()))?,
            ))),
            Stream::Std => Ok(Box::new(stdin().lock())),
        }
    }

    pub fn write(&self) -> anyhow::Result<Box<dyn Write>> {
        match &self.output {
            Stream::File(path) => Ok(Box::new(BufWriter::new(
                File::create(path).with_context(|| format!("creating {}", path.display()))?,
            ))),
            Stream::Std => Ok(Box::new(stdout().lock())),
        }
    }

    /// Read and validate the catalog named by the input argument
    pub fn catalog(&self) -> anyhow::Result<Catalog> {
        let catalog = load_catalog(self.read()?)?;
        event!(Level::INFO, products = catalog.len(), "loaded catalog");
        Ok(catalog)
    }
}

/// Parse a CSV catalog with the header
/// `product,base_demand,base_price,elasticity,max_capacity,unit_cost`.
///
/// Rows are validated as they are read; the first invalid row aborts the load.
pub fn load_catalog(reader: impl Read) -> anyhow::Result<Catalog> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let records = reader
        .deserialize::<ProductRecord>()
        .enumerate()
        .map(|(row, record)| record.with_context(|| format!("reading catalog row {}", row + 1)))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(Catalog::new(records)?)
}

/// A file path, or the standard stream when given as "-"
#[derive(Clone, Debug)]
enum Stream {
    File(PathBuf),
    Std,
}

impl FromStr for Stream {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "-" => Self::Std,
            path => Self::File(PathBuf::from(path)),
        })
    }
}
