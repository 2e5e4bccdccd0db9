#![warn(missing_docs)]
//! Models and ports for computing profit-maximizing prices over a product catalog.
//!
//! The crates in this workspace are layered the same way:
//! - `bps_core` (this crate) holds the plain data types and the traits that
//!   separate computation from presentation,
//! - `bps_solver` holds the demand model and the bounded price optimizer,
//! - `bpsengine` is a command-line front-end that reads a CSV catalog and
//!   renders the results.

/// Core domain models for price optimization.
///
/// These are data structures with minimal business logic: the validated
/// input records, the per-product result records, and the company-wide
/// reduction over those results.
pub mod models;

/// Interface traits for the pricing system.
///
/// These traits define the contract between the computation and external
/// adapters (such as a console or a JSON file) without specifying
/// implementation details.
pub mod ports;
