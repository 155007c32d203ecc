//! cowin-cli library
//!
//! This crate provides the core functionality for the `cowin-cli` binary.
//! Keep the crate root minimal — implementation and tests live in their modules.
//!
//! ## Overview
//!
//! The library is a single linear pipeline over a range of pin codes:
//!
//! - [`cli`] - Command-line interface, input resolution, and the query banner
//! - [`scanner`] - Iterates the pin-code range, tolerating per-pin-code failures
//! - [`fetcher`] - Builds request URLs and performs the availability GET
//! - [`reporter`] - Parses the JSON payload, filters sessions, renders report lines
//! - [`models`] - Query, vaccine filter, and wire data structures
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! The binary resolves a query from CLI arguments and runs the scan:
//!
//! ```no_run
//! use cowin_cli::{cli, errors::AppResult};
//!
//! # async fn example() -> AppResult<()> {
//! cli::cli().await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod constants;
pub mod errors;
pub mod fetcher;
pub mod logging;
pub mod models;
pub mod reporter;
pub mod scanner;
