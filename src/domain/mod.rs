//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the numeric table produced by the reader (`Table`)
//! - the target/feature split consumed by the fitter (`Dataset`)
//! - run configuration (`FitConfig`, `ApplyConfig`)

pub mod types;

pub use types::*;
