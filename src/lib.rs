//! `ols-stats` library crate.
//!
//! The binary (`ols`) is a thin wrapper around this library so that:
//!
//! - the reader, solver and fitter are testable without spawning processes
//! - the fit/apply pipelines can be driven directly from other code

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod models;
pub mod report;
