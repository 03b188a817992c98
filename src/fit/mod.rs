//! Model fitting.
//!
//! - `ols`: normal-equations least squares with an implicit intercept

pub mod ols;

pub use ols::*;
